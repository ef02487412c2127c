use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Planar angle
///
/// Stored in radians. Serialized as a plain number of degrees so emitter
/// presets stay readable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// Create an angle from degrees
    pub fn degrees(degrees: f32) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Create an angle from radians
    pub fn radians(radians: f32) -> Self {
        Self { radians }
    }

    pub fn as_degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    pub fn as_radians(self) -> f32 {
        self.radians
    }
}

impl From<f32> for Angle {
    fn from(degrees: f32) -> Self {
        Angle::degrees(degrees)
    }
}

impl From<Angle> for f32 {
    fn from(angle: Angle) -> Self {
        angle.as_degrees()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f32) -> Angle {
        Angle::radians(self.radians * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_radian_conversion() {
        let angle = Angle::degrees(180.0);
        assert!((angle.as_radians() - std::f32::consts::PI).abs() < 1e-6);
        assert!((Angle::radians(std::f32::consts::FRAC_PI_2).as_degrees() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_arithmetic() {
        let sum = Angle::degrees(30.0) + Angle::degrees(15.0);
        assert!((sum.as_degrees() - 45.0).abs() < 1e-4);

        let half = Angle::degrees(90.0) * 0.5;
        assert!((half.as_degrees() - 45.0).abs() < 1e-4);

        let diff = -(Angle::degrees(10.0) - Angle::degrees(40.0));
        assert!((diff.as_degrees() - 30.0).abs() < 1e-4);
    }
}
