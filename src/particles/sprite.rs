use glam::{UVec2, Vec2};

use crate::particles::render::SpriteInstance;
use crate::particles::{Angle, Color};

/// Reference to a texture owned by the caller
///
/// The particle engine never owns texture memory; the caller keeps the
/// texture alive for as long as any sprite refers to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    /// Renderer-side texture id
    pub id: u32,
    /// Native size in pixels
    pub size: UVec2,
}

impl TextureHandle {
    pub fn new(id: u32, size: UVec2) -> Self {
        Self { id, size }
    }
}

/// Sub-rectangle of a texture, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl TextureRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Textured quad with a 2D transform and a color
///
/// Used both as the per-particle visual state and as the template the
/// engine clones for every new particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    position: Vec2,
    rotation: Angle,
    scale: Vec2,
    origin: Vec2,
    color: Color,
    texture: Option<TextureHandle>,
    texture_rect: TextureRect,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: Angle::ZERO,
            scale: Vec2::ONE,
            origin: Vec2::ZERO,
            color: Color::WHITE,
            texture: None,
            texture_rect: TextureRect::default(),
        }
    }
}

impl Sprite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a texture
    ///
    /// An empty texture rectangle is reset to cover the whole texture;
    /// a rectangle set earlier is kept.
    pub fn set_texture(&mut self, texture: TextureHandle) {
        if self.texture_rect.is_empty() {
            self.texture_rect = TextureRect::new(
                0,
                0,
                texture.size.x as i32,
                texture.size.y as i32,
            );
        }
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    pub fn set_texture_rect(&mut self, rect: TextureRect) {
        self.texture_rect = rect;
    }

    pub fn texture_rect(&self) -> TextureRect {
        self.texture_rect
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Translate by an offset
    pub fn move_by(&mut self, offset: Vec2) {
        self.position += offset;
    }

    pub fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation;
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Multiply the current scale component-wise
    pub fn scale_by(&mut self, factors: Vec2) {
        self.scale *= factors;
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Scale so the texture rectangle renders at `size`
    ///
    /// Leaves the scale untouched when the rectangle has zero width or height.
    pub fn fit_to_size(&mut self, size: Vec2) {
        let rect = self.texture_rect;
        if rect.is_empty() {
            return;
        }

        self.scale = Vec2::new(
            size.x / rect.width.unsigned_abs() as f32,
            size.y / rect.height.unsigned_abs() as f32,
        );
    }

    /// Flatten into GPU instance data
    pub fn to_instance(&self) -> SpriteInstance {
        SpriteInstance {
            position: self.position.to_array(),
            origin: self.origin.to_array(),
            scale: self.scale.to_array(),
            rotation: self.rotation.as_radians(),
            texture_id: self.texture.map_or(SpriteInstance::NO_TEXTURE, |t| t.id),
            color: self.color.to_array_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_texture_resets_empty_rect() {
        let mut sprite = Sprite::new();
        sprite.set_texture(TextureHandle::new(3, UVec2::new(64, 16)));

        assert_eq!(sprite.texture_rect(), TextureRect::new(0, 0, 64, 16));
        assert_eq!(sprite.texture().map(|t| t.id), Some(3));
    }

    #[test]
    fn test_set_texture_keeps_custom_rect() {
        let mut sprite = Sprite::new();
        sprite.set_texture_rect(TextureRect::new(8, 8, 16, 16));
        sprite.set_texture(TextureHandle::new(1, UVec2::new(128, 128)));

        assert_eq!(sprite.texture_rect(), TextureRect::new(8, 8, 16, 16));
    }

    #[test]
    fn test_fit_to_size() {
        let mut sprite = Sprite::new();
        sprite.set_texture(TextureHandle::new(0, UVec2::new(64, 16)));
        sprite.fit_to_size(Vec2::new(32.0, 32.0));

        assert_eq!(sprite.scale(), Vec2::new(0.5, 2.0));
    }

    #[test]
    fn test_fit_to_size_uses_absolute_rect_extent() {
        let mut sprite = Sprite::new();
        sprite.set_texture_rect(TextureRect::new(0, 0, -16, 8));
        sprite.fit_to_size(Vec2::new(32.0, 32.0));

        assert_eq!(sprite.scale(), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_fit_to_size_without_texture_is_noop() {
        let mut sprite = Sprite::new();
        sprite.set_scale(Vec2::new(3.0, 3.0));
        sprite.fit_to_size(Vec2::new(32.0, 32.0));

        assert_eq!(sprite.scale(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_scale_by_compounds() {
        let mut sprite = Sprite::new();
        sprite.scale_by(Vec2::new(2.0, 0.5));
        sprite.scale_by(Vec2::new(2.0, 0.5));

        assert_eq!(sprite.scale(), Vec2::new(4.0, 0.25));
    }

    #[test]
    fn test_move_by() {
        let mut sprite = Sprite::new();
        sprite.set_position(Vec2::new(1.0, 1.0));
        sprite.move_by(Vec2::new(2.0, -3.0));

        assert_eq!(sprite.position(), Vec2::new(3.0, -2.0));
    }
}
