use crate::particles::Sprite;

/// Surface that accepts sprites for drawing
///
/// Implemented by the host renderer. The particle engine only submits
/// sprites; it never inspects what the target does with them.
pub trait RenderTarget {
    fn draw_sprite(&mut self, sprite: &Sprite);
}

/// Data needed for rendering a sprite on the GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub origin: [f32; 2],
    pub scale: [f32; 2],
    /// Rotation in radians
    pub rotation: f32,
    pub texture_id: u32,
    /// Normalized RGBA
    pub color: [f32; 4],
}

impl SpriteInstance {
    /// Texture id written for untextured sprites
    pub const NO_TEXTURE: u32 = u32::MAX;
}

/// Render target that records instance data in submission order
#[derive(Debug, Default, Clone)]
pub struct SpriteBatch {
    instances: Vec<SpriteInstance>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    /// Raw bytes ready for a vertex/instance buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }
}

impl RenderTarget for SpriteBatch {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.instances.push(sprite.to_instance());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::{Color, TextureHandle};
    use glam::{UVec2, Vec2};

    #[test]
    fn test_batch_records_in_order() {
        let mut batch = SpriteBatch::new();
        let mut sprite = Sprite::new();

        for i in 0..3 {
            sprite.set_position(Vec2::new(i as f32, 0.0));
            batch.draw_sprite(&sprite);
        }

        let xs: Vec<f32> = batch.instances().iter().map(|i| i.position[0]).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_instance_bytes() {
        let mut batch = SpriteBatch::with_capacity(2);
        let mut sprite = Sprite::new();
        sprite.set_texture(TextureHandle::new(7, UVec2::new(4, 4)));
        sprite.set_color(Color::rgba(255, 0, 0, 0));
        batch.draw_sprite(&sprite);
        batch.draw_sprite(&sprite);

        assert_eq!(
            batch.as_bytes().len(),
            2 * std::mem::size_of::<SpriteInstance>()
        );
        assert_eq!(batch.instances()[0].texture_id, 7);
        assert_eq!(batch.instances()[0].color, [1.0, 0.0, 0.0, 0.0]);

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_untextured_sprite_instance() {
        let instance = Sprite::new().to_instance();
        assert_eq!(instance.texture_id, SpriteInstance::NO_TEXTURE);
        assert_eq!(instance.scale, [1.0, 1.0]);
    }
}
