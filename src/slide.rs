use raylib::prelude::*;

pub struct Slide<T> {
    pub content: T,
    pub active: bool,
}

impl<T> Slide<T> {
    pub fn new(content: T) -> Self {
        Self { content, active: false }
    }
}

/// Position marker for one slide. `slide_to` is the slide it jumps to when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub slide_to: usize,
    pub active: bool,
}

impl Slide<Texture2D> {
    /// Draws the texture as a background image covering `bounds`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle) {
        if !self.active {
            return;
        }

        let tex_width = self.content.width() as f32;
        let tex_height = self.content.height() as f32;

        d.draw_texture_pro(
            &self.content,
            cover_source(tex_width, tex_height, bounds.width, bounds.height),
            bounds,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

/// Source rectangle that crops a `tex_width` x `tex_height` image so it fills
/// a `dest_width` x `dest_height` area without distortion, centered.
pub fn cover_source(
    tex_width: f32,
    tex_height: f32,
    dest_width: f32,
    dest_height: f32,
) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 || dest_width <= 0.0 || dest_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_width.max(0.0), tex_height.max(0.0));
    }

    let scale = (dest_width / tex_width).max(dest_height / tex_height);
    let visible_width = dest_width / scale;
    let visible_height = dest_height / scale;

    Rectangle::new(
        (tex_width - visible_width) * 0.5,
        (tex_height - visible_height) * 0.5,
        visible_width,
        visible_height,
    )
}
