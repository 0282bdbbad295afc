use raylib::prelude::*;

use crate::constants::*;
use crate::slide::Indicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Pause,
    Play,
    Prev,
    Next,
}

/// What a click inside the carousel landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PausePlay,
    Prev,
    Next,
    Indicator(usize),
}

/// Pause/prev/next buttons and the indicator row, positioned inside a
/// carousel's bounds.
#[derive(Debug, Clone)]
pub struct Controls {
    pub pause: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    /// Dot centers, one per slide, in slide order.
    pub indicators: Vec<Vector2>,
    spacing: f32,
}

impl Controls {
    pub fn layout(bounds: Rectangle, slide_count: usize) -> Self {
        let mid_y = bounds.y + (bounds.height - CONTROL_SIZE) * 0.5;

        let prev = Rectangle::new(bounds.x + CONTROL_MARGIN, mid_y, CONTROL_SIZE, CONTROL_SIZE);
        let next = Rectangle::new(
            bounds.x + bounds.width - CONTROL_MARGIN - CONTROL_SIZE,
            mid_y,
            CONTROL_SIZE,
            CONTROL_SIZE,
        );
        let pause = Rectangle::new(
            bounds.x + CONTROL_MARGIN,
            bounds.y + bounds.height - CONTROL_MARGIN - CONTROL_SIZE,
            CONTROL_SIZE,
            CONTROL_SIZE,
        );

        // The row stays clear of the pause button, shrinking when slides are many.
        let available = (bounds.width - 2.0 * (CONTROL_MARGIN + CONTROL_SIZE)).max(0.0);
        let spacing = if slide_count == 0 {
            INDICATOR_SPACING
        } else {
            INDICATOR_SPACING.min(available / slide_count as f32)
        };

        let row_width = slide_count.saturating_sub(1) as f32 * spacing;
        let first_x = bounds.x + (bounds.width - row_width) * 0.5;
        let dot_y = bounds.y + bounds.height - INDICATOR_MARGIN;
        let indicators = (0..slide_count)
            .map(|i| Vector2::new(first_x + i as f32 * spacing, dot_y))
            .collect();

        Self { pause, prev, next, indicators, spacing }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        if contains(self.pause, point) {
            return Some(Hit::PausePlay);
        }
        if contains(self.prev, point) {
            return Some(Hit::Prev);
        }
        if contains(self.next, point) {
            return Some(Hit::Next);
        }

        // Dots are small, so accept a touch anywhere in their spacing cell.
        let reach = self.spacing * 0.5;
        self.indicators
            .iter()
            .position(|c| (point.x - c.x).abs() <= reach && (point.y - c.y).abs() <= reach)
            .map(Hit::Indicator)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, pause_glyph: Glyph, indicators: &[Indicator]) {
        draw_button(d, self.pause, pause_glyph);
        draw_button(d, self.prev, Glyph::Prev);
        draw_button(d, self.next, Glyph::Next);

        for (center, indicator) in self.indicators.iter().zip(indicators) {
            let color = if indicator.active { INDICATOR_ACTIVE } else { INDICATOR_INACTIVE };
            let radius = INDICATOR_RADIUS.min(self.spacing * 0.4).max(1.0);
            d.draw_circle_v(*center, radius, color);
        }
    }
}

pub fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, glyph: Glyph) {
    d.draw_rectangle_rec(rect, CONTROL_BACKGROUND);

    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let r = rect.width * 0.25;

    // Triangles are given counter-clockwise, as raylib expects.
    match glyph {
        Glyph::Pause => {
            let bar = Rectangle::new(0.0, cy - r, r * 0.6, r * 2.0);
            d.draw_rectangle_rec(Rectangle { x: cx - r * 0.8, ..bar }, GLYPH_COLOR);
            d.draw_rectangle_rec(Rectangle { x: cx + r * 0.2, ..bar }, GLYPH_COLOR);
        }
        Glyph::Play | Glyph::Next => d.draw_triangle(
            Vector2::new(cx - r * 0.7, cy - r),
            Vector2::new(cx - r * 0.7, cy + r),
            Vector2::new(cx + r, cy),
            GLYPH_COLOR,
        ),
        Glyph::Prev => d.draw_triangle(
            Vector2::new(cx + r * 0.7, cy - r),
            Vector2::new(cx - r, cy),
            Vector2::new(cx + r * 0.7, cy + r),
            GLYPH_COLOR,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(count: usize) -> Controls {
        Controls::layout(Rectangle::new(100.0, 50.0, 800.0, 400.0), count)
    }

    fn center(rect: Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    #[test]
    fn buttons_are_hit() {
        let c = controls(3);
        assert_eq!(c.hit_test(center(c.pause)), Some(Hit::PausePlay));
        assert_eq!(c.hit_test(center(c.prev)), Some(Hit::Prev));
        assert_eq!(c.hit_test(center(c.next)), Some(Hit::Next));
        assert_eq!(c.hit_test(Vector2::new(500.0, 100.0)), None);
    }

    #[test]
    fn indicator_row_is_centered() {
        let c = controls(3);
        let xs: Vec<f32> = c.indicators.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![500.0 - INDICATOR_SPACING, 500.0, 500.0 + INDICATOR_SPACING]);
        assert!(c.indicators.iter().all(|p| p.y == 450.0 - INDICATOR_MARGIN));
    }

    #[test]
    fn indicators_report_their_slide() {
        let c = controls(4);
        for (i, dot) in c.indicators.iter().enumerate() {
            assert_eq!(c.hit_test(*dot), Some(Hit::Indicator(i)));
        }
    }

    #[test]
    fn crowded_row_fits_between_the_buttons() {
        let bounds = Rectangle::new(0.0, 0.0, 300.0, 300.0);
        let c = Controls::layout(bounds, 30);
        let left = CONTROL_MARGIN + CONTROL_SIZE;
        let right = bounds.width - left;

        assert_eq!(c.indicators.len(), 30);
        assert!(c.indicators.iter().all(|p| p.x >= left && p.x <= right));
        for (i, dot) in c.indicators.iter().enumerate() {
            assert_eq!(c.hit_test(*dot), Some(Hit::Indicator(i)));
        }
    }

    #[test]
    fn no_slides_no_indicators() {
        assert!(controls(0).indicators.is_empty());
    }
}
