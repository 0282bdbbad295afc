use raylib::prelude::Color;

pub const RENDER_WIDTH: i32 = 1280;           // Initial window width
pub const RENDER_HEIGHT: i32 = 720;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second
pub const WIDGET_GAP: f32 = 8.0;              // Space between side-by-side carousels (pixels)

pub const DEFAULT_CONTAINER: &str = "carousel";
pub const DEFAULT_SLIDES: &str = "png,jpg,jpeg,bmp,gif";
pub const DEFAULT_INTERVAL_MS: u64 = 5000;    // Auto-advance period
pub const MIN_INTERVAL_MS: u64 = 1;

pub const SWIPE_THRESHOLD: f32 = 100.0;       // Horizontal travel that counts as a swipe (pixels)

pub const CONTROL_SIZE: f32 = 48.0;           // Side of the square pause/prev/next buttons
pub const CONTROL_MARGIN: f32 = 16.0;
pub const INDICATOR_RADIUS: f32 = 6.0;
pub const INDICATOR_SPACING: f32 = 22.0;      // Center to center
pub const INDICATOR_MARGIN: f32 = 24.0;       // Distance of the dot row from the bottom edge

pub const CONTROL_BACKGROUND: Color = Color::new(0, 0, 0, 110);
pub const GLYPH_COLOR: Color = Color::new(255, 255, 255, 230);
pub const INDICATOR_ACTIVE: Color = Color::new(255, 255, 255, 255);
pub const INDICATOR_INACTIVE: Color = Color::new(255, 255, 255, 100);
pub const FOCUS_OUTLINE: Color = Color::new(255, 200, 40, 200);
