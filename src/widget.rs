use log::{info, warn};
use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::constants::FOCUS_OUTLINE;
use crate::controls::{Controls, Hit, contains};
use crate::error::{CarouselError, Result};
use crate::input::{InputEvent, Key};
use crate::swipe::{SwipeDirection, SwipeGesture};
use crate::texture_loader::{load_slide_paths, load_texture_with_exif_rotation};

/// A carousel bound to a rectangle of the window: input routing, controls,
/// focus and the optional swipe gesture.
pub struct CarouselWidget<T> {
    carousel: Carousel<T>,
    controls: Controls,
    bounds: Rectangle,
    focused: bool,
    swipe: Option<SwipeGesture>,
}

impl<T> CarouselWidget<T> {
    pub fn new(items: Vec<T>, config: &CarouselConfig, bounds: Rectangle) -> Self {
        let carousel = Carousel::new(items, config.interval);
        let controls = Controls::layout(bounds, carousel.len());

        Self {
            carousel,
            controls,
            bounds,
            focused: false,
            swipe: config.swipe.then(SwipeGesture::new),
        }
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
        self.controls = Controls::layout(bounds, self.carousel.len());
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn contains(&self, point: Vector2) -> bool {
        contains(self.bounds, point)
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                if !self.focused {
                    return;
                }
                match key {
                    Key::Left => self.carousel.prev(),
                    Key::Right => self.carousel.next(),
                    Key::Space => self.carousel.pause_play(),
                }
            }
            InputEvent::Click(point) => {
                if !self.contains(point) {
                    return;
                }
                match self.controls.hit_test(point) {
                    Some(Hit::PausePlay) => self.carousel.pause_play(),
                    Some(Hit::Prev) => self.carousel.prev(),
                    Some(Hit::Next) => self.carousel.next(),
                    Some(Hit::Indicator(slide_to)) => self.carousel.select(slide_to),
                    None => {}
                }
            }
            InputEvent::TouchStart(point) => {
                if !self.contains(point) {
                    return;
                }
                let on_control = self.controls.hit_test(point).is_some();
                if let Some(gesture) = self.swipe.as_mut() {
                    // The same contact also arrives as a click, which already
                    // acted on the control.
                    if on_control {
                        gesture.cancel();
                    } else {
                        gesture.touch_start(point.x);
                    }
                }
            }
            InputEvent::TouchEnd(point) => {
                let direction = self.swipe.as_mut().and_then(|g| g.touch_end(point.x));
                match direction {
                    Some(SwipeDirection::Next) => self.carousel.next(),
                    Some(SwipeDirection::Prev) => self.carousel.prev(),
                    None => {}
                }
            }
        }
    }

    /// Advances frame time on the auto-advance timer.
    pub fn update(&mut self, dt: f32) {
        self.carousel.tick(dt);
    }
}

impl CarouselWidget<Texture2D> {
    /// Loads the container's slides and starts the carousel playing.
    pub fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: &CarouselConfig,
        bounds: Rectangle,
    ) -> Result<Self> {
        let paths = load_slide_paths(&config.container, &config.slides)?;

        let mut textures = Vec::with_capacity(paths.len());
        for path in &paths {
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => textures.push(texture),
                Err(e) => warn!("Skipping slide: {}", e),
            }
        }

        if textures.is_empty() {
            return Err(CarouselError::NoSlides {
                container: config.container.clone(),
                selector: config.slides.to_string(),
            });
        }

        info!(
            "Carousel on {} with {} slides, advancing every {:?}{}",
            config.container.display(),
            textures.len(),
            config.interval,
            if config.swipe { ", swipe enabled" } else { "" }
        );

        Ok(Self::new(textures, config, bounds))
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if let Some(slide) = self.carousel.current_slide() {
            slide.draw(d, self.bounds);
        }

        self.controls.draw(d, self.carousel.pause_glyph(), self.carousel.indicators());

        if self.focused {
            d.draw_rectangle_lines_ex(self.bounds, 2.0, FOCUS_OUTLINE);
        }
    }
}

#[cfg(test)]
impl<T> CarouselWidget<T> {
    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Routes an event to every widget. Clicks and touches move keyboard focus
/// to the widget under the pointer; clicks between widgets leave it alone.
pub fn dispatch<T>(widgets: &mut [CarouselWidget<T>], event: InputEvent) {
    if let InputEvent::Click(point) | InputEvent::TouchStart(point) = event {
        if let Some(target) = widgets.iter().position(|w| w.contains(point)) {
            for (i, widget) in widgets.iter_mut().enumerate() {
                widget.set_focused(i == target);
            }
        }
    }

    for widget in widgets.iter_mut() {
        widget.handle(event);
    }
}

/// Splits `area` into `count` equal columns separated by `gap`.
pub fn column_bounds(area: Rectangle, count: usize, gap: f32) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let width = ((area.width - gap * (count - 1) as f32) / count as f32).max(0.0);
    (0..count)
        .map(|i| Rectangle::new(area.x + i as f32 * (width + gap), area.y, width, area.height))
        .collect()
}
