use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

mod carousel;
mod config;
mod constants;
mod controls;
mod error;
mod input;
mod slide;
mod state;
mod swipe;
mod texture_loader;
mod timer;
mod widget;

use crate::config::{CarouselConfig, Settings};
use crate::constants::*;
use crate::input::InputPoller;
use crate::widget::{CarouselWidget, column_bounds, dispatch};

/// Rotating image carousel.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directories holding the slide images, one carousel each
    containers: Vec<PathBuf>,

    /// Comma separated image extensions that count as slides
    #[arg(long, value_name = "LIST")]
    slides: Option<String>,

    /// Auto-advance period in milliseconds
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,

    /// Navigate with horizontal touch swipes
    #[arg(long)]
    swipe: bool,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    /// Log every slide change
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn configs(&self) -> Vec<CarouselConfig> {
        let settings = |container: Option<PathBuf>| Settings {
            container,
            slides: self.slides.clone(),
            interval_ms: self.interval,
            swipe: self.swipe,
        };

        if self.containers.is_empty() {
            vec![CarouselConfig::from_settings(settings(None))]
        } else {
            self.containers
                .iter()
                .map(|c| CarouselConfig::from_settings(settings(Some(c.clone()))))
                .collect()
        }
    }
}

fn screen_area(rl: &RaylibHandle) -> Rectangle {
    Rectangle::new(0.0, 0.0, rl.get_screen_width() as f32, rl.get_screen_height() as f32)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let configs = cli.configs();

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Build one widget per container ---
    let areas = column_bounds(screen_area(&rl), configs.len(), WIDGET_GAP);
    let mut widgets = Vec::with_capacity(configs.len());
    for (config, bounds) in configs.iter().zip(areas) {
        let widget = match CarouselWidget::initialize(&mut rl, &thread, config, bounds) {
            Ok(widget) => widget,
            Err(e) => {
                if e.is_configuration() {
                    error!("{}; check the container path and --slides ({})", e, config.slides);
                }
                return Err(e).with_context(|| {
                    format!("Failed to initialize carousel for {}", config.container.display())
                });
            }
        };
        widgets.push(widget);
    }
    if let Some(first) = widgets.first_mut() {
        first.set_focused(true);
    }

    let mut input = InputPoller::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            let areas = column_bounds(screen_area(&rl), widgets.len(), WIDGET_GAP);
            for (widget, bounds) in widgets.iter_mut().zip(areas) {
                widget.set_bounds(bounds);
            }
        }

        for event in input.poll(&rl) {
            dispatch(&mut widgets, event);
        }

        for widget in widgets.iter_mut() {
            widget.update(dt);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        for widget in widgets.iter() {
            widget.draw(&mut d);
        }
    }

    info!("Window closed");
    Ok(())
}
