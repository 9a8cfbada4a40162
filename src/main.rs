// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges

//! Ford FG Falcon ICC HVAC display simulator.
//!
//! Recreates the climate-control section of the FG Falcon's interior command
//! centre on the desktop: the monochrome instrument display, the button row
//! and the slider row, stacked in a teal fascia.
//!
//! # Frame Loop
//!
//! ```text
//! ┌──────────────┐   due?   ┌───────────────┐
//! │ RecurringTask├─────────►│ tick_clock    ├──┐
//! └──────────────┘          └───────────────┘  │ request redraw
//! ┌──────────────┐  click   ┌───────────────┐  ▼
//! │ window event ├─────────►│ panel dispatch├─►┌──────────────┐
//! └──────────────┘          └───────────────┘  │ RenderState  │
//!                                              └──────┬───────┘
//!                                  display dirty?     ▼
//!                                              DisplayPanel::render
//! ```
//!
//! Each frame polls the clock task, draws whatever [`RenderState`] reports as
//! dirty, pushes the frame to the window and then handles window events. The
//! button and slider panels never change, so they are drawn once on the first
//! frame only.
//!
//! # Controls
//!
//! Left-click a button or either end of a slider. Clicks are logged at
//! `debug`; run with `RUST_LOG=debug` to see them. Bus transmissions are
//! always printed to stdout.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::MouseButton;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use hvac_cluster::app::Application;
use hvac_cluster::bus::BusLog;
use hvac_cluster::colors::PANEL_BG;
use hvac_cluster::config::{CLOCK_PERIOD, FRAME_TIME, SCALE, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use hvac_cluster::layout::{PanelId, locate};
use hvac_cluster::panels::{ButtonPanel, DisplayPanel, SliderPanel};
use hvac_cluster::timer::{LocalClock, RecurringTask};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize display and window
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let mut app = Application::new(BusLog::echoing());
    let mut clock_task = RecurringTask::new(CLOCK_PERIOD);
    let wall_clock = LocalClock;

    info!(width = WINDOW_WIDTH, height = WINDOW_HEIGHT, scale = SCALE, "HVAC display started");

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        if clock_task.poll(frame_start) {
            app.tick_clock(&wall_clock);
        }

        // Static controls: fascia plus button and slider rows, first frame only
        if app.render_state().need_controls() {
            display.clear(PANEL_BG).ok();
            ButtonPanel::render(&mut display.translated(PanelId::Buttons.origin()));
            SliderPanel::render(&mut display.translated(PanelId::Sliders.origin()));
            app.render_state_mut().mark_controls_drawn();
        }

        if app.render_state().need_display() {
            DisplayPanel::render(&mut display.translated(PanelId::Display.origin()), app.state());
            app.render_state_mut().mark_display_drawn();
        }

        app.render_state_mut().end_frame();
        window.update(&display);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    clock_task.cancel();
                    info!(
                        sent = app.bus().sent(),
                        redraws = app.render_state().redraws(),
                        "window closed, shutting down"
                    );
                    return;
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => match locate(point) {
                    Some((PanelId::Buttons, local)) => {
                        ButtonPanel::click(local.x, &mut app);
                    }
                    Some((PanelId::Sliders, local)) => {
                        SliderPanel::click(local.x, &mut app);
                    }
                    Some((PanelId::Display, _)) | None => debug!(?point, "click outside controls"),
                },
                _ => {}
            }
        }

        // Sleep out the rest of the frame (~50 Hz event polling)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
