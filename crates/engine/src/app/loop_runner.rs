use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::{resolve_app_paths, StartupError};

use super::game::{AssetError, Game};
use super::input::{Key, KeyEvent};
use super::metrics::MetricsAccumulator;
use super::{MetricsHandle, Renderer};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub surface_width: u32,
    pub surface_height: u32,
    /// Minimum wall-clock time between frames, enforced by busy-waiting when
    /// display synchronization does not already cap the rate.
    pub min_frame_interval: Duration,
    pub metrics_log_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Light Spirits".to_string(),
            surface_width: 640,
            surface_height: 480,
            min_frame_interval: Duration::from_millis(8),
            metrics_log_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("failed to load textures: {0}")]
    LoadAssets(#[from] AssetError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub fn run_app(config: LoopConfig, game: Box<dyn Game>) -> Result<(), AppError> {
    let metrics_handle = MetricsHandle::default();
    run_app_with_metrics(config, game, metrics_handle)
}

pub fn run_app_with_metrics(
    config: LoopConfig,
    mut game: Box<dyn Game>,
    metrics_handle: MetricsHandle,
) -> Result<(), AppError> {
    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        images_dir = %app_paths.images_dir.display(),
        "startup"
    );

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.surface_width as f64,
                config.surface_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let window_for_loop = Arc::clone(&window);
    let mut renderer = Renderer::new(
        window,
        config.surface_width,
        config.surface_height,
        app_paths.images_dir,
    )
    .map_err(AppError::CreateRenderer)?;

    game.load(&mut renderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let min_frame_interval =
        normalize_non_zero_duration(config.min_frame_interval, Duration::from_millis(8));
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    info!(
        min_frame_interval_ms = min_frame_interval.as_millis() as u64,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        "loop_config"
    );

    let mut last_frame_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window_for_loop.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        info!(reason = "window_close", "shutdown_requested");
                        game.handle_close_requested();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if let Some(key_event) = map_key_event(&event) {
                            if key_event.key == Key::Quit && key_event.pressed {
                                info!(reason = "quit_key", "shutdown_requested");
                            }
                            game.handle_key(key_event);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        // Quit is only observed here, at the top of the frame.
                        if game.quit_requested() {
                            window_target.exit();
                            return;
                        }

                        game.tick();
                        game.render(&mut renderer);
                        if let Err(error) = renderer.present() {
                            warn!(error = %error, "renderer_present_failed");
                            window_target.exit();
                            return;
                        }

                        let deadline = last_frame_instant + min_frame_interval;
                        busy_wait_until(deadline);

                        let now = Instant::now();
                        let frame_dt = now.saturating_duration_since(last_frame_instant);
                        last_frame_instant = now;
                        metrics_accumulator.record_frame(frame_dt);
                        if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                            metrics_handle.publish(snapshot);
                            info!(
                                fps = snapshot.fps,
                                frame_time_ms = snapshot.frame_time_ms,
                                "loop_metrics"
                            );
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window_for_loop.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Spin until `deadline`. Short bounded waits only; this is the frame cap,
/// not a scheduler.
fn busy_wait_until(deadline: Instant) {
    while Instant::now() < deadline {
        std::hint::spin_loop();
    }
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

fn map_key_event(event: &winit::event::KeyEvent) -> Option<KeyEvent> {
    let key = match event.physical_key {
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::Down,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::Left,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::Right,
        PhysicalKey::Code(KeyCode::Space) => Key::Beam,
        PhysicalKey::Code(KeyCode::Escape) => Key::Quit,
        _ => return None,
    };
    Some(KeyEvent {
        key,
        pressed: event.state == ElementState::Pressed,
        repeat: event.repeat,
    })
}
