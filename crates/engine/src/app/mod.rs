mod game;
mod input;
mod loop_runner;
mod metrics;
mod rendering;

pub use game::{AssetError, AssetProvider, ClipRect, Game, RenderTarget, TextureId};
pub use input::{Key, KeyEvent};
pub use loop_runner::{run_app, run_app_with_metrics, AppError, LoopConfig};
pub use metrics::{FrameMetricsSnapshot, MetricsHandle};
pub use rendering::Renderer;
