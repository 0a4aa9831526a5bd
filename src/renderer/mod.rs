//! The scene render pass and the stages it runs for every drawable.

pub use self::config::PassConfig;
pub use self::scene_pass::{dispatch_geometry, ScenePass};
pub use self::transform::{TransformCoordinator, TransformRegime, TransformScope};

mod config;
pub mod render_state;
mod scene_pass;
pub mod transform;
pub mod visibility;
