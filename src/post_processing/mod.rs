//! Full-screen compositing of rendered images.

pub use self::postprocess::PostProcessPass;

mod postprocess;
