//! Camera parameters and the view frustum derived from them.

pub use self::camera_info::{CameraInfo, OrthoBounds, NEAR_DISTANCE};
pub use self::frustum::{Frustum, FrustumPlane};

mod camera_info;
mod frustum;
