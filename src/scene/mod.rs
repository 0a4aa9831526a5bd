//! Drawables and the draw lists handed to the scene pass.

pub use self::draw_list::DrawLists;
pub use self::drawable::{DrawFlags, Drawable, Geometry};

mod draw_list;
mod drawable;
