/*!
# Trackside

Frame render pipeline of a 3D driving game, on top of an immediate-mode
graphics driver.

Every frame, the scene pass:

* loads the camera projection and view and extracts the view frustum,
* skips the dynamic drawables whose bounding sphere is out of sight,
* selects the blending, depth, culling and alpha-test state, the shader and
  the textures of each drawable while avoiding redundant driver calls,
* reuses the model matrix of consecutive drawables sharing a transform,
* dispatches compiled draw lists, vertex arrays and poly-lines.

A separate post-process pass composites any number of rendered images
through a shader onto a full-screen quad.

The driver itself, shader compilation and texture loading live outside of
this crate. The passes only talk to them through the [`context::Context`]
trait and the [`resource`] handles, so that any driver can be plugged in.
A [`context::RecordingContext`] is provided to run the passes without a GPU.

## Example

```
use trackside::prelude::*;
use std::io;

let mut ctxt = RecordingContext::new();
let mut glstate = GlStateCache::new();
let mut pass = ScenePass::new(PassConfig::default().with_clear(true, true));

let _frustum = pass.set_camera_info(
    &mut ctxt,
    Vec3::new(0.0, 2.0, 10.0),
    Quat::IDENTITY,
    60.0,
    1000.0,
    1280.0,
    720.0,
    true,
);

let car = Drawable::new(Geometry::DrawLists(vec![ListId(1)]))
    .with_bounds(Vec3::ZERO, 2.5);
let dynamic = [&car];

pass.render(&mut ctxt, &mut glstate, &DrawLists::dynamic(&dynamic), &mut io::stderr())
    .unwrap();
assert_eq!(ctxt.count(|c| *c == Command::CallList(ListId(1))), 1);
```
*/
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]

pub use glamx;

pub mod camera;
pub mod color;
pub mod context;
pub mod light;
pub mod post_processing;
pub mod renderer;
pub mod resource;
pub mod scene;

pub mod prelude {
    pub use crate::camera::*;
    pub use crate::color::*;
    pub use crate::context::*;
    pub use crate::light::*;
    pub use crate::post_processing::*;
    pub use crate::renderer::*;
    pub use crate::resource::*;
    pub use crate::scene::*;
    pub use glamx::{Mat4, Quat, Vec3, Vec4};
}
