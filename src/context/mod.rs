//! Graphics driver context, driver state cache and error reporting.

pub use self::context::{
    BlendFactor, Capability, ClearMask, ClientArray, CompareFunc, Context, Face, ListId,
    MatrixMode, ProgramId, QuadVertex, TextureId, TextureParameter, TextureTarget,
};
pub use self::error::{check_errors, DriverError};
pub use self::recording::{Command, RecordingContext};
pub use self::state_cache::GlStateCache;
pub use self::texture_env::{CombineOp, CombineOperand, CombineSource, Combiner, TextureEnv};

mod context;
mod error;
mod recording;
mod state_cache;
mod texture_env;
