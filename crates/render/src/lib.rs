//! GL rendering for the spinning cube.
//!
//! The [`Engine`] owns every GL object the cube needs and is driven by an
//! [`EventPump`], which turns host lifecycle, size, paint and touch events
//! into start, draw and stop calls.
//!
//! # Invariants
//! - GL objects exist only while the app is visible. Leaving the visible
//!   stage releases all of them.
//! - Paint is a no-op without a draw context.
//! - Every self-initiated paint publishes the frame and queues the next
//!   paint, so the animation keeps running without host timers.
//!
//! All GL access goes through [`GlContext`], so the engine runs unchanged
//! against `glow::Context` or a recording mock.

mod camera;
mod clock;
mod engine;
mod geometry;
mod gl;
mod handles;
mod loader;
#[cfg(test)]
mod mock;
mod overlay;
mod pump;
mod shaders;

pub use camera::{CubeCamera, aspect_ratio, model_matrix};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{
    Engine, EngineError, FRAGMENT_SHADER_ASSET, Shader, Shape, TEXTURE_ASSET,
    VERTEX_SHADER_ASSET,
};
pub use geometry::{CUBE_VERTICES, STRIDE, VERTEX_COUNT};
pub use gl::GlContext;
pub use handles::{BufferHandle, ProgramHandle, TextureHandle};
pub use loader::{LoadError, compile_program, load_program, load_texture};
pub use overlay::{FpsOverlay, FrameTimer};
pub use pump::{EventPump, Host};
