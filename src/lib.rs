//! Linked shader programs over a GLES2 context.
//!
//! [`hal`] holds the backend independent program lifecycle,
//! [`gles2`] implements it on top of `glow`.

pub use lumen_graphics_hal as hal;
pub use lumen_graphics_hal_gles2 as gles2;

pub use hal::{
    program::{LinkOutcome, ShaderProgram},
    shader::CompiledStage,
    AttributeSlot, Graphics, ProgramError, ShaderStage, WindowBackend,
};
pub use gles2::{Gles, GlesSettings, GlesStage};
