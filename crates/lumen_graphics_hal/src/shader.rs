use enum_map::Enum;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{error::ProgramError, Graphics};

/// Pipeline stage of a compiled shader object.
///
/// Discriminants are the GL enumerants (`GL_VERTEX_SHADER`, `GL_FRAGMENT_SHADER`),
/// so a raw tag coming from a GL query converts directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum ShaderStage {
    Vertex = 0x8B31,
    Fragment = 0x8B30,
}

impl ShaderStage {
    pub fn from_tag(tag: u32) -> Result<Self, ProgramError> {
        Self::try_from(tag).map_err(|e| ProgramError::InvalidStageTag(e.number))
    }

    pub fn tag(self) -> u32 {
        self.into()
    }
}

/// An already compiled shader stage owned by the caller.
///
/// A program only borrows the stage while linking: it attaches the raw handle,
/// copies the diagnostics and detaches it again before returning.
pub trait CompiledStage<G: Graphics> {
    fn raw(&self) -> G::Stage;

    /// Compile diagnostics of this stage, may be empty.
    fn info_log(&self) -> &str;

    /// The pipeline stage this object was compiled for, if known.
    fn stage(&self) -> Option<ShaderStage> {
        None
    }
}
