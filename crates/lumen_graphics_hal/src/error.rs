use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// A raw stage tag that is neither the vertex nor the fragment stage.
    #[error("Shader type {0} is not a proper shader stage.")]
    InvalidStageTag(u32),

    #[error("Cannot create program: {0}")]
    CreateProgram(String),
}
