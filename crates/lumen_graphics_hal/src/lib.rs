use std::{ffi::c_void, fmt::Debug};

use program::ShaderProgram;
use shader::CompiledStage;

pub use attributes::AttributeSlot;
pub use error::ProgramError;
pub use program::LinkOutcome;
pub use shader::ShaderStage;

pub mod attributes;
pub mod error;
pub mod program;
pub mod shader;

#[cfg(test)]
mod testing;

pub trait WindowBackend {
    /// Resolves a GL entry point of the context that is current on this thread.
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

/// The raw program object calls a backend must provide.
///
/// All calls are issued on the thread owning the graphics context,
/// implementations are expected to be cheap handles (an `Rc` to the context)
/// that every program keeps a clone of to release itself on drop.
pub trait Graphics
where
    Self: Sized + Clone + 'static,
{
    type Program: Copy + Eq + Debug;
    type Stage: Copy + Eq + Debug;

    fn create_program(&self) -> Result<Self::Program, ProgramError>;
    fn delete_program(&self, program: Self::Program);

    fn attach_stage(&self, program: Self::Program, stage: Self::Stage);
    fn detach_stage(&self, program: Self::Program, stage: Self::Stage);

    fn bind_attribute_location(&self, program: Self::Program, location: u32, name: &str);
    fn link_program(&self, program: Self::Program);
    fn link_status(&self, program: Self::Program) -> bool;

    /// The program info log as reported by the driver, possibly just a terminator.
    fn program_info_log(&self, program: Self::Program) -> String;

    fn use_program(&self, program: Option<Self::Program>);

    /// Raw numeric identifier of a program, never 0 for a live program.
    fn native_id(program: Self::Program) -> u32;

    fn new_program(
        &self,
        vertex: &impl CompiledStage<Self>,
        fragment: &impl CompiledStage<Self>,
    ) -> Result<ShaderProgram<Self>, ProgramError> {
        ShaderProgram::new(self.clone(), vertex, fragment)
    }
}
