use std::rc::Rc;

use context::GlesContext;
use derive_more::Deref;
use glow::HasContext;
use lumen_graphics_hal::{Graphics, ProgramError, WindowBackend};
use smart_default::SmartDefault;

pub use stage::GlesStage;

mod bound;
mod context;
mod stage;

/// Cheap handle to a GL context. Every program created through it keeps a clone,
/// so the context outlives its programs.
#[derive(Deref)]
pub struct Gles(pub Rc<GlesContext>);

#[derive(SmartDefault, Clone, Debug)]
pub struct GlesSettings {
    /// Tracks the currently used program and skips `glUseProgram`
    /// when binding the program that is already current.
    ///
    /// Disable if other code issues `glUseProgram` on the same context
    /// behind this handle's back. Without the cache a program deleted while
    /// current is not unbound first, the driver frees it once another
    /// program is made current.
    #[default(true)]
    pub cache_bound_program: bool,
}

impl Gles {
    /// The context must be current on the calling thread.
    pub fn new(backend: &impl WindowBackend) -> Self {
        Self::new_with_settings(backend, Default::default())
    }

    pub fn new_with_settings(backend: &impl WindowBackend, settings: GlesSettings) -> Self {
        Self(Rc::new(unsafe { GlesContext::new(backend, settings) }))
    }

    /// Wraps a context created elsewhere, e.g. by glutin or sdl2.
    pub fn from_glow(gl: glow::Context, settings: GlesSettings) -> Self {
        Self(Rc::new(GlesContext::from_glow(gl, settings)))
    }
}

impl Clone for Gles {
    fn clone(&self) -> Self {
        Gles(self.0.clone())
    }
}

impl Graphics for Gles {
    type Program = glow::Program;
    type Stage = glow::Shader;

    fn create_program(&self) -> Result<glow::Program, ProgramError> {
        unsafe { self.gl.create_program() }.map_err(ProgramError::CreateProgram)
    }

    fn delete_program(&self, program: glow::Program) {
        self.get_ref().delete_program(program);
    }

    fn attach_stage(&self, program: glow::Program, stage: glow::Shader) {
        unsafe { self.gl.attach_shader(program, stage) };
    }

    fn detach_stage(&self, program: glow::Program, stage: glow::Shader) {
        unsafe { self.gl.detach_shader(program, stage) };
    }

    fn bind_attribute_location(&self, program: glow::Program, location: u32, name: &str) {
        unsafe { self.gl.bind_attrib_location(program, location, name) };
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { self.gl.link_program(program) };
    }

    fn link_status(&self, program: glow::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        self.get_ref().use_program(program);
    }

    fn native_id(program: glow::Program) -> u32 {
        program.0.get()
    }
}
