use std::cell::{RefCell, RefMut};

use glow::HasContext;
use lumen_graphics_hal::WindowBackend;

use crate::{bound::BoundProgram, GlesSettings};

/// Keep current state for optimizations here, such as
/// the currently bound program.
pub struct GlesState {
    pub bound_program: BoundProgram<glow::Program>,
}

pub struct GlesContext {
    pub gl: glow::Context,
    pub state: RefCell<GlesState>,
    pub settings: GlesSettings,
}

impl GlesContext {
    pub unsafe fn new(backend: &impl WindowBackend, settings: GlesSettings) -> Self {
        let gl = glow::Context::from_loader_function(|s| backend.get_proc_address(s));
        Self::from_glow(gl, settings)
    }

    pub fn from_glow(gl: glow::Context, settings: GlesSettings) -> Self {
        let version = gl.version();
        log::debug!(
            "Created GLES context, version {}.{} ({})",
            version.major,
            version.minor,
            version.vendor_info
        );

        Self {
            gl,
            state: RefCell::new(GlesState {
                bound_program: BoundProgram::new(settings.cache_bound_program),
            }),
            settings,
        }
    }

    pub fn get_ref<'a>(&'a self) -> GlesContextRef<'a> {
        GlesContextRef {
            gl: &self.gl,
            state: self.state.borrow_mut(),
        }
    }
}

pub struct GlesContextRef<'a> {
    pub gl: &'a glow::Context,
    pub state: RefMut<'a, GlesState>,
}

impl<'a> GlesContextRef<'a> {
    pub fn use_program(&mut self, program: Option<glow::Program>) {
        if self.state.bound_program.bind(program) {
            unsafe { self.gl.use_program(program) };
        }
    }

    pub fn delete_program(&mut self, program: glow::Program) {
        if self.state.bound_program.release(program) {
            unsafe { self.gl.use_program(None) };
        }

        unsafe { self.gl.delete_program(program) };
    }
}
