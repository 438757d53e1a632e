use glow::HasContext;
use lumen_graphics_hal::{shader::CompiledStage, ShaderStage};

use crate::Gles;

/// A compiled shader object handed over by the caller.
///
/// The compile log is read once on adoption. The shader object is deleted
/// when this value is dropped, programs linked from it keep working.
pub struct GlesStage {
    ctx: Gles,
    stage: ShaderStage,
    shader: glow::Shader,
    info_log: String,
}

impl GlesStage {
    /// Takes ownership of an already compiled `shader` of the given stage.
    pub fn from_compiled(ctx: Gles, stage: ShaderStage, shader: glow::Shader) -> Self {
        let info_log = unsafe { ctx.gl.get_shader_info_log(shader) };

        if unsafe { !ctx.gl.get_shader_compile_status(shader) } {
            log::warn!("Adopted {stage:?} shader did not compile: {info_log}");
        }

        Self {
            ctx,
            stage,
            shader,
            info_log,
        }
    }
}

impl CompiledStage<Gles> for GlesStage {
    fn raw(&self) -> glow::Shader {
        self.shader
    }

    fn info_log(&self) -> &str {
        &self.info_log
    }

    fn stage(&self) -> Option<ShaderStage> {
        Some(self.stage)
    }
}

impl Drop for GlesStage {
    fn drop(&mut self) {
        unsafe { self.ctx.gl.delete_shader(self.shader) };
    }
}
