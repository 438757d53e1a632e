use std::fmt;

use derive_more::Constructor;
use enum_map::EnumMap;
use strum::IntoEnumIterator;

use crate::{
    attributes::AttributeSlot,
    error::ProgramError,
    shader::{CompiledStage, ShaderStage},
    Graphics,
};

/// Result of linking a program. A failed link is an ordinary outcome
/// while developing shaders, so it is reported as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct LinkOutcome<'a> {
    pub linked: bool,
    pub info_log: &'a str,
}

/// Owns the backend program object and deletes it on drop.
struct ProgramResource<G: Graphics> {
    ctx: G,
    program: G::Program,
}

impl<G: Graphics> Drop for ProgramResource<G> {
    fn drop(&mut self) {
        log::debug!("Releasing shader program {}", G::native_id(self.program));
        self.ctx.delete_program(self.program);
    }
}

/// A linked vertex + fragment program.
///
/// The program is move-only. [`ShaderProgram::take`] transfers ownership out
/// of a place that must stay valid (a struct field, a slot in a collection),
/// leaving an empty program behind.
pub struct ShaderProgram<G: Graphics> {
    resource: Option<ProgramResource<G>>,
    link_status: bool,
    info_log: String,
    stage_logs: EnumMap<ShaderStage, String>,
}

impl<G: Graphics> Default for ShaderProgram<G> {
    fn default() -> Self {
        Self {
            resource: None,
            link_status: false,
            info_log: String::new(),
            stage_logs: EnumMap::default(),
        }
    }
}

impl<G: Graphics> ShaderProgram<G> {
    /// Links `vertex` and `fragment` into a new program.
    ///
    /// Stages are detached again after linking and stay owned by the caller.
    /// A failed link still returns a program, check [`ShaderProgram::is_usable`]
    /// before drawing with it.
    pub fn new(
        ctx: G,
        vertex: &impl CompiledStage<G>,
        fragment: &impl CompiledStage<G>,
    ) -> Result<Self, ProgramError> {
        check_stage::<G, _>(ShaderStage::Vertex, vertex);
        check_stage::<G, _>(ShaderStage::Fragment, fragment);

        let program = ctx.create_program()?;
        let resource = ProgramResource { ctx, program };
        let ctx = &resource.ctx;

        let mut stage_logs = EnumMap::default();
        stage_logs[ShaderStage::Vertex] = vertex.info_log().to_owned();
        stage_logs[ShaderStage::Fragment] = fragment.info_log().to_owned();

        ctx.attach_stage(program, vertex.raw());
        ctx.attach_stage(program, fragment.raw());

        for slot in AttributeSlot::iter() {
            ctx.bind_attribute_location(program, slot.location(), slot.name());
        }

        ctx.link_program(program);

        ctx.detach_stage(program, vertex.raw());
        ctx.detach_stage(program, fragment.raw());

        let link_status = ctx.link_status(program);
        let info_log = normalize_log(ctx.program_info_log(program));

        let id = G::native_id(program);
        if link_status {
            log::debug!("Linked shader program {id}");
        } else {
            log::warn!("Shader program {id} failed to link: {info_log}");
        }

        Ok(Self {
            resource: Some(resource),
            link_status,
            info_log,
            stage_logs,
        })
    }

    /// Moves the program out, leaving an empty, unusable program in its place.
    ///
    /// `program = program.take()` is well defined and keeps the resource alive.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// True if the last link succeeded.
    pub fn is_usable(&self) -> bool {
        self.link_status
    }

    pub fn program(&self) -> Option<G::Program> {
        self.resource.as_ref().map(|r| r.program)
    }

    /// Raw identifier for passing the program straight to the graphics API, 0 when empty.
    pub fn native_handle(&self) -> u32 {
        self.program().map_or(0, G::native_id)
    }

    pub fn info_log(&self) -> &str {
        &self.info_log
    }

    pub fn stage_info_log(&self, stage: ShaderStage) -> &str {
        &self.stage_logs[stage]
    }

    /// Compile log of the stage identified by a raw GL stage tag.
    pub fn shader_info_log(&self, tag: u32) -> Result<&str, ProgramError> {
        ShaderStage::from_tag(tag).map(|stage| self.stage_info_log(stage))
    }

    pub fn link_outcome(&self) -> LinkOutcome<'_> {
        LinkOutcome::new(self.link_status, &self.info_log)
    }

    /// Makes this program current for subsequent draw calls.
    ///
    /// An empty program holds no context handle, so binding it issues no call
    /// and leaves the current program bound. Drawing with an unlinked program
    /// is undefined, gate on [`ShaderProgram::is_usable`].
    pub fn bind(&self) {
        match &self.resource {
            Some(resource) => {
                log::trace!("Binding shader program {}", G::native_id(resource.program));
                resource.ctx.use_program(Some(resource.program));
            }
            None => log::trace!("Binding an empty shader program"),
        }
    }
}

impl<G: Graphics> fmt::Debug for ShaderProgram<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("program", &self.program())
            .field("link_status", &self.link_status)
            .field("info_log", &self.info_log)
            .finish()
    }
}

/// Returns false and warns when `stage` reports a different kind than its argument slot.
/// Linking goes ahead either way, the link log names the actual problem.
fn check_stage<G: Graphics, S: CompiledStage<G>>(expected: ShaderStage, stage: &S) -> bool {
    match stage.stage() {
        Some(actual) if actual != expected => {
            log::warn!("{actual:?} shader passed as the {expected:?} stage");
            false
        }
        _ => true,
    }
}

// Drivers report a lone terminator (length 1) for an empty log.
fn normalize_log(mut log: String) -> String {
    let len = log.trim_end_matches('\0').len();
    log.truncate(len);
    log
}
