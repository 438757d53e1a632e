use std::{cell::RefCell, rc::Rc};

use crate::{shader::CompiledStage, Graphics, ProgramError, ShaderStage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(u32),
    Delete(u32),
    Attach(u32, u32),
    Detach(u32, u32),
    BindAttribute(u32, u32, String),
    Link(u32),
    LinkStatus(u32),
    InfoLog(u32),
    Use(Option<u32>),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    last_program: u32,
    link_fails: bool,
    info_log: String,
    create_error: Option<String>,
}

/// Records every call instead of talking to a driver.
/// Programs are numbered from 1 in creation order.
#[derive(Clone, Default)]
pub struct RecordingGraphics(Rc<RefCell<Recorder>>);

impl RecordingGraphics {
    pub fn failing(info_log: &str) -> Self {
        let ctx = Self::default();
        {
            let mut recorder = ctx.0.borrow_mut();
            recorder.link_fails = true;
            recorder.info_log = info_log.to_string();
        }
        ctx
    }

    pub fn set_info_log(&self, info_log: &str) {
        self.0.borrow_mut().info_log = info_log.to_string();
    }

    pub fn fail_create(&self, error: &str) {
        self.0.borrow_mut().create_error = Some(error.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    pub fn deletes(&self) -> Vec<u32> {
        self.0
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Delete(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.0.borrow_mut().calls.push(call);
    }
}

impl Graphics for RecordingGraphics {
    type Program = u32;
    type Stage = u32;

    fn create_program(&self) -> Result<u32, ProgramError> {
        let mut recorder = self.0.borrow_mut();
        if let Some(error) = recorder.create_error.clone() {
            return Err(ProgramError::CreateProgram(error));
        }

        recorder.last_program += 1;
        let id = recorder.last_program;
        recorder.calls.push(Call::Create(id));
        Ok(id)
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::Delete(program));
    }

    fn attach_stage(&self, program: u32, stage: u32) {
        self.record(Call::Attach(program, stage));
    }

    fn detach_stage(&self, program: u32, stage: u32) {
        self.record(Call::Detach(program, stage));
    }

    fn bind_attribute_location(&self, program: u32, location: u32, name: &str) {
        self.record(Call::BindAttribute(program, location, name.to_string()));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::Link(program));
    }

    fn link_status(&self, program: u32) -> bool {
        self.record(Call::LinkStatus(program));
        !self.0.borrow().link_fails
    }

    fn program_info_log(&self, program: u32) -> String {
        self.record(Call::InfoLog(program));
        self.0.borrow().info_log.clone()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::Use(program));
    }

    fn native_id(program: u32) -> u32 {
        program
    }
}

pub struct TestStage {
    id: u32,
    info_log: &'static str,
    stage: Option<ShaderStage>,
}

impl TestStage {
    pub fn new(id: u32, info_log: &'static str) -> Self {
        Self {
            id,
            info_log,
            stage: None,
        }
    }

    pub fn with_stage(id: u32, info_log: &'static str, stage: ShaderStage) -> Self {
        Self {
            id,
            info_log,
            stage: Some(stage),
        }
    }
}

impl CompiledStage<RecordingGraphics> for TestStage {
    fn raw(&self) -> u32 {
        self.id
    }

    fn info_log(&self) -> &str {
        self.info_log
    }

    fn stage(&self) -> Option<ShaderStage> {
        self.stage
    }
}
