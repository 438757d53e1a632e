/// Remembers which program is current on a context and decides
/// which `glUseProgram` calls are needed.
///
/// With caching disabled nothing is tracked: every bind goes to the driver
/// and deleting a program never unbinds first, since the tracked value could
/// be stale. GL keeps a deleted program alive while it is current, so skipping
/// the unbind only delays its release.
#[derive(Debug)]
pub struct BoundProgram<P> {
    current: Option<P>,
    cache: bool,
}

impl<P: Copy + Eq> BoundProgram<P> {
    pub fn new(cache: bool) -> Self {
        Self {
            current: None,
            cache,
        }
    }

    /// Returns true if `glUseProgram(program)` has to be issued.
    pub fn bind(&mut self, program: Option<P>) -> bool {
        if !self.cache {
            return true;
        }

        if self.current == program {
            return false;
        }

        self.current = program;
        true
    }

    /// Forgets `program` before it is deleted.
    /// Returns true if it is current and has to be unbound first.
    pub fn release(&mut self, program: P) -> bool {
        if self.cache && self.current == Some(program) {
            self.current = None;
            return true;
        }

        false
    }
}
