use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::attributes::Attributes;
use crate::error::Result;
use crate::instruction::Instruction;
use crate::interpreter::{Interpreter, State};
use crate::options::Options;

/// Cloneable handle to an [`Interpreter`] shared between the thread reading
/// pty output and the thread rendering it.
///
/// Every method holds the lock for exactly one call. Use
/// [`SharedInterpreter::with`] when several reads must observe the same
/// state, e.g. draining the instruction latch together with the attributes.
#[derive(Clone, Default)]
pub struct SharedInterpreter {
    inner: Arc<Mutex<Interpreter>>,
}

impl SharedInterpreter {
    #[must_use]
    pub fn new(options: impl Into<Options>) -> Self {
        Self::from(Interpreter::new(options))
    }

    pub fn feed(&self, c: char) -> Result<bool> {
        self.lock().feed(c)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn buffered_literal(&self) -> String {
        self.lock().buffered_literal().to_owned()
    }

    pub fn take_buffered_literal(&self) -> String {
        self.lock().take_buffered_literal()
    }

    pub fn instruction(&self) -> Option<Instruction> {
        self.lock().instruction()
    }

    pub fn clear_instruction(&self) {
        self.lock().clear_instruction();
    }

    pub fn take_instruction(&self) -> Option<Instruction> {
        self.lock().take_instruction()
    }

    pub fn attributes(&self) -> Attributes {
        self.lock().attributes()
    }

    pub fn state(&self) -> State {
        self.lock().state()
    }

    /// Runs `f` under a single lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Interpreter) -> R) -> R {
        f(&mut *self.lock())
    }

    // Poisoning is ignored: `reset` always restores a consistent automaton.
    fn lock(&self) -> MutexGuard<'_, Interpreter> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Interpreter> for SharedInterpreter {
    fn from(interpreter: Interpreter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(interpreter)),
        }
    }
}
