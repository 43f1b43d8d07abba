//! Consumer interface for interpreted output.
//!
//! [`Interpreter::process`](crate::Interpreter::process) and
//! [`Stream`](crate::Stream) translate a character stream into calls on an
//! [`Actor`], typically the screen buffer of a TUI pane. Implementations only
//! stamp characters and apply instructions; the escape state machine and the
//! error recovery stay inside this crate.

use crate::attributes::Attributes;
use crate::error::Error;
use crate::instruction::Instruction;

/// Trait implemented by consumers of the interpreter.
///
/// Callbacks are invoked synchronously, in stream order.
pub trait Actor {
    /// Emits a literal character with the attributes in effect for it.
    ///
    /// Characters of a failed escape sequence are replayed through this
    /// method as well, with default attributes.
    fn print(&mut self, c: char, attributes: Attributes);

    /// Applies a display instruction produced by a completed sequence.
    fn instruction(&mut self, _: Instruction) {}

    /// Reports a sequence that could not be interpreted, together with the
    /// raw characters about to be replayed.
    fn error(&mut self, _: &Error, _: &str) {}
}
