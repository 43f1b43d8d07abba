//! Streaming interpreter for the escape sequences a TUI pane needs.
//!
//! Output of a child process is fed one character at a time. The
//! [`Interpreter`] tells literal text apart from escape sequences, keeps the
//! current foreground/background [`Attributes`] and latches one display
//! [`Instruction`] per completed sequence (relative cursor moves, screen
//! clear, end-of-line erase, save/restore cursor).
//!
//! The entry points are:
//! - [`Interpreter`], the bare state machine driven with
//!   [`Interpreter::feed`].
//! - [`Stream`], which decodes raw UTF-8 pty output and forwards literals and
//!   instructions to an [`Actor`], replaying failed sequences as text.
//! - [`SharedInterpreter`], a lock-guarded handle for feeding and rendering
//!   on different threads.

mod actor;
mod attributes;
mod color;
mod error;
mod instruction;
mod interpreter;
mod options;
mod shared;
mod stream;

pub use actor::Actor;
pub use attributes::{Attribute, Attributes, ColorSlot, Modifiers, SLOT_BITS};
pub use color::OutputMode;
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use interpreter::{Interpreter, State};
pub use options::{MAX_PARAM_LEN, MAX_PARAMS, Options};
pub use shared::SharedInterpreter;
pub use stream::Stream;
