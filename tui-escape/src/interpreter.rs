use std::mem;

use log::{debug, trace};

use crate::actor::Actor;
use crate::attributes::Attributes;
use crate::color::{OutputMode, parse_number};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::options::Options;

const ESC: char = '\x1b';

/// Position of the interpreter inside an escape sequence.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Outside of any sequence; characters are literal text.
    #[default]
    Idle,
    /// `ESC` was read.
    Escape,
    /// `ESC [` was read.
    Csi,
    /// Accumulating `;`-separated parameters.
    Params,
}

/// Bounded list of raw parameter strings.
#[derive(Debug)]
struct Params {
    items: Vec<String>,
    max_items: usize,
    max_len: usize,
}

impl Params {
    fn new(max_items: usize, max_len: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_items),
            max_items,
            max_len,
        }
    }

    fn as_slice(&self) -> &[String] {
        &self.items
    }

    fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    /// Starts a new, empty parameter.
    fn open(&mut self) -> Result<()> {
        if self.items.len() >= self.max_items {
            return Err(Error::SequenceTooLong);
        }

        self.items.push(String::new());
        Ok(())
    }

    /// Appends to the last parameter.
    fn collect(&mut self, c: char) -> Result<()> {
        let Some(current) = self.items.last_mut() else {
            return Err(Error::CsiParseError);
        };

        if current.len() >= self.max_len {
            return Err(Error::SequenceTooLong);
        }

        current.push(c);
        Ok(())
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Streaming interpreter for the small set of escape sequences a TUI pane
/// understands.
///
/// Characters are fed one at a time with [`Interpreter::feed`]. Literal text
/// is reported back as not consumed; completed sequences either update the
/// current [`Attributes`] or latch a single [`Instruction`].
///
/// On error the interpreter keeps its state and refuses further input until
/// [`Interpreter::reset`] is called. The characters of the failed sequence
/// stay available through [`Interpreter::take_buffered_literal`] so they can
/// be printed verbatim.
#[derive(Debug)]
pub struct Interpreter {
    state: State,
    mode: OutputMode,
    params: Params,
    /// Raw characters consumed since the last return to `Idle`.
    raw: String,
    attributes: Attributes,
    instruction: Option<Instruction>,
    failure: Option<Error>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Interpreter {
    #[must_use]
    pub fn new(options: impl Into<Options>) -> Self {
        let options = options.into();
        let (max_params, max_param_len) = options.limits();

        Self {
            state: State::Idle,
            mode: options.mode,
            params: Params::new(max_params, max_param_len),
            raw: String::new(),
            attributes: Attributes::DEFAULT,
            instruction: None,
            failure: None,
        }
    }

    /// Advances the interpreter by one character.
    ///
    /// Returns `Ok(true)` when `c` belongs to an escape sequence and
    /// `Ok(false)` when it must be displayed as literal text.
    pub fn feed(&mut self, c: char) -> Result<bool> {
        if let Some(error) = self.failure {
            debug!("refusing {c:?}: interpreter needs a reset after {error}");
            return Err(error);
        }

        if self.state == State::Idle && c != ESC {
            return Ok(false);
        }

        self.raw.push(c);
        self.advance(c).inspect_err(|error| {
            debug!(
                "{error} in {:?} on {c:?}, buffered: {:?}",
                self.state, self.raw
            );
            self.failure = Some(*error);
        })
    }

    /// Feeds `c` and performs the recovery contract on behalf of `actor`.
    ///
    /// Literal characters are printed with the attributes in effect, latched
    /// instructions are drained right away, and a failed sequence is reported
    /// and then replayed as plain text after a reset.
    pub fn process<A: Actor>(&mut self, c: char, actor: &mut A) {
        match self.feed(c) {
            Ok(false) => actor.print(c, self.attributes),
            Ok(true) => {
                if let Some(instruction) = self.instruction.take() {
                    actor.instruction(instruction);
                }
            },
            Err(error) => {
                let literal = self.take_buffered_literal();
                actor.error(&error, &literal);
                self.reset();

                for c in literal.chars() {
                    actor.print(c, self.attributes);
                }
            },
        }
    }

    /// Returns to `Idle` with default attributes and no pending parameters.
    ///
    /// The instruction latch is left alone.
    pub fn reset(&mut self) {
        trace!("interpreter reset from {:?}", self.state);

        self.state = State::Idle;
        self.params.clear();
        self.raw.clear();
        self.attributes.reset();
        self.failure = None;
    }

    /// Raw characters consumed since the interpreter was last `Idle`.
    #[inline]
    pub fn buffered_literal(&self) -> &str {
        &self.raw
    }

    /// Takes the raw characters consumed since the interpreter was last
    /// `Idle`, leaving the buffer empty.
    pub fn take_buffered_literal(&mut self) -> String {
        mem::take(&mut self.raw)
    }

    #[inline]
    pub fn instruction(&self) -> Option<Instruction> {
        self.instruction
    }

    pub fn clear_instruction(&mut self) {
        self.instruction = None;
    }

    /// Reads and clears the instruction latch.
    pub fn take_instruction(&mut self) -> Option<Instruction> {
        self.instruction.take()
    }

    /// Attributes to stamp on the next literal character.
    #[inline]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Parameters accumulated for the sequence in progress.
    pub fn params(&self) -> &[String] {
        self.params.as_slice()
    }

    /// Error that is blocking input until the next reset.
    pub fn failure(&self) -> Option<Error> {
        self.failure
    }

    fn advance(&mut self, c: char) -> Result<bool> {
        match self.state {
            State::Idle => {
                self.state = State::Escape;
                Ok(true)
            },
            State::Escape if c == '[' => {
                self.state = State::Csi;
                Ok(true)
            },
            State::Escape => Err(Error::NotCsiSequence),
            State::Csi => self.advance_csi(c),
            State::Params => self.advance_params(c),
        }
    }

    fn advance_csi(&mut self, c: char) -> Result<bool> {
        match c {
            '0'..='9' | '?' => self.params.open()?,
            // A bare `CSI m` behaves like `CSI 0 m`.
            'm' => {
                self.params.open()?;
                self.params.collect('0')?;
            },
            'K' => return Ok(self.complete(Instruction::EraseToEndOfLine)),
            's' => return Ok(self.complete(Instruction::SaveCursorPosition)),
            'u' => return Ok(self.complete(Instruction::RestoreCursorPosition)),
            _ => return Err(Error::CsiParseError),
        }

        self.state = State::Params;
        self.advance_params(c)
    }

    fn advance_params(&mut self, c: char) -> Result<bool> {
        match c {
            '0'..='9' | '?' => {
                self.params.collect(c)?;
                Ok(true)
            },
            ';' => {
                self.params.open()?;
                Ok(true)
            },
            'm' => {
                let attributes =
                    self.mode.resolve(self.params.as_slice(), self.attributes)?;
                if attributes != self.attributes {
                    trace!("attributes changed to {attributes:?}");
                }

                self.attributes = attributes;
                self.finish();
                Ok(true)
            },
            'A' | 'B' | 'C' | 'D' => {
                let instruction = self
                    .params
                    .first()
                    .and_then(parse_number)
                    // Counts past the screen size are clamped by the renderer.
                    .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
                    .and_then(|count| Instruction::cursor_move(c, count))
                    .ok_or(Error::CsiParseError)?;

                Ok(self.complete(instruction))
            },
            'J' => Ok(self.complete(Instruction::ClearScreen)),
            // Cursor visibility requests. The pane always shows its cursor,
            // so `?25` is accepted and dropped.
            'h' | 'l' => {
                if !matches!(self.params.as_slice(), [only] if only == "?25") {
                    return Err(Error::CsiParseError);
                }

                self.finish();
                Ok(true)
            },
            _ => Err(Error::CsiParseError),
        }
    }

    /// Latches `instruction`, replacing an unread one, and ends the sequence.
    fn complete(&mut self, instruction: Instruction) -> bool {
        if let Some(stale) = self.instruction {
            trace!("dropping unread {stale:?}");
        }
        trace!("latched {instruction:?}");

        self.instruction = Some(instruction);
        self.finish();
        true
    }

    fn finish(&mut self) {
        self.state = State::Idle;
        self.params.clear();
        self.raw.clear();
    }
}
