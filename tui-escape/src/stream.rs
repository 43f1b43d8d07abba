use utf8parse::Receiver;

use crate::actor::Actor;
use crate::interpreter::Interpreter;
use crate::options::Options;

/// Collects the code point produced by a single decoder step.
#[derive(Default)]
struct Decoder {
    inner: Option<char>,
}

impl Decoder {
    fn get(self) -> Option<char> {
        self.inner
    }
}

impl Receiver for Decoder {
    fn codepoint(&mut self, c: char) {
        self.inner.replace(c);
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

/// Drives an [`Interpreter`] from raw pty output.
///
/// Bytes are decoded as UTF-8 (invalid sequences become U+FFFD) and every
/// decoded character goes through [`Interpreter::process`], so the actor
/// only ever sees literals, instructions and already-recovered errors.
#[derive(Default)]
pub struct Stream {
    interpreter: Interpreter,
    utf8: utf8parse::Parser,
}

impl Stream {
    #[must_use]
    pub fn new(options: impl Into<Options>) -> Self {
        Self {
            interpreter: Interpreter::new(options),
            utf8: utf8parse::Parser::new(),
        }
    }

    /// Advances with a chunk of bytes. A multi-byte character split across
    /// chunks is completed by the next call.
    pub fn advance<A: Actor>(&mut self, bytes: &[u8], actor: &mut A) {
        for &byte in bytes {
            let mut decoder = Decoder::default();
            self.utf8.advance(&mut decoder, byte);

            if let Some(c) = decoder.get() {
                self.interpreter.process(c, actor);
            }
        }
    }

    /// Advances with already decoded text.
    ///
    /// Should not be interleaved with [`Stream::advance`] while a multi-byte
    /// character is still incomplete.
    pub fn advance_str<A: Actor>(&mut self, text: &str, actor: &mut A) {
        for c in text.chars() {
            self.interpreter.process(c, actor);
        }
    }

    /// Resets the interpreter and drops any partially decoded character.
    /// Used when the stream is reattached to a new source.
    pub fn reset(&mut self) {
        self.interpreter.reset();
        self.utf8 = utf8parse::Parser::new();
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    pub fn into_interpreter(self) -> Interpreter {
        self.interpreter
    }
}
