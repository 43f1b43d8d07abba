//! Renders escape-laden output into plain lines, printing each cell's
//! packed attributes next to it. Run with `RUST_LOG=trace` to watch the
//! interpreter.
use tui_escape::{Actor, Attributes, Error, Instruction, OutputMode, Stream};

#[derive(Default)]
struct LineBuffer {
    lines: Vec<Vec<(char, Attributes)>>,
}

impl LineBuffer {
    fn current(&mut self) -> &mut Vec<(char, Attributes)> {
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

impl Actor for LineBuffer {
    fn print(&mut self, c: char, attributes: Attributes) {
        if c == '\n' {
            self.lines.push(Vec::new());
        } else {
            self.current().push((c, attributes));
        }
    }

    fn instruction(&mut self, instruction: Instruction) {
        println!("instruction: {instruction:?}");
    }

    fn error(&mut self, error: &Error, literal: &str) {
        println!("replaying {literal:?} after: {error}");
    }
}

fn main() {
    env_logger::init();

    let mut stream = Stream::new(OutputMode::Extended);
    let mut buffer = LineBuffer::default();

    stream.advance(
        b"\x1b[1;32mPASS\x1b[0m parser\n\
          \x1b[38;5;208mWARN\x1b[0m slow test\x1b[K\n\
          \x1bZ not an escape\n",
        &mut buffer,
    );

    for (row, line) in buffer.lines.iter().enumerate() {
        let text: String = line.iter().map(|(c, _)| *c).collect();
        let attrs: Vec<u32> =
            line.iter().map(|(_, a)| a.foreground.packed()).collect();
        println!("{row:02}: {text:?} fg={attrs:?}");
    }
}
