use proptest::prelude::*;
use tui_escape::{
    Actor, Attributes, Error, Instruction, Interpreter, MAX_PARAM_LEN,
    MAX_PARAMS, OutputMode, State, Stream,
};

/// Records literal text only, the way a screen buffer would.
#[derive(Default)]
struct Text {
    text: String,
}

impl Actor for Text {
    fn print(&mut self, c: char, _: Attributes) {
        self.text.push(c);
    }
}

const FINAL_BYTES: [char; 11] =
    ['m', 'A', 'B', 'C', 'D', 'J', 'K', 'h', 'l', 's', 'u'];

fn arb_mode() -> impl Strategy<Value = OutputMode> {
    prop_oneof![Just(OutputMode::Basic), Just(OutputMode::Extended)]
}

/// Characters that exercise every state of the automaton.
fn arb_input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('\x1b'),
            Just('['),
            Just(';'),
            Just('?'),
            prop::char::range('0', '9'),
            prop::sample::select(FINAL_BYTES.to_vec()),
            any::<char>(),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Like [`arb_input`], but without any byte that could complete a sequence.
fn arb_unterminated_input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('\x1b'),
            Just('['),
            Just(';'),
            Just('?'),
            prop::char::range('0', '9'),
            any::<char>().prop_filter("final byte", |c| {
                !FINAL_BYTES.contains(c)
            }),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn idle_literals_are_never_consumed(
        text in "[^\x1b]{0,64}",
        mode in arb_mode(),
    ) {
        let mut interpreter = Interpreter::new(mode);

        for c in text.chars() {
            prop_assert_eq!(interpreter.feed(c), Ok(false));
            prop_assert_eq!(interpreter.state(), State::Idle);
        }
    }

    #[test]
    fn reset_always_returns_to_idle(input in arb_input(), mode in arb_mode()) {
        let mut interpreter = Interpreter::new(mode);
        for c in input.chars() {
            if interpreter.feed(c).is_err() {
                break;
            }
        }

        interpreter.reset();
        interpreter.reset();

        prop_assert_eq!(interpreter.state(), State::Idle);
        prop_assert!(interpreter.params().is_empty());
        prop_assert!(interpreter.attributes().is_default());
        prop_assert!(interpreter.buffered_literal().is_empty());
    }

    #[test]
    fn buffered_literal_is_exactly_the_pending_sequence(
        input in arb_input(),
        mode in arb_mode(),
    ) {
        let mut interpreter = Interpreter::new(mode);
        let mut pending = String::new();

        for c in input.chars() {
            let idle = interpreter.state() == State::Idle;
            match interpreter.feed(c) {
                Ok(false) => prop_assert!(idle),
                Ok(true) => {
                    if idle {
                        pending.clear();
                    }
                    pending.push(c);
                    if interpreter.state() == State::Idle {
                        pending.clear();
                    }
                },
                Err(_) => {
                    pending.push(c);
                    prop_assert_eq!(
                        interpreter.take_buffered_literal(),
                        pending.clone()
                    );
                    interpreter.reset();
                    pending.clear();
                },
            }
            prop_assert_eq!(interpreter.buffered_literal(), pending.as_str());
        }
    }

    #[test]
    fn stream_without_final_bytes_round_trips_text(
        input in arb_unterminated_input(),
        mode in arb_mode(),
    ) {
        let mut stream = Stream::new(mode);
        let mut actor = Text::default();
        stream.advance_str(&input, &mut actor);

        // Nothing can complete, so every character is either printed once
        // or still pending in the literal buffer.
        let mut replayed = actor.text.clone();
        replayed.push_str(stream.interpreter().buffered_literal());
        prop_assert_eq!(replayed, input);
    }

    #[test]
    fn param_count_is_bounded(count in MAX_PARAMS + 1..MAX_PARAMS * 3) {
        let mut interpreter = Interpreter::default();
        let input = format!("\x1b[{}m", vec!["1"; count].join(";"));

        let result = input
            .chars()
            .try_for_each(|c| interpreter.feed(c).map(|_| ()));

        prop_assert_eq!(result, Err(Error::SequenceTooLong));
        prop_assert!(interpreter.params().len() <= MAX_PARAMS);
    }

    #[test]
    fn param_length_is_bounded(len in MAX_PARAM_LEN + 1..MAX_PARAM_LEN * 2) {
        let mut interpreter = Interpreter::default();
        let input = format!("\x1b[{}m", "7".repeat(len));

        let result = input
            .chars()
            .try_for_each(|c| interpreter.feed(c).map(|_| ()));

        prop_assert_eq!(result, Err(Error::SequenceTooLong));
        prop_assert!(
            interpreter.params().iter().all(|p| p.len() <= MAX_PARAM_LEN)
        );
    }

    #[test]
    fn cursor_counts_are_latched(
        count in 0u32..100_000,
        letter in prop::sample::select(vec!['A', 'B', 'C', 'D']),
    ) {
        let mut interpreter = Interpreter::default();
        for c in format!("\x1b[{count}{letter}").chars() {
            prop_assert_eq!(interpreter.feed(c), Ok(true));
        }

        let expected = match letter {
            'A' => Instruction::CursorUp(count),
            'B' => Instruction::CursorDown(count),
            'C' => Instruction::CursorLeft(count),
            _ => Instruction::CursorRight(count),
        };
        prop_assert_eq!(interpreter.instruction(), Some(expected));
    }
}
