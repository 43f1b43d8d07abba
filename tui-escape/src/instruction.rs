/// Display side effect latched by a completed escape sequence.
///
/// Only one instruction is pending at a time; a newer one replaces an
/// unread one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// CUU
    CursorUp(u32),
    /// CUD
    CursorDown(u32),
    /// `CSI n C`. Moves left, unlike the usual CUF.
    CursorLeft(u32),
    /// `CSI n D`. Moves right, unlike the usual CUB.
    CursorRight(u32),
    /// ED
    ClearScreen,
    /// EL
    EraseToEndOfLine,
    /// SCOSC
    SaveCursorPosition,
    /// SCORC
    RestoreCursorPosition,
}

impl Instruction {
    /// Relative cursor movement for a direction letter.
    ///
    /// `C` maps to left and `D` to right; renderers embedding this crate
    /// rely on that assignment.
    pub(crate) fn cursor_move(letter: char, count: u32) -> Option<Self> {
        match letter {
            'A' => Some(Self::CursorUp(count)),
            'B' => Some(Self::CursorDown(count)),
            'C' => Some(Self::CursorLeft(count)),
            'D' => Some(Self::CursorRight(count)),
            _ => None,
        }
    }
}
