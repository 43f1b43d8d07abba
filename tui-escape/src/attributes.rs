//! Text attributes tracked between literal characters.
//!
//! Each side (foreground and background) is a [`ColorSlot`] plus a set of
//! [`Modifiers`]. Renderers that stamp cells with a single integer can use
//! [`Attribute::packed`]: bits `0..9` hold the slot and the modifier flags
//! occupy bits `9..12`.

use bitflags::bitflags;

/// Number of low bits reserved for the color slot in the packed form.
pub const SLOT_BITS: u32 = 9;

const SLOT_MASK: u32 = (1 << SLOT_BITS) - 1;

bitflags! {
    /// Modifiers applied on top of a color slot.
    ///
    /// Flag values start right above the slot range, so a packed attribute
    /// is simply `slot | modifiers.bits()`.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const BOLD      = 1 << 9;
        const UNDERLINE = 1 << 10;
        const REVERSE   = 1 << 11;
    }
}

/// Color identifier for one side of a cell.
///
/// Slot `0` is the terminal default; slots `1..=256` map to palette
/// indexes `0..=255` shifted by one.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct ColorSlot(u16);

impl ColorSlot {
    pub const DEFAULT: Self = Self(0);

    /// Highest slot value, reached by palette index 255.
    pub const MAX: u16 = 256;

    /// Slot for a palette index.
    #[inline]
    pub fn from_palette(index: u8) -> Self {
        Self(u16::from(index) + 1)
    }

    /// Builds a slot from its raw value, rejecting anything above [`Self::MAX`].
    pub fn new(raw: u16) -> Option<Self> {
        (raw <= Self::MAX).then_some(Self(raw))
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_default(self) -> bool {
        self.0 == 0
    }

    /// Palette index this slot refers to, `None` for the terminal default.
    pub fn palette_index(self) -> Option<u8> {
        self.0.checked_sub(1).and_then(|index| u8::try_from(index).ok())
    }
}

/// Color slot and modifiers for one side of a cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub slot: ColorSlot,
    pub modifiers: Modifiers,
}

impl Attribute {
    pub const DEFAULT: Self = Self {
        slot: ColorSlot::DEFAULT,
        modifiers: Modifiers::empty(),
    };

    pub fn new(slot: ColorSlot, modifiers: Modifiers) -> Self {
        Self { slot, modifiers }
    }

    /// Terminal default color with no modifiers.
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Single-integer form: slot in bits `0..9`, modifiers above.
    #[inline]
    pub fn packed(&self) -> u32 {
        u32::from(self.slot.get()) | self.modifiers.bits()
    }

    /// Inverse of [`Self::packed`].
    ///
    /// Returns `None` when the slot is out of range or unknown modifier bits
    /// are set.
    pub fn from_packed(bits: u32) -> Option<Self> {
        let slot = u16::try_from(bits & SLOT_MASK)
            .ok()
            .and_then(ColorSlot::new)?;
        let modifiers = Modifiers::from_bits(bits & !SLOT_MASK)?;

        Some(Self { slot, modifiers })
    }
}

/// Foreground and background attributes in effect for the next literal.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attributes {
    pub foreground: Attribute,
    pub background: Attribute,
}

impl Attributes {
    pub const DEFAULT: Self = Self {
        foreground: Attribute::DEFAULT,
        background: Attribute::DEFAULT,
    };

    #[inline]
    pub fn is_default(&self) -> bool {
        self.foreground.is_default() && self.background.is_default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::DEFAULT;
    }
}
