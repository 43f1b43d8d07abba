use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, Attributes, ColorSlot, Modifiers};
use crate::error::{Error, Result};

/// Palette resolution strategy, fixed for the lifetime of an interpreter.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// 8 foreground and 8 background colors (`30-37`, `40-47`).
    #[default]
    Basic,
    /// 256-color indexed palette (`38;5;n`, `48;5;n`), falling back to
    /// [`OutputMode::Basic`] for anything else.
    Extended,
}

impl OutputMode {
    /// Applies SGR parameters to `current` and returns the result.
    ///
    /// Attributes are only replaced once every parameter was accepted, so a
    /// malformed sequence leaves the previous state untouched.
    pub(crate) fn resolve(
        self,
        params: &[String],
        current: Attributes,
    ) -> Result<Attributes> {
        match self {
            Self::Basic => resolve_basic(params, current),
            Self::Extended => resolve_extended(params, current),
        }
    }
}

fn resolve_basic(
    params: &[String],
    mut attrs: Attributes,
) -> Result<Attributes> {
    for param in params {
        let code = parse_number(param).ok_or(Error::CsiParseError)?;

        match code {
            30..=37 => {
                let index = (code - 30) as u8;
                attrs.foreground.slot = ColorSlot::from_palette(index);
            },
            39 => attrs.foreground = Attribute::DEFAULT,
            40..=47 => {
                let index = (code - 40) as u8;
                attrs.background.slot = ColorSlot::from_palette(index);
            },
            49 => attrs.background.slot = ColorSlot::DEFAULT,
            0 => attrs.reset(),
            code => apply_modifier(&mut attrs, code),
        }
    }

    Ok(attrs)
}

fn resolve_extended(
    params: &[String],
    mut attrs: Attributes,
) -> Result<Attributes> {
    let [target, marker, index, rest @ ..] = params else {
        return resolve_basic(params, attrs);
    };

    if parse_number(marker).ok_or(Error::CsiParseError)? != 5 {
        return resolve_basic(params, attrs);
    }

    let target = parse_number(target).ok_or(Error::CsiParseError)?;
    let slot = parse_number(index)
        .and_then(|index| u8::try_from(index).ok())
        .map(ColorSlot::from_palette)
        .ok_or(Error::CsiParseError)?;

    match target {
        38 => {
            attrs.foreground.slot = slot;
            for param in rest {
                let code = parse_number(param).ok_or(Error::CsiParseError)?;
                apply_modifier(&mut attrs, code);
            }
        },
        48 => attrs.background.slot = slot,
        _ => return Err(Error::CsiParseError),
    }

    Ok(attrs)
}

/// Bold, underline and reverse always land on the foreground side.
fn apply_modifier(attrs: &mut Attributes, code: u64) {
    let modifier = match code {
        1 => Modifiers::BOLD,
        4 => Modifiers::UNDERLINE,
        7 => Modifiers::REVERSE,
        _ => return,
    };

    attrs.foreground.modifiers.insert(modifier);
}

/// Parses a decimal parameter. Empty, non-digit or input past `u64::MAX`
/// is rejected.
pub(crate) fn parse_number(input: &str) -> Option<u64> {
    if input.is_empty() {
        return None;
    }

    input.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(10)?;
        acc.checked_mul(10)?.checked_add(u64::from(digit))
    })
}
