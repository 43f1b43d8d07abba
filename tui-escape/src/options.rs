use serde::{Deserialize, Serialize};

use crate::color::OutputMode;

/// Upper bound on the number of parameters in one sequence.
pub const MAX_PARAMS: usize = 20;

/// Upper bound on the length of a single parameter, in characters.
pub const MAX_PARAM_LEN: usize = 255;

/// Configuration knobs for an [`Interpreter`](crate::Interpreter).
///
/// The parameter bounds can be tightened but never raised above
/// [`MAX_PARAMS`] and [`MAX_PARAM_LEN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub mode: OutputMode,
    /// Maximum number of `;`-separated parameters.
    pub max_params: usize,
    /// Maximum characters accumulated into one parameter.
    pub max_param_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: OutputMode::Basic,
            max_params: MAX_PARAMS,
            max_param_len: MAX_PARAM_LEN,
        }
    }
}

impl Options {
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_params(mut self, max_params: usize) -> Self {
        self.max_params = max_params;
        self
    }

    pub fn with_max_param_len(mut self, max_param_len: usize) -> Self {
        self.max_param_len = max_param_len;
        self
    }

    /// Bounds actually enforced, clamped to `1..=` the hard ceilings.
    pub(crate) fn limits(&self) -> (usize, usize) {
        (
            self.max_params.clamp(1, MAX_PARAMS),
            self.max_param_len.clamp(1, MAX_PARAM_LEN),
        )
    }
}

impl From<OutputMode> for Options {
    fn from(mode: OutputMode) -> Self {
        Self::default().with_mode(mode)
    }
}
