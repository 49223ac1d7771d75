//! Opaque status color tokens.

use serde::{Deserialize, Serialize};

/// A status color, resolved to a concrete value by a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Yellow,
    Orange,
    Red,
}
