//! Theme resolution for status color tokens.

use railway_types::ColorToken;

/// Resolves opaque color tokens to concrete colors.
pub trait Theme {
    fn resolve(&self, token: ColorToken) -> &str;
}

/// The wallet's default transaction-status palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Styleguide {
    pub tx_green: String,
    pub tx_yellow: String,
    pub tx_orange: String,
    pub tx_red: String,
}

impl Default for Styleguide {
    fn default() -> Self {
        Self {
            tx_green: "#00C48C".to_string(),
            tx_yellow: "#FFC043".to_string(),
            tx_orange: "#FF8A3D".to_string(),
            tx_red: "#FF4D4F".to_string(),
        }
    }
}

impl Theme for Styleguide {
    fn resolve(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Green => &self.tx_green,
            ColorToken::Yellow => &self.tx_yellow,
            ColorToken::Orange => &self.tx_orange,
            ColorToken::Red => &self.tx_red,
        }
    }
}
