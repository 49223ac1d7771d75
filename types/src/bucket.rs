//! Balance buckets: the POI/spendability lifecycle stage of a shielded balance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::ColorToken;
use crate::error::TypesError;

/// Classification of a shielded token balance by POI lifecycle stage.
///
/// Assigned externally per token balance; this workspace only reads it.
/// Every match over this enum is exhaustive, so adding a variant without a
/// label, color, and status message fails to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceBucket {
    /// Inside the unshield-only standby period after a shield.
    ShieldPending,
    /// Standby period over; proof request submitted.
    ProofSubmitted,
    /// Received from another wallet that has not produced a POI yet.
    #[serde(rename = "MissingExternalPOI")]
    MissingExternalPoi,
    /// Change output of one of our own transactions, POI not generated yet.
    #[serde(rename = "MissingInternalPOI")]
    MissingInternalPoi,
    /// Shield flagged by a list provider. Unshield to origin only.
    ShieldBlocked,
    /// Valid POI, spendable without limitations.
    Spendable,
    /// Already spent.
    Spent,
}

impl BalanceBucket {
    /// Every bucket, in declaration order.
    pub const ALL: [BalanceBucket; 7] = [
        Self::ShieldPending,
        Self::ProofSubmitted,
        Self::MissingExternalPoi,
        Self::MissingInternalPoi,
        Self::ShieldBlocked,
        Self::Spendable,
        Self::Spent,
    ];

    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShieldPending => "Shield Pending",
            Self::ProofSubmitted => "Proof Submitted",
            Self::MissingExternalPoi => "Missing External POI",
            Self::MissingInternalPoi => "Missing Internal POI",
            Self::ShieldBlocked => "Shield Restricted",
            Self::Spendable => "Spendable",
            Self::Spent => "Spent",
        }
    }

    /// Status color token. Resolved to a concrete color by a theme.
    pub fn color(&self) -> ColorToken {
        match self {
            Self::Spendable | Self::Spent => ColorToken::Green,
            Self::ShieldPending | Self::ProofSubmitted => ColorToken::Yellow,
            Self::MissingInternalPoi => ColorToken::Orange,
            Self::ShieldBlocked | Self::MissingExternalPoi => ColorToken::Red,
        }
    }

    /// Whether balances in this bucket count as not (yet) spendable.
    ///
    /// Everything except `Spendable`, including `Spent`.
    pub fn is_non_spendable(&self) -> bool {
        !matches!(self, Self::Spendable)
    }

    /// Identifier used on the wire and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShieldPending => "ShieldPending",
            Self::ProofSubmitted => "ProofSubmitted",
            Self::MissingExternalPoi => "MissingExternalPOI",
            Self::MissingInternalPoi => "MissingInternalPOI",
            Self::ShieldBlocked => "ShieldBlocked",
            Self::Spendable => "Spendable",
            Self::Spent => "Spent",
        }
    }

    /// All non-spendable buckets, in declaration order.
    pub fn non_spendable() -> Vec<BalanceBucket> {
        Self::ALL
            .into_iter()
            .filter(BalanceBucket::is_non_spendable)
            .collect()
    }
}

impl fmt::Display for BalanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive parse of the wire identifier (`"missingexternalpoi"` works).
impl FromStr for BalanceBucket {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypesError::UnknownBucket(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_display_strings() {
        let labels: Vec<&str> = BalanceBucket::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Shield Pending",
                "Proof Submitted",
                "Missing External POI",
                "Missing Internal POI",
                "Shield Restricted",
                "Spendable",
                "Spent",
            ]
        );
    }

    #[test]
    fn colors_are_grouped() {
        use ColorToken::*;
        let colors: Vec<ColorToken> = BalanceBucket::ALL.iter().map(|b| b.color()).collect();
        assert_eq!(colors, vec![Yellow, Yellow, Red, Orange, Red, Green, Green]);
    }

    #[test]
    fn only_spendable_is_spendable() {
        let non_spendable = BalanceBucket::non_spendable();
        assert_eq!(non_spendable.len(), 6);
        assert!(!non_spendable.contains(&BalanceBucket::Spendable));
        assert!(non_spendable.contains(&BalanceBucket::Spent));
    }

    #[test]
    fn parses_wire_identifiers_case_insensitively() {
        assert_eq!(
            "missingexternalpoi".parse::<BalanceBucket>(),
            Ok(BalanceBucket::MissingExternalPoi)
        );
        assert_eq!("Spent".parse::<BalanceBucket>(), Ok(BalanceBucket::Spent));
        assert_eq!(
            "Pending".parse::<BalanceBucket>(),
            Err(TypesError::UnknownBucket("Pending".into()))
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(BalanceBucket::ShieldBlocked.to_string(), "Shield Restricted");
    }

    #[test]
    fn serde_uses_poi_capitalisation() {
        let json = serde_json::to_string(&BalanceBucket::MissingExternalPoi).unwrap();
        assert_eq!(json, "\"MissingExternalPOI\"");
        let back: BalanceBucket = serde_json::from_str("\"MissingInternalPOI\"").unwrap();
        assert_eq!(back, BalanceBucket::MissingInternalPoi);
    }
}
