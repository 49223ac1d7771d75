//! Transaction POI status: label, color, and explanatory message per bucket.

use serde::Serialize;

use railway_types::{BalanceBucket, Clock, ColorToken, Network, PoiParams, SavedTransaction};

use crate::pending::shield_pending_complete_text;
use crate::theme::Theme;

pub const PROOF_SUBMITTED_MESSAGE: &str = "Private Proof of Innocence will begin shortly.";

pub const PREDATES_POI_LAUNCH_MESSAGE: &str = "This transaction occurred before Private Proof of Innocence launched on this network. Please wait. Your wallet will make these funds spendable within a few minutes.";

pub const REQUEST_POI_FROM_SENDER_MESSAGE: &str = "Please request Private Proof of Innocence from sender. Your sender may simply open Railway Wallet to kick off Private POI generation.";

pub const MISSING_INTERNAL_POI_MESSAGE: &str = "This transaction includes a change output. Please wait. Your wallet will make these funds spendable within a few minutes.";

pub const SHIELD_BLOCKED_MESSAGE: &str = "This shield transaction was blocked for use in RAILGUN. You can safely unshield the tokens to the origin address. Public broadcaster functionality will be disabled.";

/// Explanatory text for a transaction's balance bucket.
///
/// `None` for `Spendable` and `Spent`: there is nothing to explain.
pub fn status_message(
    bucket: BalanceBucket,
    transaction: &SavedTransaction,
    network: &Network,
    params: &PoiParams,
    clock: &dyn Clock,
) -> Option<String> {
    let message = match bucket {
        BalanceBucket::ShieldPending => {
            return Some(shield_pending_complete_text(
                transaction.timestamp,
                network,
                params,
                clock,
            ))
        }
        BalanceBucket::ProofSubmitted => PROOF_SUBMITTED_MESSAGE,
        BalanceBucket::MissingExternalPoi => {
            if network.predates_poi_launch(transaction.timestamp) {
                PREDATES_POI_LAUNCH_MESSAGE
            } else {
                REQUEST_POI_FROM_SENDER_MESSAGE
            }
        }
        BalanceBucket::MissingInternalPoi => MISSING_INTERNAL_POI_MESSAGE,
        BalanceBucket::ShieldBlocked => SHIELD_BLOCKED_MESSAGE,
        BalanceBucket::Spendable | BalanceBucket::Spent => return None,
    };
    Some(message.to_string())
}

/// Everything a transaction row needs to render its POI status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionPoiStatus {
    pub bucket: BalanceBucket,
    pub label: &'static str,
    pub color: ColorToken,
    pub message: Option<String>,
}

impl TransactionPoiStatus {
    /// The status color resolved against a theme.
    pub fn resolved_color<'t>(&self, theme: &'t dyn Theme) -> &'t str {
        theme.resolve(self.color)
    }
}

/// Resolve label, color, and message for a transaction in `bucket`.
pub fn transaction_poi_status(
    bucket: BalanceBucket,
    transaction: &SavedTransaction,
    network: &Network,
    params: &PoiParams,
    clock: &dyn Clock,
) -> TransactionPoiStatus {
    let message = status_message(bucket, transaction, network, params, clock);
    tracing::trace!(
        tx = %transaction.id,
        network = %network.name,
        bucket = bucket.as_str(),
        has_message = message.is_some(),
        "resolved POI status"
    );
    TransactionPoiStatus {
        bucket,
        label: bucket.label(),
        color: bucket.color(),
        message,
    }
}
