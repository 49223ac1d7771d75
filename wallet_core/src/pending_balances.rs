//! Tokens holding balance that is not spendable yet.

use railway_types::{BalanceBucket, FrontendWallet, TxidVersion};

use crate::balance::{is_positive, parse_balance, BalanceAggregator, RailgunWalletBalances};
use crate::WalletError;

/// Token keys with a strictly positive balance across the non-spendable buckets.
///
/// Keys keep the aggregator's order. Public wallets (`is_railgun == false`)
/// have no POI buckets, so the result is empty and the aggregator is not
/// queried. A malformed balance string is a broken upstream contract and is
/// returned as [`WalletError::InvalidBalance`].
pub fn tokens_pending_balances(
    aggregator: &dyn BalanceAggregator,
    wallet: Option<&FrontendWallet>,
    balances: Option<&RailgunWalletBalances>,
    txid_version: TxidVersion,
    is_railgun: bool,
) -> Result<Vec<String>, WalletError> {
    if !is_railgun {
        return Ok(Vec::new());
    }

    let non_spendable = BalanceBucket::non_spendable();
    let totals = aggregator.token_balances_for_wallet_and_state(
        wallet,
        None,
        balances,
        is_railgun,
        txid_version,
        &non_spendable,
    );
    let queried = totals.len();

    let mut pending = Vec::new();
    for (token, value) in totals {
        let Some(value) = value else {
            continue;
        };
        if is_positive(&parse_balance(&token, &value)?) {
            pending.push(token);
        }
    }

    tracing::debug!(
        txid_version = %txid_version,
        queried,
        pending = pending.len(),
        "listed tokens with non-spendable balances"
    );
    Ok(pending)
}
