//! Nullable balance aggregation: canned output, recorded queries.

use railway_types::{BalanceBucket, FrontendWallet, TxidVersion};
use railway_wallet_core::{BalanceAggregator, RailgunWalletBalances, TokenBalances};
use std::cell::RefCell;

/// The arguments of one aggregation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceQuery {
    pub wallet_id: Option<String>,
    pub token_filter: Option<Vec<String>>,
    pub is_railgun: bool,
    pub txid_version: TxidVersion,
    pub bucket_filter: Vec<BalanceBucket>,
}

/// Returns the same balances for every query, regardless of input.
///
/// Values are passed through untouched, so malformed strings can be fed to
/// callers on purpose.
pub struct NullBalanceAggregator {
    output: TokenBalances,
    queries: RefCell<Vec<BalanceQuery>>,
}

impl NullBalanceAggregator {
    pub fn new(output: TokenBalances) -> Self {
        Self {
            output,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Convenience constructor from `(token, balance)` string pairs.
    pub fn with_balances(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(token, balance)| (token.to_string(), Some(balance.to_string())))
                .collect(),
        )
    }

    /// Get all recorded queries (for assertions).
    pub fn queries(&self) -> Vec<BalanceQuery> {
        self.queries.borrow().clone()
    }
}

impl BalanceAggregator for NullBalanceAggregator {
    fn token_balances_for_wallet_and_state(
        &self,
        wallet: Option<&FrontendWallet>,
        token_filter: Option<&[String]>,
        _balances: Option<&RailgunWalletBalances>,
        is_railgun: bool,
        txid_version: TxidVersion,
        bucket_filter: &[BalanceBucket],
    ) -> TokenBalances {
        self.queries.borrow_mut().push(BalanceQuery {
            wallet_id: wallet.map(|w| w.id.clone()),
            token_filter: token_filter.map(<[String]>::to_vec),
            is_railgun,
            txid_version,
            bucket_filter: bucket_filter.to_vec(),
        });
        self.output.clone()
    }
}
