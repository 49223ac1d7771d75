//! Shielded token balances by bucket, and their aggregation across buckets.
//!
//! Balances travel as decimal integer strings (token base units). They are
//! parsed with arbitrary precision since token amounts routinely exceed
//! `u128` scaled values.

use num_bigint::{BigInt, BigUint, Sign};
use std::collections::HashMap;

use railway_types::{BalanceBucket, FrontendWallet, TxidVersion};

use crate::WalletError;

/// Token key → aggregated balance, in the aggregator's iteration order.
///
/// A `None` balance means the aggregator has no value for that token.
pub type TokenBalances = Vec<(String, Option<String>)>;

/// Sums per-token balances for a wallet across a set of buckets.
pub trait BalanceAggregator {
    fn token_balances_for_wallet_and_state(
        &self,
        wallet: Option<&FrontendWallet>,
        token_filter: Option<&[String]>,
        balances: Option<&RailgunWalletBalances>,
        is_railgun: bool,
        txid_version: TxidVersion,
        bucket_filter: &[BalanceBucket],
    ) -> TokenBalances;
}

/// Parse a balance string as an arbitrary-precision integer.
///
/// Accepts optionally signed decimal, or unsigned `0x`/`0o`/`0b` prefixed
/// integers, surrounded by optional whitespace. An empty string is zero.
pub fn parse_balance(token: &str, value: &str) -> Result<BigInt, WalletError> {
    let invalid = || WalletError::InvalidBalance {
        token: token.to_string(),
        value: value.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(BigInt::default());
    }

    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));

    if let Some((digits, radix)) = prefixed {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(invalid());
        }
        let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(invalid)?;
        return Ok(BigInt::from(magnitude));
    }

    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    BigInt::parse_bytes(trimmed.as_bytes(), 10).ok_or_else(invalid)
}

/// Whether a parsed balance is strictly positive.
pub fn is_positive(balance: &BigInt) -> bool {
    balance.sign() == Sign::Plus
}

/// One token's balance inside a bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBalance {
    pub token_address: String,
    pub balance: BigInt,
}

/// Per-bucket token balances for a wallet and txid version, in insertion order.
pub type BucketBalances = HashMap<BalanceBucket, Vec<TokenBalance>>;

/// Shielded balances of every loaded wallet, keyed by wallet id then txid version.
#[derive(Clone, Debug, Default)]
pub struct RailgunWalletBalances {
    wallets: HashMap<String, HashMap<TxidVersion, BucketBalances>>,
}

impl RailgunWalletBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token balance string for a wallet's bucket.
    ///
    /// Token addresses are keyed lowercase. Setting a token twice in the same
    /// bucket replaces the earlier value and keeps its position.
    pub fn set_balance(
        &mut self,
        wallet_id: &str,
        txid_version: TxidVersion,
        bucket: BalanceBucket,
        token_address: &str,
        balance: &str,
    ) -> Result<(), WalletError> {
        let token_address = token_address.to_lowercase();
        let balance = parse_balance(&token_address, balance)?;
        let tokens = self
            .wallets
            .entry(wallet_id.to_string())
            .or_default()
            .entry(txid_version)
            .or_default()
            .entry(bucket)
            .or_default();

        match tokens.iter_mut().find(|t| t.token_address == token_address) {
            Some(existing) => existing.balance = balance,
            None => tokens.push(TokenBalance {
                token_address,
                balance,
            }),
        }
        Ok(())
    }

    pub fn bucket_balances(
        &self,
        wallet_id: &str,
        txid_version: TxidVersion,
    ) -> Option<&BucketBalances> {
        self.wallets.get(wallet_id)?.get(&txid_version)
    }
}

/// Aggregates balances from the supplied [`RailgunWalletBalances`].
///
/// Tokens are emitted in first-seen order, walking buckets in filter order.
/// Public (non-shielded) wallets carry no bucketed balances here.
#[derive(Clone, Copy, Debug, Default)]
pub struct RailgunBalanceAggregator;

impl BalanceAggregator for RailgunBalanceAggregator {
    fn token_balances_for_wallet_and_state(
        &self,
        wallet: Option<&FrontendWallet>,
        token_filter: Option<&[String]>,
        balances: Option<&RailgunWalletBalances>,
        is_railgun: bool,
        txid_version: TxidVersion,
        bucket_filter: &[BalanceBucket],
    ) -> TokenBalances {
        let (Some(wallet), Some(balances), true) = (wallet, balances, is_railgun) else {
            return Vec::new();
        };
        let Some(by_bucket) = balances.bucket_balances(&wallet.id, txid_version) else {
            return Vec::new();
        };

        let wanted = |address: &str| {
            token_filter.map_or(true, |filter| {
                filter.iter().any(|t| t.eq_ignore_ascii_case(address))
            })
        };

        let mut totals: Vec<(String, BigInt)> = Vec::new();
        for bucket in bucket_filter {
            let Some(tokens) = by_bucket.get(bucket) else {
                continue;
            };
            for token in tokens.iter().filter(|t| wanted(t.token_address.as_str())) {
                match totals.iter_mut().find(|(key, _)| *key == token.token_address) {
                    Some((_, total)) => *total += &token.balance,
                    None => totals.push((token.token_address.clone(), token.balance.clone())),
                }
            }
        }

        totals
            .into_iter()
            .map(|(key, total)| (key, Some(total.to_string())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "wallet-1";
    const V2: TxidVersion = TxidVersion::V2PoseidonMerkle;

    fn wallet() -> FrontendWallet {
        FrontendWallet {
            id: WALLET.to_string(),
            name: "Main".to_string(),
            railgun_address: "0zk1qexample".to_string(),
            is_view_only: false,
        }
    }

    #[test]
    fn parses_decimal_and_prefixed_balances() {
        assert_eq!(parse_balance("t", "42").unwrap(), BigInt::from(42));
        assert_eq!(parse_balance("t", " -7 ").unwrap(), BigInt::from(-7));
        assert_eq!(parse_balance("t", "0x1f").unwrap(), BigInt::from(31));
        assert_eq!(parse_balance("t", "0b101").unwrap(), BigInt::from(5));
        assert_eq!(parse_balance("t", "").unwrap(), BigInt::from(0));
    }

    #[test]
    fn parses_values_beyond_u128() {
        let big = "340282366920938463463374607431768211456"; // u128::MAX + 1
        let parsed = parse_balance("t", big).unwrap();
        assert_eq!(parsed.to_string(), big);
        assert!(is_positive(&parsed));
    }

    #[test]
    fn rejects_malformed_balances() {
        for bad in ["1.5", "abc", "1_000", "-", "0x", "-0x10", "0xzz", "1e18"] {
            assert_eq!(
                parse_balance("0xtoken", bad),
                Err(WalletError::InvalidBalance {
                    token: "0xtoken".into(),
                    value: bad.into(),
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn zero_and_negative_are_not_positive() {
        assert!(!is_positive(&BigInt::from(0)));
        assert!(!is_positive(&BigInt::from(-3)));
        assert!(is_positive(&BigInt::from(1)));
    }

    #[test]
    fn set_balance_replaces_in_place() {
        let mut balances = RailgunWalletBalances::new();
        balances
            .set_balance(WALLET, V2, BalanceBucket::Spendable, "0xAA", "1")
            .unwrap();
        balances
            .set_balance(WALLET, V2, BalanceBucket::Spendable, "0xBB", "2")
            .unwrap();
        balances
            .set_balance(WALLET, V2, BalanceBucket::Spendable, "0xaa", "5")
            .unwrap();
        let tokens = &balances.bucket_balances(WALLET, V2).unwrap()[&BalanceBucket::Spendable];
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].token_address, "0xaa");
        assert_eq!(tokens[0].balance, BigInt::from(5));
    }

    #[test]
    fn set_balance_rejects_malformed() {
        let mut balances = RailgunWalletBalances::new();
        assert!(balances
            .set_balance(WALLET, V2, BalanceBucket::Spent, "0xaa", "ten")
            .is_err());
        assert!(balances.bucket_balances(WALLET, V2).is_none());
    }

    #[test]
    fn aggregates_across_buckets_in_first_seen_order() {
        let mut balances = RailgunWalletBalances::new();
        balances
            .set_balance(WALLET, V2, BalanceBucket::ShieldPending, "0xbb", "10")
            .unwrap();
        balances
            .set_balance(WALLET, V2, BalanceBucket::ProofSubmitted, "0xaa", "3")
            .unwrap();
        balances
            .set_balance(WALLET, V2, BalanceBucket::ProofSubmitted, "0xbb", "5")
            .unwrap();
        balances
            .set_balance(WALLET, V2, BalanceBucket::Spendable, "0xcc", "100")
            .unwrap();

        let result = RailgunBalanceAggregator.token_balances_for_wallet_and_state(
            Some(&wallet()),
            None,
            Some(&balances),
            true,
            V2,
            &[BalanceBucket::ShieldPending, BalanceBucket::ProofSubmitted],
        );
        assert_eq!(
            result,
            vec![
                ("0xbb".to_string(), Some("15".to_string())),
                ("0xaa".to_string(), Some("3".to_string())),
            ]
        );
    }

    #[test]
    fn token_filter_restricts_output() {
        let mut balances = RailgunWalletBalances::new();
        balances
            .set_balance(WALLET, V2, BalanceBucket::Spent, "0xaa", "1")
            .unwrap();
        balances
            .set_balance(WALLET, V2, BalanceBucket::Spent, "0xbb", "2")
            .unwrap();
        let filter = vec!["0xBB".to_string()];
        let result = RailgunBalanceAggregator.token_balances_for_wallet_and_state(
            Some(&wallet()),
            Some(filter.as_slice()),
            Some(&balances),
            true,
            V2,
            &[BalanceBucket::Spent],
        );
        assert_eq!(result, vec![("0xbb".to_string(), Some("2".to_string()))]);
    }

    #[test]
    fn missing_inputs_yield_nothing() {
        let balances = RailgunWalletBalances::new();
        let buckets = BalanceBucket::ALL;
        let agg = RailgunBalanceAggregator;
        assert!(agg
            .token_balances_for_wallet_and_state(None, None, Some(&balances), true, V2, &buckets)
            .is_empty());
        assert!(agg
            .token_balances_for_wallet_and_state(Some(&wallet()), None, None, true, V2, &buckets)
            .is_empty());
        assert!(agg
            .token_balances_for_wallet_and_state(
                Some(&wallet()),
                None,
                Some(&balances),
                false,
                V2,
                &buckets
            )
            .is_empty());
    }

    #[test]
    fn txid_versions_are_separate() {
        let mut balances = RailgunWalletBalances::new();
        balances
            .set_balance(WALLET, V2, BalanceBucket::Spent, "0xaa", "1")
            .unwrap();
        let result = RailgunBalanceAggregator.token_balances_for_wallet_and_state(
            Some(&wallet()),
            None,
            Some(&balances),
            true,
            TxidVersion::V3PoseidonMerkle,
            &[BalanceBucket::Spent],
        );
        assert!(result.is_empty());
    }
}
