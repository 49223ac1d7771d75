use proptest::prelude::*;

use railway_nullables::NullClock;
use railway_types::{
    BalanceBucket, Network, NetworkName, PoiLaunchGate, PoiParams, SavedTransaction, Timestamp,
};
use railway_wallet_core::pending::format_pending_duration;
use railway_wallet_core::{shield_pending_complete_text, status_message};

fn any_bucket() -> impl Strategy<Value = BalanceBucket> {
    prop::sample::select(BalanceBucket::ALL.to_vec())
}

fn network(is_testnet: bool, gate: Option<u64>) -> Network {
    let mut network = Network::new(NetworkName::Polygon, "Polygon");
    if is_testnet {
        network = network.testnet();
    }
    match gate {
        Some(secs) => network.with_poi_launch(PoiLaunchGate::from(secs)),
        None => network,
    }
}

proptest! {
    /// Once the standby period has elapsed the countdown is terminal.
    #[test]
    fn countdown_terminal_after_period(
        tx in 0u64..2_000_000_000,
        extra in 0.0f64..1_000_000.0,
        is_testnet in any::<bool>(),
    ) {
        let params = PoiParams::default();
        let net = network(is_testnet, None);
        let pending = params.pending_period_secs(&net) as f64;
        let clock = NullClock::new(tx as f64 + pending + extra);
        prop_assert_eq!(
            shield_pending_complete_text(Timestamp::new(tx), &net, &params, &clock),
            "Will be available soon"
        );
    }

    /// Inside the standby period the countdown is an estimate with a unit.
    #[test]
    fn countdown_estimate_inside_period(
        tx in 0u64..2_000_000_000,
        fraction in 0.0f64..0.999,
        is_testnet in any::<bool>(),
    ) {
        let params = PoiParams::default();
        let net = network(is_testnet, None);
        let pending = params.pending_period_secs(&net) as f64;
        let clock = NullClock::new(tx as f64 + pending * fraction);
        let text = shield_pending_complete_text(Timestamp::new(tx), &net, &params, &clock);
        prop_assert!(text.starts_with("Est. "), "{}", text);
        prop_assert!(text.ends_with(" in revert-only standby period"), "{}", text);
        let amount = &text["Est. ".len()..text.len() - " in revert-only standby period".len()];
        prop_assert!(amount.ends_with(['s', 'm', 'h']), "{}", amount);
    }

    /// Only Spendable and Spent lack a status message.
    #[test]
    fn message_absent_only_for_spendable_and_spent(
        bucket in any_bucket(),
        tx in 0u64..2_000_000_000,
        gate in proptest::option::of(0u64..2_000_000_000),
    ) {
        let net = network(false, gate);
        let transaction = SavedTransaction::new("0x1", NetworkName::Polygon, Timestamp::new(tx));
        let clock = NullClock::at(Timestamp::new(tx));
        let message = status_message(bucket, &transaction, &net, &PoiParams::default(), &clock);
        let expect_none = matches!(bucket, BalanceBucket::Spendable | BalanceBucket::Spent);
        prop_assert_eq!(message.is_none(), expect_none);
    }

    /// Full-duration text picks exactly one band and pluralises hours correctly.
    #[test]
    fn pending_duration_bands(secs in 0u64..10_000_000) {
        let text = format_pending_duration(secs as f64);
        if secs < 60 {
            prop_assert_eq!(text, format!("{secs} seconds"));
        } else if secs < 3600 {
            prop_assert!(text.ends_with(" minutes"));
        } else {
            let hours = (secs as f64 / 3600.0).round() as i64;
            let expected = if hours == 1 { "1 hour".to_string() } else { format!("{hours} hours") };
            prop_assert_eq!(text, expected);
        }
    }
}
