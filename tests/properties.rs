use proptest::prelude::*;

use stake_balance_engine::display::format_amount;
use stake_balance_engine::domain::StakingTotals;
use stake_balance_engine::{Amount, RawBalanceSnapshot, StakingAction, aggregate, validate};

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn snapshot(staked: u128, available: u128, storage: u128) -> RawBalanceSnapshot {
    RawBalanceSnapshot {
        account: StakingTotals {
            total_available: Some(Amount::ZERO),
            total_pending: Some(Amount::ZERO),
            total_staked: Some(Amount::from(staked)),
        },
        balance_available: Some(Amount::from(available)),
        state_staked: Some(Amount::from(storage)),
        staked_balance_main_account: Some(Amount::from(staked)),
        ..Default::default()
    }
}

/// Syntactically valid entries with at most `decimals` fractional digits.
fn decimal_entry(decimals: usize) -> impl Strategy<Value = String> {
    (
        "[0-9]{0,30}",
        proptest::option::of(proptest::string::string_regex(&format!("[0-9]{{1,{decimals}}}")).unwrap()),
    )
        .prop_filter_map("needs at least one digit", |(int, frac)| match frac {
            Some(frac) => Some(format!("{int}.{frac}")),
            None if !int.is_empty() => Some(int),
            None => None,
        })
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn wallet_balance_is_exact_sum(a in any::<u128>(), b in any::<u128>(), c in any::<u128>()) {
        let profile = aggregate(&snapshot(a, b, c)).unwrap();
        let expected = Amount::from(a)
            .checked_add(Amount::from(b))
            .and_then(|sum| sum.checked_add(Amount::from(c)))
            .unwrap();
        prop_assert_eq!(profile.wallet_balance.wallet_balance, expected);
    }

    #[test]
    fn lockup_absent_without_flag(total in any::<u64>(), locked in any::<u64>()) {
        let mut raw = snapshot(1, 2, 3);
        raw.total_balance = Some(Amount::from(u128::from(total)));
        raw.locked_amount = Some(Amount::from(u128::from(locked)));
        raw.lockup_account = Some(StakingTotals::default());
        let profile = aggregate(&raw).unwrap();
        prop_assert!(profile.lockup_balance.is_none());
        prop_assert!(!profile.lockup_id_exists());
    }

    #[test]
    fn full_precision_format_round_trips(entry in decimal_entry(24)) {
        let parsed = Amount::parse_decimal(&entry, 24).unwrap();
        let formatted = format_amount(parsed, 24, 24);
        prop_assert_eq!(Amount::parse_decimal(&formatted, 24).unwrap(), parsed);
    }

    #[test]
    fn unstake_never_exceeds_position(staked in any::<u64>(), requested in any::<u64>()) {
        let verdict = validate(
            &requested.to_string(),
            Amount::from(u128::MAX),
            StakingAction::Unstake,
            Amount::from(u128::from(staked)),
            0,
        );
        prop_assert_eq!(verdict.has_sufficient_source_balance, requested <= staked);
        prop_assert_eq!(verdict.is_action_allowed, requested > 0 && requested <= staked);
    }

    #[test]
    fn malformed_entries_are_never_allowed(entry in "[0-9]*[-+eE, ][0-9.]*") {
        let verdict = validate(&entry, Amount::from(u128::MAX), StakingAction::Stake, Amount::ZERO, 24);
        prop_assert!(!verdict.is_decimal_format_valid);
        prop_assert!(!verdict.is_action_allowed);
        prop_assert!(verdict.parsed_amount_minimal_units.is_none());
    }
}
