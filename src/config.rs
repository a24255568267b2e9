//! Per-asset configuration loaded from environment variables.
//!
//! Every variable is optional and empty values count as unset:
//! - `STAKE_ASSET_SYMBOL` — display symbol
//! - `STAKE_ASSET_DECIMALS` — fractional digits of one whole token
//! - `STAKE_DISPLAY_FRAC_DIGITS` — digits shown in compact balances
//! - `STAKE_DUST_TOLERANCE` — allowed stake overshoot, in whole tokens
//! - `STAKE_LOCKUP_MIN_BALANCE` — storage reserve of a lockup account, in whole tokens

use crate::domain::{Amount, Error, U256};

pub const NATIVE_SYMBOL: &str = "NEAR";
pub const NATIVE_DECIMALS: u32 = 24;
pub const DEFAULT_DISPLAY_FRAC_DIGITS: u32 = 5;

const DUST_TOLERANCE_DIGITS: u32 = 5;
const LOCKUP_MIN_BALANCE_TOKENS: u8 = 35;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub symbol: String,
    pub decimals: u32,
    pub display_frac_digits: u32,
    pub dust_tolerance: Amount,
    pub lockup_min_balance: Amount,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            symbol: NATIVE_SYMBOL.to_string(),
            decimals: NATIVE_DECIMALS,
            display_frac_digits: DEFAULT_DISPLAY_FRAC_DIGITS,
            dust_tolerance: default_dust_tolerance(NATIVE_DECIMALS),
            lockup_min_balance: lockup_min_balance(NATIVE_DECIMALS).unwrap_or_default(),
        }
    }
}

/// `0.00001` of one whole token, or zero when `decimals` cannot express it.
pub fn default_dust_tolerance(decimals: u32) -> Amount {
    decimals
        .checked_sub(DUST_TOLERANCE_DIGITS)
        .and_then(Amount::pow10)
        .unwrap_or_default()
}

/// Minimum balance a lockup contract keeps for storage: 35 whole tokens at `decimals`.
pub fn lockup_min_balance(decimals: u32) -> Option<Amount> {
    let scale = Amount::pow10(decimals)?;
    scale
        .0
        .checked_mul(U256::from(LOCKUP_MIN_BALANCE_TOKENS))
        .map(Amount)
}

/// Loads the asset configuration, starting from the native token defaults.
///
/// # Errors
///
/// Returns [`Error::Config`] if a numeric variable does not parse.
pub fn fetch_config() -> Result<AssetConfig, Error> {
    let mut config = AssetConfig::default();

    if let Some(symbol) = non_empty_var("STAKE_ASSET_SYMBOL") {
        config.symbol = symbol;
    }

    if let Some(decimals) = non_empty_var("STAKE_ASSET_DECIMALS") {
        config.decimals = parse_digits("STAKE_ASSET_DECIMALS", &decimals)?;
        config.lockup_min_balance = lockup_min_balance(config.decimals).ok_or_else(|| {
            Error::Config(format!(
                "STAKE_ASSET_DECIMALS is too large: {}",
                config.decimals
            ))
        })?;
        config.dust_tolerance = default_dust_tolerance(config.decimals);
    }

    if let Some(digits) = non_empty_var("STAKE_DISPLAY_FRAC_DIGITS") {
        config.display_frac_digits = parse_digits("STAKE_DISPLAY_FRAC_DIGITS", &digits)?;
    }

    if let Some(dust) = non_empty_var("STAKE_DUST_TOLERANCE") {
        config.dust_tolerance = parse_tokens("STAKE_DUST_TOLERANCE", &dust, config.decimals)?;
    }

    if let Some(min) = non_empty_var("STAKE_LOCKUP_MIN_BALANCE") {
        config.lockup_min_balance =
            parse_tokens("STAKE_LOCKUP_MIN_BALANCE", &min, config.decimals)?;
    }

    Ok(config)
}

fn parse_digits(name: &str, value: &str) -> Result<u32, Error> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("{name} is not a digit count: {value}")))
}

fn parse_tokens(name: &str, value: &str, decimals: u32) -> Result<Amount, Error> {
    Amount::parse_decimal(value, decimals)
        .map_err(|_| Error::Config(format!("{name} is not a token amount: {value}")))
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "STAKE_ASSET_SYMBOL",
        "STAKE_ASSET_DECIMALS",
        "STAKE_DISPLAY_FRAC_DIGITS",
        "STAKE_DUST_TOLERANCE",
        "STAKE_LOCKUP_MIN_BALANCE",
    ];

    /// Helper that sets the given vars (clearing the rest), runs `f`, then restores originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
        let _guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let originals: Vec<(&str, Option<String>)> =
            VARS.iter().map(|k| (*k, std::env::var(k).ok())).collect();

        for k in VARS {
            let value = vars.iter().find(|(name, _)| *name == k).map(|(_, v)| *v);
            // SAFETY: serialized by LOCK; no other test reads these variables.
            unsafe {
                match value {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn native_defaults() {
        let config = AssetConfig::default();
        assert_eq!(config.decimals, 24);
        assert_eq!(config.dust_tolerance, Amount::from(10_000_000_000_000_000_000u128));
        assert_eq!(
            config.lockup_min_balance,
            Amount::parse_decimal("35", 24).unwrap()
        );
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&[], || {
            assert_eq!(fetch_config().unwrap(), AssetConfig::default());
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(&[("STAKE_ASSET_SYMBOL", ""), ("STAKE_ASSET_DECIMALS", "")], || {
            assert_eq!(fetch_config().unwrap(), AssetConfig::default());
        });
    }

    #[test]
    fn decimals_rescale_dust_tolerance() {
        with_env(
            &[("STAKE_ASSET_SYMBOL", "TKN"), ("STAKE_ASSET_DECIMALS", "8")],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.symbol, "TKN");
                assert_eq!(config.dust_tolerance, Amount::from(1_000u128));
            },
        );
    }

    #[test]
    fn decimals_rescale_lockup_reserve() {
        with_env(&[("STAKE_ASSET_DECIMALS", "8")], || {
            let config = fetch_config().unwrap();
            assert_eq!(
                config.lockup_min_balance,
                Amount::parse_decimal("35", 8).unwrap()
            );
        });
        with_env(
            &[
                ("STAKE_ASSET_DECIMALS", "8"),
                ("STAKE_LOCKUP_MIN_BALANCE", "1.5"),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.lockup_min_balance, Amount::from(150_000_000u128));
            },
        );
    }

    #[test]
    fn explicit_dust_tolerance_uses_configured_decimals() {
        with_env(
            &[
                ("STAKE_ASSET_DECIMALS", "6"),
                ("STAKE_DUST_TOLERANCE", "0.01"),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.dust_tolerance, Amount::from(10_000u128));
            },
        );
    }

    #[test]
    fn rejects_garbage() {
        with_env(&[("STAKE_ASSET_DECIMALS", "many")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("STAKE_ASSET_DECIMALS"));
        });
        with_env(&[("STAKE_DUST_TOLERANCE", "-1")], || {
            assert!(matches!(fetch_config(), Err(Error::Config(_))));
        });
        with_env(&[("STAKE_ASSET_DECIMALS", "90")], || {
            assert!(matches!(fetch_config(), Err(Error::Config(_))));
        });
    }

    #[test]
    fn small_decimals_have_no_dust() {
        assert_eq!(default_dust_tolerance(2), Amount::ZERO);
        assert_eq!(default_dust_tolerance(5), Amount::from(1u128));
        assert_eq!(lockup_min_balance(0), Some(Amount::from(35u128)));
        assert_eq!(lockup_min_balance(77), None);
    }
}
