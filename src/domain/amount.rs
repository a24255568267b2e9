use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uint::construct_uint;

use crate::domain::Error;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

/// A token quantity in the chain's minimal unit (yocto for the native token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(pub U256);

impl Amount {
    pub const ZERO: Amount = Amount(U256([0; 4]));

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `10^exp` in minimal units, `None` past the integer width.
    pub fn pow10(exp: u32) -> Option<Self> {
        let mut value = U256::one();
        for _ in 0..exp {
            value = value.checked_mul(U256::from(10u8))?;
        }
        Some(Self(value))
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn saturating_add(self, rhs: Amount) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Sums the amounts, failing instead of wrapping.
    pub fn sum<I>(amounts: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| {
                acc.checked_add(amount).ok_or(Error::AmountOverflow)
            })
    }

    /// Converts a human decimal string (`"1.5"`, `".25"`, `"10"`) into minimal units.
    ///
    /// More fractional digits than `decimals` allows is a format error; nothing is
    /// rounded.
    pub fn parse_decimal(entry: &str, decimals: u32) -> Result<Self, Error> {
        let invalid = || Error::InvalidAmountFormat(entry.to_string());

        if !is_decimal_string(entry) {
            return Err(invalid());
        }

        let (int_part, frac_part) = match entry.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (entry, ""),
        };
        if frac_part.len() > decimals as usize {
            return Err(invalid());
        }

        let mut digits = String::with_capacity(int_part.len() + decimals as usize);
        digits.push_str(int_part);
        digits.push_str(frac_part);
        for _ in frac_part.len()..decimals as usize {
            digits.push('0');
        }

        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        U256::from_dec_str(trimmed).map(Self).map_err(|_| invalid())
    }
}

/// Strict decimal grammar: `[0-9]*(\.[0-9]+)?`, non-empty, no sign, exponent or separators.
pub fn is_decimal_string(entry: &str) -> bool {
    let (int_part, frac_part) = match entry.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (entry, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    match frac_part {
        Some(frac) => !frac.is_empty() && all_digits(int_part) && all_digits(frac),
        None => !int_part.is_empty() && all_digits(int_part),
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for Amount {
    type Err = Error;

    /// Parses a base-10 minimal-unit integer, the wire form of chain queries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAmountFormat(s.to_string()));
        }
        U256::from_dec_str(s)
            .map(Self)
            .map_err(|_| Error::InvalidAmountFormat(s.to_string()))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Bare JSON numbers only up to `u64`; larger amounts travel as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(s) => s
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("Invalid amount format: {}", s))),
            RawAmount::Number(n) => Ok(Amount::from(u128::from(n))),
        }
    }
}
