//! Exact decimal numerals backed by arbitrary-precision integers.

use num_bigint::{BigInt, Sign};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when an operand string is not a numeral.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseDecimalError {
    #[error("numeral has no digits")]
    Empty,

    #[error("unexpected character '{0}' in numeral")]
    InvalidCharacter(char),

    #[error("numeral contains more than one decimal point")]
    MultipleDecimalPoints,
}

/// A decimal number `mantissa / 10^scale`.
///
/// Values are kept normalized: no trailing fractional zeros and zero always
/// has scale 0. Structural equality is therefore numeric equality.
///
/// # Example
///
/// ```rust
/// use keycalc::number::Decimal;
///
/// let a: Decimal = "0.1".parse().unwrap();
/// let b: Decimal = "0.2".parse().unwrap();
/// assert_eq!(a.add(&b).to_string(), "0.3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    mantissa: BigInt,
    scale: u32,
}

fn ten_pow(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

impl Decimal {
    fn new(mantissa: BigInt, scale: u32) -> Self {
        let mut value = Self { mantissa, scale };
        value.normalize();
        value
    }

    fn normalize(&mut self) {
        let ten = BigInt::from(10u32);
        while self.scale > 0 && (&self.mantissa % &ten).sign() == Sign::NoSign {
            self.mantissa /= &ten;
            self.scale -= 1;
        }
        if self.is_zero() {
            self.scale = 0;
        }
    }

    /// Rescale both operands to a common scale.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(other.scale);
        let lhs = &self.mantissa * ten_pow(scale - self.scale);
        let rhs = &other.mantissa * ten_pow(scale - other.scale);
        (lhs, rhs, scale)
    }

    pub fn one() -> Self {
        Self {
            mantissa: BigInt::from(1u32),
            scale: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.sign() == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    /// True when the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.scale == 0
    }

    /// Significant decimal digits of the mantissa; zero has one.
    pub fn digit_count(&self) -> u64 {
        self.mantissa.magnitude().to_str_radix(10).len() as u64
    }

    /// Lower bound on the significant digits of `self^exponent`, computed
    /// without raising.
    pub fn min_power_digits(&self, exponent: u32) -> u64 {
        let bits = self.mantissa.bits();
        if bits <= 1 {
            return 1;
        }
        let log10 = (bits - 1) as f64 * f64::from(exponent) * std::f64::consts::LOG10_2;
        log10 as u64 + 1
    }

    pub fn add(&self, other: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned(other);
        Self::new(lhs + rhs, scale)
    }

    pub fn sub(&self, other: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned(other);
        Self::new(lhs - rhs, scale)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::new(&self.mantissa * &other.mantissa, self.scale + other.scale)
    }

    /// Divide, rounding half away from zero to `precision` fractional digits.
    ///
    /// Returns `None` when `other` is zero.
    pub fn checked_div(&self, other: &Self, precision: u32) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let numerator = &self.mantissa * ten_pow(other.scale + precision);
        let denominator = &other.mantissa * ten_pow(self.scale);

        let mut quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;
        let twice_remainder = remainder.magnitude().clone() * 2u32;
        if twice_remainder >= *denominator.magnitude() {
            if numerator.sign() == denominator.sign() {
                quotient += 1u32;
            } else {
                quotient -= 1u32;
            }
        }
        Some(Self::new(quotient, precision))
    }

    /// Truncated remainder; the result has the sign of `self`.
    ///
    /// Returns `None` when `other` is zero.
    pub fn checked_rem(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let (lhs, rhs, scale) = self.aligned(other);
        Some(Self::new(lhs % rhs, scale))
    }

    /// Raise to a non-negative integer power.
    ///
    /// Returns `None` if the resulting scale does not fit in a `u32`.
    pub fn checked_powi(&self, exponent: u32) -> Option<Self> {
        let scale = self.scale.checked_mul(exponent)?;
        Some(Self::new(self.mantissa.pow(exponent), scale))
    }

    /// The value as a `u64`, if it is a non-negative integer in range.
    pub fn to_u64(&self) -> Option<u64> {
        if !self.is_integer() {
            return None;
        }
        u64::try_from(&self.mantissa).ok()
    }

    /// The value as an `i64`, if it is an integer in range.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        i64::try_from(&self.mantissa).ok()
    }

    /// Nearest `f64`; values beyond its range become infinite.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// Exact decimal expansion of a finite `f64`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        format!("{value}").parse().ok()
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let mut digits = String::with_capacity(body.len());
        let mut scale = 0u32;
        let mut seen_point = false;
        for c in body.chars() {
            match c {
                '0'..='9' => {
                    digits.push(c);
                    if seen_point {
                        scale += 1;
                    }
                }
                '.' if seen_point => return Err(ParseDecimalError::MultipleDecimalPoints),
                '.' => seen_point = true,
                other => return Err(ParseDecimalError::InvalidCharacter(other)),
            }
        }
        if digits.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseDecimalError::Empty)?;
        let mantissa = if negative { -magnitude } else { magnitude };
        Ok(Self::new(mantissa, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        let digits = self.mantissa.magnitude().to_string();
        if self.scale == 0 {
            return f.write_str(&digits);
        }

        let scale = self.scale as usize;
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{whole}.{fraction}")
    }
}
