//! Binary evaluation and single-operand functions over [`Decimal`].

use crate::builder::CalculatorConfig;
use crate::machine::error::CalcError;
use crate::machine::token::Operator;
use crate::number::{factorial, Decimal};
use num_bigint::BigInt;

/// Integer exponents up to this magnitude are raised exactly.
pub(crate) const MAX_EXACT_EXPONENT: u64 = 1024;

/// Apply `op` to `lhs` and `rhs`.
///
/// `config.division_scale` bounds the fractional digits of quotients,
/// including the reciprocal taken for negative integer exponents. Results
/// longer than `config.max_result_digits` are [`CalcError::Overflow`].
pub(crate) fn apply(
    op: Operator,
    lhs: &Decimal,
    rhs: &Decimal,
    config: &CalculatorConfig,
) -> Result<Decimal, CalcError> {
    let result = match op {
        Operator::Add => lhs.add(rhs),
        Operator::Subtract => lhs.sub(rhs),
        Operator::Multiply => lhs.mul(rhs),
        Operator::Divide => lhs
            .checked_div(rhs, config.division_scale)
            .ok_or(CalcError::DivisionByZero)?,
        Operator::Modulo => lhs.checked_rem(rhs).ok_or(CalcError::DivisionByZero)?,
        Operator::Power => power(lhs, rhs, config)?,
    };
    within_limit(result, config.max_result_digits)
}

fn within_limit(value: Decimal, limit: u64) -> Result<Decimal, CalcError> {
    if value.digit_count() > limit {
        return Err(CalcError::Overflow { limit });
    }
    Ok(value)
}

fn power(
    base: &Decimal,
    exponent: &Decimal,
    config: &CalculatorConfig,
) -> Result<Decimal, CalcError> {
    let exact = exponent
        .to_i64()
        .filter(|n| n.unsigned_abs() <= MAX_EXACT_EXPONENT);

    if let Some(n) = exact {
        let magnitude = u32::try_from(n.unsigned_abs()).map_err(|_| CalcError::InvalidPower)?;
        let limit = config.max_result_digits;
        if base.min_power_digits(magnitude) > limit {
            return Err(CalcError::Overflow { limit });
        }
        let raised = base
            .checked_powi(magnitude)
            .ok_or(CalcError::InvalidPower)?;
        if n >= 0 {
            return Ok(raised);
        }
        let raised = within_limit(raised, limit)?;
        return Decimal::one()
            .checked_div(&raised, config.division_scale)
            .ok_or(CalcError::DivisionByZero);
    }

    Decimal::from_f64(base.to_f64().powf(exponent.to_f64())).ok_or(CalcError::InvalidPower)
}

/// `π` rounded to `decimals` fractional digits.
pub(crate) fn pi(decimals: u32) -> String {
    format!("{:.*}", decimals as usize, std::f64::consts::PI)
}

pub(crate) fn square(value: &Decimal, max_digits: u64) -> Result<Decimal, CalcError> {
    within_limit(value.mul(value), max_digits)
}

/// Exact factorial of a non-negative integer no larger than `max_input`.
pub(crate) fn factorial_of(value: &Decimal, max_input: u64) -> Result<Decimal, CalcError> {
    let n = value
        .to_u64()
        .filter(|n| *n <= max_input)
        .ok_or(CalcError::InvalidFactorialInput)?;
    Ok(Decimal::from(BigInt::from(factorial(n))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn eval(op: Operator, a: &str, b: &str) -> Result<String, CalcError> {
        apply(op, &dec(a), &dec(b), &CalculatorConfig::default()).map(|d| d.to_string())
    }

    const OVERFLOW: CalcError = CalcError::Overflow { limit: 1_000 };

    #[test]
    fn basic_operators() {
        assert_eq!(eval(Operator::Add, "12", "5").unwrap(), "17");
        assert_eq!(eval(Operator::Subtract, "2", "5").unwrap(), "-3");
        assert_eq!(eval(Operator::Multiply, "0.1", "3").unwrap(), "0.3");
        assert_eq!(eval(Operator::Divide, "10", "4").unwrap(), "2.5");
        assert_eq!(eval(Operator::Modulo, "-10", "3").unwrap(), "-1");
    }

    #[test]
    fn zero_divisor_fails_for_divide_and_modulo() {
        assert_eq!(eval(Operator::Divide, "5", "0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval(Operator::Modulo, "5", "0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn integer_powers() {
        assert_eq!(eval(Operator::Power, "2", "10").unwrap(), "1024");
        assert_eq!(eval(Operator::Power, "2", "-2").unwrap(), "0.25");
        assert_eq!(eval(Operator::Power, "0", "0").unwrap(), "1");
        assert_eq!(eval(Operator::Power, "-3", "3").unwrap(), "-27");
        assert_eq!(eval(Operator::Power, "0", "-1"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn fractional_powers_use_real_results() {
        assert_eq!(eval(Operator::Power, "4", "0.5").unwrap(), "2");
        assert_eq!(eval(Operator::Power, "-8", "0.5"), Err(CalcError::InvalidPower));
    }

    #[test]
    fn huge_powers_overflow_to_error() {
        assert_eq!(eval(Operator::Power, "10", "5000"), Err(CalcError::InvalidPower));
        assert_eq!(eval(Operator::Power, "1", "5000").unwrap(), "1");
    }

    #[test]
    fn large_exact_powers_overflow_before_raising() {
        assert_eq!(eval(Operator::Power, "99", "1024"), Err(OVERFLOW));
        assert_eq!(eval(Operator::Power, "10", "1000"), Err(OVERFLOW));
        assert_eq!(eval(Operator::Power, "99", "-1024"), Err(OVERFLOW));
        assert_eq!(eval(Operator::Power, "10", "999").unwrap().len(), 1_000);
    }

    #[test]
    fn products_beyond_the_digit_limit_overflow() {
        let big = "9".repeat(600);
        assert_eq!(eval(Operator::Multiply, &big, &big), Err(OVERFLOW));
        assert_eq!(eval(Operator::Multiply, &big, "2").unwrap().len(), 601);
    }

    #[test]
    fn pi_is_fixed_precision() {
        assert_eq!(pi(8), "3.14159265");
        assert_eq!(pi(2), "3.14");
    }

    #[test]
    fn square_is_exact() {
        assert_eq!(square(&dec("1.1"), 1_000).unwrap().to_string(), "1.21");
        assert_eq!(square(&dec("-4"), 1_000).unwrap().to_string(), "16");
    }

    #[test]
    fn square_respects_digit_limit() {
        assert_eq!(square(&dec("99"), 4).unwrap().to_string(), "9801");
        assert_eq!(square(&dec("100"), 4), Err(CalcError::Overflow { limit: 4 }));
    }

    #[test]
    fn factorial_domain() {
        assert_eq!(factorial_of(&dec("5"), 100).unwrap().to_string(), "120");
        assert_eq!(factorial_of(&dec("0"), 100).unwrap().to_string(), "1");
        assert_eq!(
            factorial_of(&dec("-1"), 100),
            Err(CalcError::InvalidFactorialInput)
        );
        assert_eq!(
            factorial_of(&dec("2.5"), 100),
            Err(CalcError::InvalidFactorialInput)
        );
        assert_eq!(
            factorial_of(&dec("101"), 100),
            Err(CalcError::InvalidFactorialInput)
        );
    }
}
