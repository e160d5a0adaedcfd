//! Conversion between Bulgarian Leva and Euro at the fixed legal rate.
//!
//! The engine is a pure function: every call returns a [`ConversionResult`],
//! invalid amounts included. Rounding follows the statutory third-digit rule
//! (see [`round_to_two_decimals`]) and deliberately keeps binary
//! floating-point semantics.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Official number of leva per euro, fixed by law.
pub const FIXED_RATE: f64 = 1.95583;

/// Explanation attached to every invalid result.
pub const INVALID_AMOUNT_MESSAGE: &str = "please enter a valid amount";

/// A currency supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Bgn,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Bgn => "BGN",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionDirection {
    #[default]
    BgnToEur,
    EurToBgn,
}

impl ConversionDirection {
    /// Currency the amount is given in.
    pub fn source(&self) -> Currency {
        match self {
            ConversionDirection::BgnToEur => Currency::Bgn,
            ConversionDirection::EurToBgn => Currency::Eur,
        }
    }

    /// Currency the result is expressed in.
    pub fn target(&self) -> Currency {
        match self {
            ConversionDirection::BgnToEur => Currency::Eur,
            ConversionDirection::EurToBgn => Currency::Bgn,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            ConversionDirection::BgnToEur => ConversionDirection::EurToBgn,
            ConversionDirection::EurToBgn => ConversionDirection::BgnToEur,
        }
    }

    /// Direction whose amount is given in `currency`.
    pub fn from_source(currency: Currency) -> Self {
        match currency {
            Currency::Bgn => ConversionDirection::BgnToEur,
            Currency::Eur => ConversionDirection::EurToBgn,
        }
    }

    fn apply_rate(&self, amount: f64) -> f64 {
        match self {
            ConversionDirection::BgnToEur => amount / FIXED_RATE,
            ConversionDirection::EurToBgn => amount * FIXED_RATE,
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source(), self.target())
    }
}

impl FromStr for ConversionDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "BGN_TO_EUR" => Ok(ConversionDirection::BgnToEur),
            "EUR_TO_BGN" => Ok(ConversionDirection::EurToBgn),
            other => anyhow::bail!("Unknown conversion direction: {other}"),
        }
    }
}

/// Outcome of the third-digit rounding rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounding {
    pub rounded: f64,
    pub third_digit: u8,
}

impl Rounding {
    pub fn is_up(&self) -> bool {
        self.third_digit >= 5
    }
}

/// Rounds `value` to two decimals by looking only at its third decimal digit.
///
/// The hundredths place is rounded up when the thousandths digit is 5 or
/// greater and truncated otherwise. The digit is read from `value * 1000`
/// in binary floating point, so `1.005` (stored as `1.00499…`) has a third
/// digit of 4.
pub fn round_to_two_decimals(value: f64) -> Rounding {
    // Saturating cast: NaN from a non-finite value maps to 0.
    let third_digit = ((value * 1000.0) % 10.0).floor() as u8;
    let rounded = if third_digit >= 5 {
        (value * 100.0).ceil() / 100.0
    } else {
        (value * 100.0).floor() / 100.0
    };
    Rounding {
        rounded,
        third_digit,
    }
}

/// Immutable record of one conversion attempt.
///
/// Fields are only readable; `rounded` and `third_digit` are always derived
/// from `raw` inside [`convert`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    input: f64,
    raw: f64,
    rounded: f64,
    third_digit: u8,
    direction: ConversionDirection,
    explanation: String,
    is_valid: bool,
}

impl ConversionResult {
    fn invalid(input: f64, direction: ConversionDirection) -> Self {
        Self {
            input,
            raw: 0.0,
            rounded: 0.0,
            third_digit: 0,
            direction,
            explanation: INVALID_AMOUNT_MESSAGE.to_string(),
            is_valid: false,
        }
    }

    pub fn input(&self) -> f64 {
        self.input
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn rounded(&self) -> f64 {
        self.rounded
    }

    pub fn third_digit(&self) -> u8 {
        self.third_digit
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

fn explain(rounding: &Rounding) -> String {
    if rounding.is_up() {
        format!("the third digit is {} ≥ 5, rounded up", rounding.third_digit)
    } else {
        format!("the third digit is {} < 5, rounded down", rounding.third_digit)
    }
}

/// Converts `amount` in the given direction.
///
/// Amounts that are not finite or not strictly positive produce an invalid
/// result carrying [`INVALID_AMOUNT_MESSAGE`]; this never fails.
pub fn convert(amount: f64, direction: ConversionDirection) -> ConversionResult {
    if !amount.is_finite() || amount <= 0.0 {
        debug!(amount, ?direction, "Rejected invalid amount");
        return ConversionResult::invalid(amount, direction);
    }

    let raw = direction.apply_rate(amount);
    let rounding = round_to_two_decimals(raw);
    debug!(
        amount,
        raw,
        rounded = rounding.rounded,
        third_digit = rounding.third_digit,
        ?direction,
        "Converted amount"
    );

    ConversionResult {
        input: amount,
        raw,
        rounded: rounding.rounded,
        third_digit: rounding.third_digit,
        direction,
        explanation: explain(&rounding),
        is_valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_AMOUNTS: [f64; 10] = [
        0.01, 0.5, 1.0, 1.95583, 7.77, 42.0, 123.45, 1000.0, 99_999.99, 1_000_000.0,
    ];

    fn assert_invalid(result: &ConversionResult) {
        assert!(!result.is_valid());
        assert_eq!(result.raw(), 0.0);
        assert_eq!(result.rounded(), 0.0);
        assert_eq!(result.third_digit(), 0);
        assert_eq!(result.explanation(), INVALID_AMOUNT_MESSAGE);
    }

    #[test]
    fn test_bgn_to_eur_rounds_up_on_nine() {
        let result = convert(100.0, ConversionDirection::BgnToEur);

        assert!(result.is_valid());
        assert_eq!(result.input(), 100.0);
        assert!((result.raw() - 51.129188).abs() < 1e-6);
        assert_eq!(result.third_digit(), 9);
        assert_eq!(result.rounded(), 51.13);
        assert_eq!(result.explanation(), "the third digit is 9 ≥ 5, rounded up");
        assert_eq!(result.direction(), ConversionDirection::BgnToEur);
    }

    #[test]
    fn test_eur_to_bgn_rounds_up_on_eight() {
        let result = convert(10.0, ConversionDirection::EurToBgn);

        assert!(result.is_valid());
        assert!((result.raw() - 19.5583).abs() < 1e-9);
        assert_eq!(result.third_digit(), 8);
        assert_eq!(result.rounded(), 19.56);
        assert_eq!(result.explanation(), "the third digit is 8 ≥ 5, rounded up");
    }

    #[test]
    fn test_exact_rate_rounds_down() {
        let result = convert(FIXED_RATE, ConversionDirection::BgnToEur);

        assert!(result.is_valid());
        assert_eq!(result.raw(), 1.0);
        assert_eq!(result.third_digit(), 0);
        assert_eq!(result.rounded(), 1.0);
        assert_eq!(result.explanation(), "the third digit is 0 < 5, rounded down");
    }

    #[test]
    fn test_zero_and_negative_are_invalid() {
        let zero = convert(0.0, ConversionDirection::BgnToEur);
        assert_invalid(&zero);
        assert_eq!(zero.input(), 0.0);

        let negative = convert(-5.0, ConversionDirection::BgnToEur);
        assert_invalid(&negative);
        assert_eq!(negative.input(), -5.0);
    }

    #[test]
    fn test_non_finite_amounts_are_invalid() {
        let nan = convert(f64::NAN, ConversionDirection::EurToBgn);
        assert_invalid(&nan);
        assert!(nan.input().is_nan());
        assert_eq!(nan.direction(), ConversionDirection::EurToBgn);

        assert_invalid(&convert(f64::INFINITY, ConversionDirection::BgnToEur));
        assert_invalid(&convert(f64::NEG_INFINITY, ConversionDirection::EurToBgn));
    }

    #[test]
    fn test_third_digit_uses_binary_representation() {
        // 1.005 is stored as 1.00499999...; the third digit reads as 4.
        let rounding = round_to_two_decimals(1.005);
        assert_eq!(rounding.third_digit, 4);
        assert_eq!(rounding.rounded, 1.0);
        assert!(!rounding.is_up());
    }

    #[test]
    fn test_rounding_only_looks_at_third_digit() {
        // 2.3449 has third digit 4 and is truncated, unlike half-up on the remainder.
        let rounding = round_to_two_decimals(2.3449);
        assert_eq!(rounding.third_digit, 4);
        assert_eq!(rounding.rounded, 2.34);

        let rounding = round_to_two_decimals(2.3451);
        assert_eq!(rounding.third_digit, 5);
        assert_eq!(rounding.rounded, 2.35);
    }

    #[test]
    fn test_rounding_of_overflowed_value_keeps_digit_in_range() {
        let rounding = round_to_two_decimals(f64::INFINITY);
        assert_eq!(rounding.third_digit, 0);
    }

    #[test]
    fn test_valid_results_are_close_to_raw() {
        for direction in [ConversionDirection::BgnToEur, ConversionDirection::EurToBgn] {
            for amount in SAMPLE_AMOUNTS {
                let result = convert(amount, direction);
                assert!(result.is_valid(), "{amount} should be valid");
                assert!(result.third_digit() <= 9);
                assert!(
                    (result.rounded() - result.raw()).abs() < 0.01,
                    "{amount} {direction}: {} vs {}",
                    result.rounded(),
                    result.raw()
                );
                let cents = result.rounded() * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_raw_round_trip_restores_amount() {
        for amount in SAMPLE_AMOUNTS {
            let to_eur = convert(amount, ConversionDirection::BgnToEur);
            let back = convert(to_eur.raw(), ConversionDirection::EurToBgn);
            assert!(
                (back.raw() - amount).abs() <= amount * 1e-12,
                "{amount} came back as {}",
                back.raw()
            );
        }
    }

    #[test]
    fn test_direction_parsing_and_currencies() {
        assert_eq!(
            "bgn-to-eur".parse::<ConversionDirection>().unwrap(),
            ConversionDirection::BgnToEur
        );
        assert_eq!(
            "EUR_TO_BGN".parse::<ConversionDirection>().unwrap(),
            ConversionDirection::EurToBgn
        );
        assert!("usd-to-eur".parse::<ConversionDirection>().is_err());

        let direction = ConversionDirection::EurToBgn;
        assert_eq!(direction.source(), Currency::Eur);
        assert_eq!(direction.target(), Currency::Bgn);
        assert_eq!(direction.reversed(), ConversionDirection::BgnToEur);
        assert_eq!(
            ConversionDirection::from_source(Currency::Bgn),
            ConversionDirection::BgnToEur
        );
        assert_eq!(direction.to_string(), "EUR → BGN");
    }

    #[test]
    fn test_result_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(convert(10.0, ConversionDirection::EurToBgn)).unwrap();
        assert_eq!(json["direction"], "EUR_TO_BGN");
        assert_eq!(json["thirdDigit"], 8);
        assert_eq!(json["isValid"], true);
        assert_eq!(json["rounded"], 19.56);

        let json = serde_json::to_value(convert(f64::NAN, ConversionDirection::BgnToEur)).unwrap();
        assert!(json["input"].is_null());
        assert_eq!(json["explanation"], INVALID_AMOUNT_MESSAGE);
    }
}
