use serde_json::Value;

/// Scale for two-decimal currency values.
const CENTS_PER_UNIT: f64 = 100.0;

/// Absorbs binary representation error so `1.005` rounds like the decimal it
/// was written as.
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Rounds to two decimals, ties away from zero (half-up for the non-negative
/// amounts the ledger holds).
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scaled = value * CENTS_PER_UNIT;
    let nudged = scaled + scaled.signum() * ROUNDING_TOLERANCE;
    nudged.round() / CENTS_PER_UNIT
}

/// Reads a stored amount that may be a JSON number or a decimal string.
///
/// Returns `None` for anything that is missing, unparsable, or not finite;
/// callers coerce that to zero.
pub fn parse_amount(value: Option<&Value>) -> Option<f64> {
    let amount = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    amount.is_finite().then_some(amount)
}
