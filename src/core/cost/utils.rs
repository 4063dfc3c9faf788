//! Shared cost calculation helpers

/// Round a monetary amount to 2 decimal places, half-up
pub(crate) fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
