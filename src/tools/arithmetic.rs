//! Arithmetic tools: `add` and `calculate_magic_amount`.

use crate::error::{ServerError, ServerResult};
use schemars::JsonSchema;
use serde::Deserialize;

/// Input for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddInput {
    /// First addend
    pub a: i64,
    /// Second addend
    pub b: i64,
}

/// Input for the calculate_magic_amount tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MagicAmountInput {
    /// Amounts to multiply together, left to right. Must not be empty.
    pub amounts: Vec<i64>,
}

/// Sum of two integers. Overflow is an input error rather than a wrap.
pub fn add(a: i64, b: i64) -> ServerResult<i64> {
    a.checked_add(b)
        .ok_or_else(|| ServerError::invalid_input(format!("{} + {} overflows a 64-bit integer", a, b)))
}

/// Product of all amounts, folded left to right.
///
/// An empty list has no product and is rejected, as is a product that does
/// not fit in 64 bits.
pub fn calculate_magic_amount(amounts: &[i64]) -> ServerResult<i64> {
    let (first, rest) = amounts
        .split_first()
        .ok_or_else(|| ServerError::invalid_input("amounts must contain at least one value"))?;

    rest.iter().try_fold(*first, |acc, &amount| {
        acc.checked_mul(amount).ok_or_else(|| {
            ServerError::invalid_input("magic amount overflows a 64-bit integer")
        })
    })
}
