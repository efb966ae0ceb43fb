use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::cmp::Ordering;

use crate::constants::PROGRESS_DECIMAL_PRECISION;

const HUNDRED: Decimal = dec!(100);

/// `numerator / denominator * 100`, saturating to 0 or 100 when the exact
/// value does not fit in a `Decimal`.
fn percentage_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(if numerator <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            HUNDRED
        })
}

/// Completion percentage of a goal, always within `[0, 100]`.
///
/// * `target <= 0` is a degenerate goal and reports 0.
/// * `current < target` is treated as an increase goal: `current / target`.
/// * `current > target` is treated as a decrease goal measured from
///   `initial` (or `current` when no initial value exists): how much of the
///   distance from the start to the target has been covered.
/// * `current == target` is complete.
///
/// Never panics. The result is rounded to [`PROGRESS_DECIMAL_PRECISION`] places.
pub fn calculate_progress(target: Decimal, current: Decimal, initial: Option<Decimal>) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let raw = match target.cmp(&current) {
        Ordering::Greater => percentage_of(current, target).min(HUNDRED),
        Ordering::Less => {
            let start = initial.unwrap_or(current);
            if start <= target {
                HUNDRED
            } else {
                // start > target >= 0 and current > target, so neither
                // subtraction can overflow
                percentage_of(start - current, start - target)
            }
        }
        Ordering::Equal => HUNDRED,
    };

    raw.clamp(Decimal::ZERO, HUNDRED)
        .round_dp(PROGRESS_DECIMAL_PRECISION)
}
