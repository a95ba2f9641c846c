//! Decimal digit reversal.

/// Reverses the decimal digits of `value`.
///
/// Trailing zeros of the input become leading zeros of the reversal and are
/// dropped, so `reverse_digits(120) == Some(21)`. Returns `None` when the
/// reversal does not fit in an `i64`.
///
/// Negative inputs keep their sign (`-12` reverses to `-21`); the checker only
/// reverses values that already passed the natural-number test.
///
/// ```
/// use reversal_check::mirror::reverse_digits;
///
/// assert_eq!(reverse_digits(123), Some(321));
/// assert_eq!(reverse_digits(0), Some(0));
/// assert_eq!(reverse_digits(120), Some(21));
/// ```
#[must_use]
pub fn reverse_digits(value: i64) -> Option<i64> {
    let mut rest = value;
    let mut acc: i64 = 0;
    while rest != 0 {
        acc = acc.checked_mul(10)?.checked_add(rest % 10)?;
        rest /= 10;
    }
    Some(acc)
}
