//! Delay and duration resolution.
//!
//! Both functions are total: malformed configuration (negative, non-finite, missing) resolves to
//! `None` instead of failing the operation.

use crate::{Direction, ExplicitDuration, Stagger, StaggerEntry};

/// Returns the delay before an operation's target-state swap, or `None` to start immediately.
///
/// - `Fixed(s)` yields `s * index`.
/// - `PerDirection` applies the direction's entry the same way, or `None` if it has no entry.
/// - `Computed(f)` yields `f(index)`.
pub fn stagger_delay_ms(
    stagger: Option<&Stagger>,
    index: usize,
    direction: Direction,
) -> Option<u64> {
    match stagger? {
        Stagger::Fixed(value) => scaled(*value, index),
        Stagger::PerDirection(map) => match map.get(direction)? {
            StaggerEntry::Fixed(value) => scaled(*value, index),
            StaggerEntry::Computed(f) => f(index),
        },
        Stagger::Computed(f) => f(index),
    }
}

/// Returns the fixed transition length for `direction`, or `None` to wait for the
/// transition-end signal.
pub fn explicit_duration_ms(
    duration: Option<&ExplicitDuration>,
    direction: Direction,
) -> Option<u64> {
    let value = match duration? {
        ExplicitDuration::Fixed(value) => *value,
        ExplicitDuration::PerDirection(map) => *map.get(direction)?,
    };
    to_millis(value)
}

fn scaled(multiplier: f64, index: usize) -> Option<u64> {
    to_millis(multiplier * index as f64)
}

fn to_millis(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 {
        Some(value as u64)
    } else {
        None
    }
}

/// Parses the leading decimal number of `text`, ignoring leading whitespace and any trailing
/// unit suffix (`"150ms"` parses as `150`).
///
/// Returns `None` when `text` does not start with a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
