use crate::models::Record;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetRejected {
    #[error("target must be a number")]
    NotANumber,
    #[error("target must be greater than zero")]
    NotPositive,
    #[error("target is too large")]
    TooLarge,
}

pub fn increment(record: &mut Record) {
    record.count = record.count.saturating_add(1);
}

/// Returns false when the count is already zero.
pub fn decrement(record: &mut Record) -> bool {
    if record.count == 0 {
        return false;
    }
    record.count -= 1;
    true
}

/// Reads the leading integer of `raw`, the way a form field is read:
/// leading whitespace and an optional sign, then digits up to the first
/// non-digit. Only strictly positive values are accepted.
pub fn parse_target(raw: &str) -> Result<u64, TargetRejected> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(TargetRejected::NotANumber);
    }
    let digits = &rest[..digits_len];

    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(TargetRejected::NotPositive);
    }

    digits.parse::<u64>().map_err(|_| TargetRejected::TooLarge)
}

pub fn set_target(record: &mut Record, raw: &str) -> Result<u64, TargetRejected> {
    let target = parse_target(raw)?;
    record.target = target;
    Ok(target)
}
