// crates/domain/src/analytics/radix.rs
use line_tools_shared_kernel::{DomainError, DomainResult};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Render `number` in `radix` (2..=16) by repeated division, most significant digit first.
///
/// Negative numbers are rendered as `-` followed by the digits of the magnitude.
/// Zero is `"0"`; there is no padding.
///
/// # Errors
/// Returns [`DomainError::InvalidRadix`] for a radix outside `2..=16`.
pub fn to_radix(number: i64, radix: u32) -> DomainResult<String> {
    if !(2..=16).contains(&radix) {
        return Err(DomainError::InvalidRadix { radix });
    }
    if number == 0 {
        return Ok("0".to_owned());
    }

    // unsigned_abs covers i64::MIN, whose magnitude has no i64 representation
    let mut n = number.unsigned_abs();
    let base = u64::from(radix);
    let mut digits = Vec::new();
    while n > 0 {
        let remainder = (n % base) as usize;
        digits.push(DIGITS[remainder]);
        n /= base;
    }
    if number < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    // only ASCII digits and '-' were pushed
    Ok(digits.into_iter().map(char::from).collect())
}

pub fn to_binary(number: i64) -> String {
    render(number, 2)
}

pub fn to_hex(number: i64) -> String {
    render(number, 16)
}

fn render(number: i64, radix: u32) -> String {
    match to_radix(number, radix) {
        Ok(text) => text,
        Err(err) => unreachable!("fixed radix {radix} rejected: {err}"),
    }
}
