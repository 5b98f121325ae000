use newsdeck_model::{AttrValue, DEFAULT_COUNT};
use tracing::debug;

fn as_positive_count(raw: &AttrValue) -> Option<u32> {
    let parsed = match raw {
        AttrValue::Int(n) => u32::try_from(*n).ok(),
        AttrValue::Float(f) if f.is_finite() && *f >= 0.0 => {
            u32::try_from(f.trunc() as i64).ok()
        }
        AttrValue::Str(s) => {
            let digits = s.trim();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse::<u32>().ok()
        }
        _ => None,
    };
    parsed.filter(|n| *n > 0)
}

/// Positive item count, or [`DEFAULT_COUNT`] when `raw` is zero, negative,
/// out of range or not a number.
pub fn normalize_count(raw: &AttrValue) -> u32 {
    as_positive_count(raw).unwrap_or_else(|| {
        debug!(?raw, default = DEFAULT_COUNT, "count fell back to default");
        DEFAULT_COUNT
    })
}

/// Cards per carousel step. Unset means "same as `count`"; anything else is
/// normalized like a count.
pub fn normalize_visible_posts(raw: &AttrValue, count: u32) -> u32 {
    if raw.is_blank() {
        return count.max(1);
    }
    normalize_count(raw)
}

/// Strict truthiness: only `true`, `"true"`, `"1"` and numeric 1 count.
pub fn normalize_boolean(raw: &AttrValue) -> bool {
    match raw {
        AttrValue::Bool(b) => *b,
        AttrValue::Str(s) => s == "true" || s == "1",
        AttrValue::Int(n) => *n == 1,
        AttrValue::Float(f) => *f == 1.0,
        AttrValue::Null => false,
    }
}
