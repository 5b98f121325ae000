//! Small text helpers shared by the normalizers and the renderer.
//!
//! The number parsers follow the forgiving rules browsers and template
//! engines apply to attribute strings: skip leading whitespace, read an
//! optional sign and as many digits as possible, ignore the rest.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>").expect("markup tag regex should compile")
});

/// Remove every `<...>` tag, keeping the text between them.
pub(crate) fn strip_tags(html: &str) -> Cow<'_, str> {
    MARKUP_TAG.replace_all(html, "")
}

/// Integer prefix of `raw`, or `None` when it has no leading digits.
pub(crate) fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Float prefix of `raw` (`"12.5px"` is 12.5), or `None` when it does not
/// start with a number.
pub(crate) fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
