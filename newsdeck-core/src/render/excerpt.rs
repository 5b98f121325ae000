use crate::text::strip_tags;

/// Cut `text` to its first `limit` whitespace-separated words, appending
/// `more` only when something was cut. Markup is removed first so a tag never
/// counts as a word or gets cut in half.
pub fn trim_words(text: &str, limit: usize, more: &str) -> String {
    let plain = strip_tags(text);
    let words: Vec<&str> = plain.split_whitespace().collect();
    if words.len() > limit {
        let mut trimmed = words[..limit].join(" ");
        trimmed.push_str(more);
        trimmed
    } else {
        words.join(" ")
    }
}
