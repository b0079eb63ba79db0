/// Strip ASCII punctuation from both ends of a token. Interior punctuation is kept.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Normalize raw tokens into index terms: edge punctuation stripped, empties dropped, lowercased.
/// Order and duplicates are preserved.
pub fn normalize<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|tok| {
            let stripped = strip_punctuation(tok.as_ref());
            if stripped.is_empty() { None } else { Some(stripped.to_lowercase()) }
        })
        .collect()
}

/// Whitespace-split a line and normalize the pieces.
pub fn tokenize_line(line: &str) -> Vec<String> {
    normalize(line.split_whitespace())
}
