//! Text normalization helpers.

/// Collapse whitespace runs to single spaces and trim both ends.
///
/// Scraped text arrives with newlines and padding runs. The classifier never
/// normalizes implicitly; callers opt in before matching.
pub fn normalize_whitespace(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(word);
    }

    output
}
