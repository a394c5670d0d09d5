//! Text helpers.
//!
//! Every function borrows its input and returns newly allocated text. Whitespace means
//! the ASCII blank set: space, `\t`, `\n`, `\v`, `\f` and `\r`.

/// Same set as C's `isspace` in the default locale. `char::is_ascii_whitespace` skips `\v`.
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

/// Strips whitespace from both ends. Interior whitespace is kept as is.
pub fn trim(text: &str) -> String {
    text.trim_matches(is_space).to_string()
}

pub fn ltrim(text: &str) -> String {
    text.trim_start_matches(is_space).to_string()
}

pub fn rtrim(text: &str) -> String {
    text.trim_end_matches(is_space).to_string()
}

/// ASCII-only; other characters pass through untouched.
pub fn to_upper(text: &str) -> String {
    text.to_ascii_uppercase()
}

pub fn to_lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Splits `text` on every `delimiter`, keeping only non-empty tokens.
///
/// Runs of delimiters and delimiters at either end never yield empty entries, so
/// `split("a,,b", ',')` is `["a", "b"]` and `split("", ',')` is empty. Joining the result
/// back restores the input only when it had neither.
pub fn split(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Concatenates `parts` in order with `delimiter` between neighbours.
pub fn join<S: AsRef<str>>(parts: &[S], delimiter: &str) -> String {
    let mut iter = parts.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut joined = String::from(first.as_ref());
    for part in iter {
        joined.push_str(delimiter);
        joined.push_str(part.as_ref());
    }
    joined
}

/// An empty prefix always matches.
pub fn starts_with(text: &str, prefix: &str) -> bool {
    text.starts_with(prefix)
}

/// An empty suffix always matches.
pub fn ends_with(text: &str, suffix: &str) -> bool {
    text.ends_with(suffix)
}

/// Replaces every non-overlapping occurrence of `from`, scanning left to right.
///
/// Scanning resumes right after each inserted `to`, so replacements never match again
/// within the same pass: `replace_all("aaa", "aa", "b")` is `"ba"`. An empty `from`
/// returns the input unchanged.
pub fn replace_all(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    text.replace(from, to)
}
