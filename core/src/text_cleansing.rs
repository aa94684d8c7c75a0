use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "python")]
use pyo3::prelude::*;

static NON_ASCII_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").expect("non-ascii pattern is valid"));
static NON_WORD_OR_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]+").expect("word/space pattern is valid"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(www\.\S+)|(https?://\S+)").expect("url pattern is valid"));
static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"  +").expect("space run pattern is valid"));
static NON_ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9a-zA-Z]+").expect("alphanumeric pattern is valid"));

/// Retweet marker, stripped wherever it occurs (no word boundaries).
pub const RETWEET_MARKER: &str = "rt";
/// Mention placeholder, stripped wherever it occurs (no word boundaries).
pub const USER_MARKER: &str = "user";

/// Cleans free-form text down to ASCII letters, digits and single spaces.
///
/// The steps run in a fixed order and each one sees the output of the
/// previous one:
///
/// 1. drop non-ASCII characters
/// 2. drop anything that is not a letter, digit or whitespace
/// 3. newlines become spaces
/// 4. every `"rt"` becomes a space
/// 5. every `"user"` becomes a space
/// 6. URLs (`www.`, `http://`, `https://`) become a space
/// 7. runs of spaces collapse to one
/// 8. any remaining run of non-alphanumerics becomes one space
///
/// Leading and trailing spaces are kept. Step 2 already strips `.`, `:` and
/// `/`, so step 6 only fires on text that reaches it with those intact,
/// which in practice is never.
#[cfg_attr(feature = "python", pyfunction)]
pub fn normalize(text: &str) -> String {
    let text = NON_ASCII_RE.replace_all(text, "");
    let text = NON_WORD_OR_SPACE_RE.replace_all(&text, "");
    let text = text.replace('\n', " ");
    let text = text.replace(RETWEET_MARKER, " ");
    let text = text.replace(USER_MARKER, " ");
    let text = URL_RE.replace_all(&text, " ");
    let text = SPACE_RUN_RE.replace_all(&text, " ");
    NON_ALPHANUMERIC_RE.replace_all(&text, " ").into_owned()
}

/// Normalizes every row, keeping row order.
pub fn normalize_all<I, S>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter().map(|row| normalize(row.as_ref())).collect()
}

#[cfg(feature = "python")]
#[pymodule]
pub fn cleansing(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    Ok(())
}
