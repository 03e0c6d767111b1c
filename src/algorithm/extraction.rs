//! Limitation code extraction
//!
//! An annotation field is a `;`-joined list of `CODE: free text` tokens. The
//! code is whatever precedes the first colon, or the whole token when there is
//! no colon.

use smallvec::SmallVec;

/// Codes extracted from a single field, borrowed from the field text
pub type CodeList<'a> = SmallVec<[&'a str; 8]>;

/// Split an annotation field into its limitation codes.
///
/// Codes come back in source order and are not deduplicated. An empty piece
/// (e.g. from a trailing `;` or a leading `:`) yields an empty code, which
/// callers are expected to discard. A missing field yields no codes.
#[must_use]
pub fn extract_codes(field: Option<&str>) -> CodeList<'_> {
    let Some(value) = field else {
        return CodeList::new();
    };
    value.split(';').map(normalize_code).collect()
}

/// Reduce a single `CODE: free text` token to its trimmed code
#[must_use]
pub fn normalize_code(token: &str) -> &str {
    let token = token.trim();
    token
        .split_once(':')
        .map_or(token, |(code, _)| code)
        .trim()
}

/// Codes of a field with empty codes dropped
pub fn non_empty_codes(field: Option<&str>) -> impl Iterator<Item = &str> {
    extract_codes(field).into_iter().filter(|code| !code.is_empty())
}
