//! Token and parameter parsing shared by most structured header values.
//!
//! A structured value consists of an optional primary token followed by
//! `key=value` parameters, all separated by either `;` or `,`:
//!
//! ```text
//! text/html; charset="utf-8"; level=1
//! realm="example", nonce="abc", stale=true
//! ```

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use super::csv::split_unquoted;

/// Parameters of a structured header value.
///
/// Keys are lower-cased for lookup, iteration and equality, while formatting
/// writes them the way they were given. Insertion order is kept for
/// formatting, while equality ignores it.
#[derive(Debug, Clone, Default)]
pub struct Params(IndexMap<String, (String, String)>);

impl Params {
    /// Create an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a parameter by (case-insensitive) key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key.to_ascii_lowercase().as_str())
            .map(|(_, value)| value.as_str())
    }

    /// Check if a parameter exists by (case-insensitive) key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a parameter, returning the value it replaced.
    ///
    /// An empty value stands for a bare (valueless) parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        self.0
            .insert(key.to_ascii_lowercase(), (key, value.into()))
            .map(|(_, value)| value)
    }

    /// Remove a parameter by (case-insensitive) key.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0
            .shift_remove(key.to_ascii_lowercase().as_str())
            .map(|(_, value)| value)
    }

    /// Amount of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the parameters with lower-cased keys, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, (_, v))| (k.as_str(), v.as_str()))
    }

    /// Write the parameters delimited by `sep`.
    ///
    /// Values which are a valid token are written as-is unless `force_quote`
    /// returns `true` for their (lower-cased) key, all others are written as
    /// quoted strings.
    pub(crate) fn fmt_delimited<W: fmt::Write>(
        &self,
        w: &mut W,
        sep: &str,
        force_quote: impl Fn(&str) -> bool,
    ) -> fmt::Result {
        self.fmt_delimited_with(w, sep, force_quote, |_| false)
    }

    /// Like [`Params::fmt_delimited`], but a bare parameter is written as
    /// `key=""` when `force_value` returns `true` for its position.
    pub(crate) fn fmt_delimited_with<W: fmt::Write>(
        &self,
        w: &mut W,
        sep: &str,
        force_quote: impl Fn(&str) -> bool,
        force_value: impl Fn(usize) -> bool,
    ) -> fmt::Result {
        for (index, (lower, (key, value))) in self.0.iter().enumerate() {
            if index > 0 {
                w.write_str(sep)?;
            }
            w.write_str(key)?;
            if value.is_empty() && !force_value(index) {
                continue;
            }
            w.write_char('=')?;
            if !force_quote(lower.as_str()) && is_token(value) {
                w.write_str(value)?;
            } else {
                write_quoted(w, value)?;
            }
        }
        Ok(())
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .all(|(key, (_, value))| other.0.get(key).is_some_and(|(_, v)| v == value))
    }
}

impl Eq for Params {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

/// Split a raw value into its primary token and the parameters following it.
///
/// The token is everything before the first `sep` outside of a quoted string.
///
/// ```
/// use headwise::util::parse_token_params;
///
/// let (token, params) = parse_token_params("text/html; Charset=\"utf-8\"", ';');
/// assert_eq!(token, "text/html");
/// assert_eq!(params.get("charset"), Some("utf-8"));
/// ```
#[must_use]
pub fn parse_token_params(raw: &str, sep: char) -> (&str, Params) {
    let mut segments = split_unquoted(raw, sep);
    let token = segments.next().unwrap_or_default().trim();
    (token, segments.filter_map(parse_param).collect())
}

/// Parse a raw value consisting of parameters only.
#[must_use]
pub fn parse_params(raw: &str, sep: char) -> Params {
    split_unquoted(raw, sep).filter_map(parse_param).collect()
}

fn parse_param(segment: &str) -> Option<(String, String)> {
    let segment = segment.trim();
    let (key, value) = match segment.split_once('=') {
        Some((key, value)) => (key.trim(), unquote(value.trim())),
        None => (segment, Cow::Borrowed("")),
    };
    if key.is_empty() {
        if !segment.is_empty() {
            tracing::trace!("dropping parameter without a name: '{segment}'");
        }
        return None;
    }
    Some((key.to_owned(), value.into_owned()))
}

/// Returns `true` if `s` is a non-empty token as defined in RFC 9110 5.6.2.
#[must_use]
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_tchar)
}

const fn is_tchar(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'\''
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~'
    ) || b.is_ascii_alphanumeric()
}

/// Strip surrounding double quotes, undoing backslash escapes within.
///
/// Values which are not quoted are returned unchanged.
#[must_use]
pub fn unquote(s: &str) -> Cow<'_, str> {
    let Some(inner) = s
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    else {
        return Cow::Borrowed(s);
    };
    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Wrap `s` in double quotes, escaping quotes and backslashes.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    // writing into a String cannot fail
    let _ = write_quoted(&mut out, s);
    out
}

pub(crate) fn write_quoted<W: fmt::Write>(w: &mut W, s: &str) -> fmt::Result {
    w.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            w.write_char('\\')?;
        }
        w.write_char(c)?;
    }
    w.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_and_params() {
        let (token, params) = parse_token_params(r#" attachment; FileName="a;b.txt" ; size=10"#, ';');
        assert_eq!(token, "attachment");
        assert_eq!(params.get("filename"), Some("a;b.txt"));
        assert_eq!(params.get("SIZE"), Some("10"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn bare_params_have_empty_value() {
        let params = parse_params("secure, httponly=, =dropped, ", ',');
        assert_eq!(params.get("secure"), Some(""));
        assert_eq!(params.get("httponly"), Some(""));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn unquote_undoes_escapes() {
        assert_eq!(unquote(r#""a \"b\" \\ c""#), r#"a "b" \ c"#);
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn quote_roundtrip() {
        let raw = r#"say "hi" \o/"#;
        assert_eq!(unquote(&quote(raw)), raw);
    }

    #[test]
    fn equality_ignores_order() {
        let a = Params::from([("a", "1"), ("b", "2")]);
        let b = Params::from([("B", "2"), ("A", "1")]);
        assert_eq!(a, b);
        assert_ne!(a, Params::from([("a", "1"), ("b", "3")]));
    }

    #[test]
    fn keys_keep_their_casing() {
        let mut params = parse_params("SameSite=Lax; Partitioned", ';');
        assert_eq!(params.get("samesite"), Some("Lax"));
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            [("samesite", "Lax"), ("partitioned", "")]
        );

        let mut out = String::new();
        params.fmt_delimited(&mut out, "; ", |_| false).unwrap();
        assert_eq!(out, "SameSite=Lax; Partitioned");

        assert_eq!(params.insert("SAMESITE", "Strict"), Some("Lax".to_owned()));
        let mut out = String::new();
        params.fmt_delimited(&mut out, "; ", |_| false).unwrap();
        assert_eq!(out, "SAMESITE=Strict; Partitioned");

        assert_eq!(params.remove("partitioned"), Some(String::new()));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn fmt_quotes_non_tokens() {
        let params = Params::from([("realm", "my site"), ("stale", "true"), ("flag", "")]);
        let mut out = String::new();
        params.fmt_delimited(&mut out, ", ", |_| false).unwrap();
        assert_eq!(out, r#"realm="my site", stale=true, flag"#);

        let mut out = String::new();
        params
            .fmt_delimited(&mut out, ", ", |key| key != "stale")
            .unwrap();
        assert_eq!(out, r#"realm="my site", stale=true, flag"#);
    }
}
