use http::HeaderName;

use crate::util::csv;

/// `Vary` header, defined in [RFC7231](https://tools.ietf.org/html/rfc7231#section-7.1.4)
///
/// The "Vary" header field in a response describes what parts of a
/// request message, aside from the method, Host header field, and
/// request target, might influence the origin server's process for
/// selecting and representing this response.  The value consists of
/// either a single asterisk ("*") or a list of header field names
/// (case-insensitive).
///
/// # ABNF
///
/// ```text
/// Vary = "*" / 1#field-name
/// ```
///
/// # Example values
///
/// * `accept-encoding, accept-language`
///
/// # Example
///
/// ```
/// use headwise::Vary;
///
/// let vary = Vary::any();
/// assert!(vary.is_any());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vary(Vec<HeaderName>);

const ANY: &str = "*";

impl Vary {
    /// Create a new `Vary: *` header.
    #[must_use]
    pub fn any() -> Self {
        Self(Vec::new())
    }

    /// Create a `Vary` header listing the given header names.
    ///
    /// An empty list of names is the same as [`Vary::any`].
    pub fn headers(names: impl IntoIterator<Item = HeaderName>) -> Self {
        Self(names.into_iter().collect())
    }

    /// Check if this is a `Vary: *` header.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the header names this `Vary` header contains.
    pub fn iter_strs(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(HeaderName::as_str)
    }

    /// Consume the header into its header names, empty for `Vary: *`.
    #[must_use]
    pub fn into_names(self) -> Vec<HeaderName> {
        self.0
    }
}

impl crate::TypedHeader for Vary {
    fn name() -> &'static HeaderName {
        &http::header::VARY
    }
}

impl crate::HeaderDecode for Vary {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        let mut names = Vec::new();
        let mut any = false;
        for element in values.flat_map(csv::split_csv_str) {
            if element == ANY {
                any = true;
                continue;
            }
            match HeaderName::from_bytes(element.as_bytes()) {
                Ok(name) => names.push(name),
                Err(err) => tracing::trace!("dropping invalid vary header name '{element}': {err}"),
            }
        }
        if any {
            return Ok(Self::any());
        }
        if names.is_empty() {
            tracing::debug!("failed to decode vary header: no valid header names");
            return Err(crate::Error::invalid());
        }
        Ok(Self(names))
    }
}

impl crate::HeaderEncode for Vary {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        let value = if self.is_any() {
            ANY.to_owned()
        } else {
            self.iter_strs().collect::<Vec<_>>().join(", ")
        };
        values.extend(::std::iter::once(value));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn any_is_any() {
        assert!(Vary::any().is_any());
        assert!(test_decode::<Vary>(&["accept, *"]).unwrap().is_any());
        assert_eq!(test_encode(Vary::any()), ["*"]);
    }

    #[test]
    fn iter_strs() {
        let vary = test_decode::<Vary>(&["Accept-Encoding, user agent", "Cookie"]).unwrap();
        assert_eq!(
            vary.iter_strs().collect::<Vec<_>>(),
            ["accept-encoding", "cookie"]
        );
        assert_eq!(test_encode(vary), ["accept-encoding, cookie"]);
    }

    #[test]
    fn nothing_valid_is_invalid() {
        assert_eq!(test_decode::<Vary>(&["", "bad name"]), None);
    }
}
