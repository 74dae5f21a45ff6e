use std::fmt;

/// `Location` header, defined in
/// [RFC7231](https://datatracker.ietf.org/doc/html/rfc7231#section-7.1.2)
///
/// The `Location` header field is used in some responses to refer to a
/// specific resource in relation to the response.  The type of
/// relationship is defined by the combination of request method and
/// status code semantics.
///
/// The URI reference is kept as-is, resolving it is up to the caller.
///
/// # ABNF
///
/// ```text
/// Location = URI-reference
/// ```
///
/// # Example values
/// * `/People.html#tim`
/// * `http://www.example.net/index.html`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location(String);

derive_header!(Location(String), name: LOCATION);

impl Location {
    /// Create a new `Location` header.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// View the URI reference.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&http::Uri> for Location {
    fn from(value: &http::Uri) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_decode;
    use super::*;

    #[test]
    fn absolute_uri() {
        let s = "http://www.example.net/index.html";
        let loc = test_decode::<Location>(&[s]).unwrap();
        assert_eq!(loc, Location::new(s));
    }

    #[test]
    fn relative_uri_with_fragment() {
        let s = "/People.html#tim";
        let loc = test_decode::<Location>(&[s]).unwrap();
        assert_eq!(loc.as_str(), s);
    }

    #[test]
    fn from_uri() {
        let uri: http::Uri = "https://example.com/a?b=c".parse().unwrap();
        assert_eq!(Location::from(&uri).as_str(), "https://example.com/a?b=c");
    }
}
