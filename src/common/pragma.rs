use std::fmt;
use std::str::FromStr;

use crate::util::{is_token, quote, unquote};

derive_list_header! {
    #[header(name = PRAGMA)]
    /// The `Pragma` header defined by HTTP/1.0.
    ///
    /// > The "Pragma" header field allows backwards compatibility with
    /// > HTTP/1.0 caches, so that clients can specify a "no-cache" request
    /// > that they will understand (as Cache-Control was not defined until
    /// > HTTP/1.1).  When the Cache-Control header field is also present and
    /// > understood in a request, Pragma is ignored.
    /// > In HTTP/1.0, Pragma was defined as an extensible field for
    /// > implementation-specified directives for recipients.  This
    /// > specification deprecates such extensions to improve interoperability.
    ///
    /// Spec: [https://tools.ietf.org/html/rfc7234#section-5.4][url]
    ///
    /// [url]: https://tools.ietf.org/html/rfc7234#section-5.4
    ///
    /// # Examples
    ///
    /// ```
    /// use headwise::Pragma;
    ///
    /// let pragma = Pragma::no_cache();
    /// assert!(pragma.is_no_cache());
    /// assert_eq!(pragma.to_string(), "no-cache");
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Pragma(pub Vec<PragmaDirective>);
}

/// A single `Pragma` directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PragmaDirective {
    /// Corresponds to the `no-cache` value.
    NoCache,
    /// Every value other than `no-cache`: a (lower-cased) name and an
    /// optional value.
    Extension(String, Option<String>),
}

impl Pragma {
    /// Construct the literal `no-cache` Pragma header.
    #[must_use]
    pub fn no_cache() -> Self {
        Self::new(PragmaDirective::NoCache)
    }

    /// Return whether this pragma contains the `no-cache` directive.
    #[must_use]
    pub fn is_no_cache(&self) -> bool {
        self.0.contains(&PragmaDirective::NoCache)
    }
}

impl FromStr for PragmaDirective {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(unquote(value.trim()).into_owned())),
            None => (s.trim(), None),
        };
        if !is_token(name) {
            return Err(crate::Error::invalid());
        }
        if name.eq_ignore_ascii_case("no-cache") && value.is_none() {
            Ok(Self::NoCache)
        } else {
            Ok(Self::Extension(name.to_ascii_lowercase(), value))
        }
    }
}

impl fmt::Display for PragmaDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCache => f.write_str("no-cache"),
            Self::Extension(name, None) => f.write_str(name),
            Self::Extension(name, Some(value)) if is_token(value) => write!(f, "{name}={value}"),
            Self::Extension(name, Some(value)) => write!(f, "{name}={}", quote(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn no_cache_is_no_cache() {
        assert!(Pragma::no_cache().is_no_cache());
        assert!(test_decode::<Pragma>(&["No-Cache"]).unwrap().is_no_cache());
    }

    #[test]
    fn extensions() {
        let pragma = test_decode::<Pragma>(&["foo=\"bar baz\", no-cache, x-y"]).unwrap();
        assert_eq!(
            pragma.0,
            vec![
                PragmaDirective::Extension("foo".to_owned(), Some("bar baz".to_owned())),
                PragmaDirective::NoCache,
                PragmaDirective::Extension("x-y".to_owned(), None),
            ]
        );
        assert!(pragma.is_no_cache());
        assert_eq!(test_encode(pragma), ["foo=\"bar baz\", no-cache, x-y"]);
    }

    #[test]
    fn empty_is_nothing() {
        assert!(test_decode::<Pragma>(&[""]).unwrap().0.is_empty());
        assert!(test_encode(Pragma(Vec::new())).is_empty());
    }
}
