use std::fmt;
use std::str::FromStr;

use crate::util::{Params, csv, parse_params};

/// `Link` header, defined in [RFC8288](https://tools.ietf.org/html/rfc8288#section-3)
///
/// The Link header field provides a means for serializing one or more
/// links into HTTP headers.
///
/// # ABNF
///
/// ```text
/// Link       = #link-value
/// link-value = "<" URI-Reference ">" *( OWS ";" OWS link-param )
/// link-param = token BWS [ "=" BWS ( token / quoted-string ) ]
/// ```
///
/// # Example values
///
/// * `<http://example.com/TheBook/chapter2>; rel="previous"; title="previous chapter"`
/// * `</TheBook/chapter2>; rel="previous", </TheBook/chapter4>; rel="next"`
///
/// # Examples
///
/// ```
/// use headwise::{HeaderMapExt, Link, LinkValue};
///
/// let mut headers = http::HeaderMap::new();
/// headers.typed_insert(Link(vec![
///     LinkValue::new("/style.css").with_param("rel", "preload").with_param("as", "style"),
/// ]));
/// assert_eq!(headers["link"], r#"</style.css>; rel="preload"; as="style""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link(pub Vec<LinkValue>);

/// A single link of a `Link` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkValue {
    uri: String,
    params: Params,
}

static_str_error! {
    pub struct InvalidLink = "invalid link value";
}

impl LinkValue {
    /// Create a link to the given URI reference, without parameters.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            params: Params::new(),
        }
    }

    /// The target URI reference.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The link parameters.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The `rel` parameter, if any.
    #[must_use]
    pub fn rel(&self) -> Option<&str> {
        self.params.get("rel")
    }

    generate_set_and_with! {
        /// Set a link parameter.
        pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.params.insert(name, value);
            self
        }
    }
}

impl FromStr for LinkValue {
    type Err = InvalidLink;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s.strip_prefix('<').ok_or(InvalidLink)?;
        let (uri, params) = rest.split_once('>').ok_or(InvalidLink)?;
        let params = params.trim_start();
        let params = match params.strip_prefix(';') {
            Some(params) => parse_params(params, ';'),
            None if params.is_empty() => Params::new(),
            None => return Err(InvalidLink),
        };
        Ok(Self {
            uri: uri.trim().to_owned(),
            params,
        })
    }
}

impl fmt::Display for LinkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.uri)?;
        if !self.params.is_empty() {
            f.write_str("; ")?;
            self.params.fmt_delimited(f, "; ", |_| true)?;
        }
        Ok(())
    }
}

impl Link {
    /// Iterate over the links.
    pub fn iter(&self) -> impl Iterator<Item = &LinkValue> {
        self.0.iter()
    }

    /// Find the first link with the given relation type.
    #[must_use]
    pub fn find_rel(&self, rel: &str) -> Option<&LinkValue> {
        self.0.iter().find(|link| {
            link.rel()
                .is_some_and(|rels| rels.split_ascii_whitespace().any(|r| r.eq_ignore_ascii_case(rel)))
        })
    }
}

impl FromIterator<LinkValue> for Link {
    fn from_iter<I: IntoIterator<Item = LinkValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        csv::fmt_comma_delimited(f, self.0.iter())
    }
}

impl crate::TypedHeader for Link {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::LINK
    }
}

impl crate::HeaderDecode for Link {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        Ok(values
            .flat_map(csv::split_link_str)
            .filter_map(|element| match element.parse() {
                Ok(link) => Some(link),
                Err(err) => {
                    tracing::trace!("dropping invalid link '{element}': {err}");
                    None
                }
            })
            .collect())
    }
}

impl crate::HeaderEncode for Link {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        if !self.0.is_empty() {
            values.extend(::std::iter::once(self.to_string()));
        }
    }
}
