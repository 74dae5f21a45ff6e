use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::util::is_token;

/// A media type (also known as MIME type), `type/subtype`.
///
/// The value is normalized: trimmed and lower-cased. Parameters are not part
/// of a [`MediaType`], see [`ContentType`] for a media type with parameters.
///
/// Equality and hashing ignore the vendor `x-` prefix of the subtype, so
/// `application/x-foo` and `application/foo` are the same media type.
/// Wildcards such as `*/*` and `text/*` are ordinary values, use
/// [`MediaType::matches`] for wildcard aware comparison.
///
/// Well-known media types are available as associated constants,
/// any other media type can be created with [`MediaType::new`].
///
/// # Example
///
/// ```
/// use headwise::MediaType;
///
/// let foo = MediaType::new("Application/X-Foo").unwrap();
/// assert_eq!(foo.as_str(), "application/x-foo");
/// assert_eq!(foo, MediaType::new("application/foo").unwrap());
///
/// assert!(MediaType::new("image/*").unwrap().matches(&MediaType::PNG));
/// ```
///
/// [`ContentType`]: crate::ContentType
#[derive(Clone, Debug)]
pub struct MediaType(Cow<'static, str>);

static_str_error! {
    pub struct InvalidMediaType = "invalid media type";
}

macro_rules! media_types {
    ($($(#[$m:meta])* $name:ident => $value:literal,)+) => {
        impl MediaType {
            $(
                $(#[$m])*
                #[doc = concat!("`", $value, "`")]
                pub const $name: Self = Self(Cow::Borrowed($value));
            )+
        }
    };
}

media_types! {
    ANY => "*/*",
    HTML => "text/html",
    PLAIN => "text/plain",
    CSS => "text/css",
    CSV => "text/csv",
    JAVASCRIPT => "text/javascript",
    XML => "text/xml",
    EVENT_STREAM => "text/event-stream",
    XHTML => "application/xhtml+xml",
    APPLICATION_XML => "application/xml",
    JSON => "application/json",
    FORM_URL_ENCODED => "application/x-www-form-urlencoded",
    OCTET_STREAM => "application/octet-stream",
    PDF => "application/pdf",
    ZIP => "application/zip",
    WASM => "application/wasm",
    MULTIPART_FORM_DATA => "multipart/form-data",
    PNG => "image/png",
    JPEG => "image/jpeg",
    GIF => "image/gif",
    SVG => "image/svg+xml",
    WEBP => "image/webp",
}

impl MediaType {
    /// Create a media type from a raw `type/subtype` string.
    ///
    /// Parameters following a `;` are ignored.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvalidMediaType> {
        let raw = raw.as_ref();
        let essence = raw.split(';').next().unwrap_or_default().trim();
        let Some((ty, subtype)) = essence.split_once('/') else {
            return Err(InvalidMediaType);
        };
        if !is_token(ty) || !is_token(subtype) {
            return Err(InvalidMediaType);
        }
        Ok(Self(Cow::Owned(essence.to_ascii_lowercase())))
    }

    /// Create a media type from a static string at compile time.
    ///
    /// The string is expected to be a lower-cased `type/subtype`,
    /// it is not validated.
    #[must_use]
    pub const fn from_static(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    /// The normalized `type/subtype` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The top-level type, e.g. `text` for `text/html`.
    #[must_use]
    pub fn type_(&self) -> &str {
        self.split().0
    }

    /// The subtype, e.g. `html` for `text/html`.
    #[must_use]
    pub fn subtype(&self) -> &str {
        self.split().1
    }

    /// Returns `true` if either the type or subtype is `*`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        let (ty, subtype) = self.split();
        ty == "*" || subtype == "*"
    }

    /// Wildcard aware comparison: `*/*` matches everything,
    /// `text/*` matches any `text` subtype.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        let (a_ty, a_sub) = self.split();
        let (b_ty, b_sub) = other.split();
        if a_ty == "*" || b_ty == "*" {
            return true;
        }
        if a_ty != b_ty {
            return false;
        }
        a_sub == "*" || b_sub == "*" || strip_vendor(a_sub) == strip_vendor(b_sub)
    }

    fn split(&self) -> (&str, &str) {
        self.0.split_once('/').unwrap_or((self.as_str(), ""))
    }
}

fn strip_vendor(subtype: &str) -> &str {
    subtype.strip_prefix("x-").unwrap_or(subtype)
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        let (a_ty, a_sub) = self.split();
        let (b_ty, b_sub) = other.split();
        a_ty == b_ty && strip_vendor(a_sub) == strip_vendor(b_sub)
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (ty, subtype) = self.split();
        ty.hash(state);
        strip_vendor(subtype).hash(state);
    }
}

impl FromStr for MediaType {
    type Err = InvalidMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

derive_serde_via_str!(MediaType);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn normalizes() {
        let mt: MediaType = "  Text/HTML ; charset=utf-8".parse().unwrap();
        assert_eq!(mt.as_str(), "text/html");
        assert_eq!(mt, MediaType::HTML);
        assert_eq!(mt.type_(), "text");
        assert_eq!(mt.subtype(), "html");
    }

    #[test]
    fn vendor_prefix_is_ignored() {
        let a = MediaType::new("application/x-foo").unwrap();
        let b = MediaType::new("application/foo").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "application/x-foo");

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);

        assert_ne!(
            MediaType::new("application/x-foo").unwrap(),
            MediaType::new("text/foo").unwrap()
        );
    }

    #[test]
    fn invalid() {
        for raw in ["", "text", "text/", "/html", "te xt/html", "text/ht ml"] {
            assert!(raw.parse::<MediaType>().is_err(), "{raw}");
        }
    }

    #[test]
    fn wildcards() {
        assert!(MediaType::ANY.is_wildcard());
        assert!(!MediaType::HTML.is_wildcard());
        assert!(MediaType::ANY.matches(&MediaType::JSON));
        assert!(MediaType::new("text/*").unwrap().matches(&MediaType::HTML));
        assert!(!MediaType::new("text/*").unwrap().matches(&MediaType::JSON));
        assert!(MediaType::JSON.matches(&MediaType::JSON));
        assert!(!MediaType::JSON.matches(&MediaType::HTML));
    }

    #[quickcheck_macros::quickcheck]
    fn parse_never_panics(raw: String) -> bool {
        let _ = raw.parse::<MediaType>();
        true
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_string() {
        let json = serde_json::to_string(&MediaType::JSON).unwrap();
        assert_eq!(json, r#""application/json""#);
        let mt: MediaType = serde_json::from_str(r#""Text/Plain""#).unwrap();
        assert_eq!(mt, MediaType::PLAIN);
    }
}
