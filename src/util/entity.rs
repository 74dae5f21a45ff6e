use std::fmt;
use std::str::FromStr;

/// An entity tag, defined in [RFC7232](https://tools.ietf.org/html/rfc7232#section-2.3)
///
/// An entity tag consists of a string enclosed by two literal double quotes.
/// Preceding the first double quote is an optional weakness indicator,
/// which always looks like `W/`. Examples for valid tags are `"xyzzy"` and `W/"xyzzy"`.
/// The wildcard `*` used by `If-Match` and `If-None-Match` is modelled as
/// a variant of its own.
///
/// Parsing is lenient: the `W/` prefix is matched case-insensitively and an
/// unquoted tag is accepted as a strong tag.
///
/// # ABNF
///
/// ```text
/// entity-tag = [ weak ] opaque-tag
/// weak       = %x57.2F ; "W/", case-sensitive
/// opaque-tag = DQUOTE *etagc DQUOTE
/// etagc      = %x21 / %x23-7E / obs-text
///            ; VCHAR except double quotes, plus obs-text
/// ```
///
/// # Comparison
/// To check if two entity tags are equivalent in an application always use the `strong_eq` or
/// `weak_eq` methods based on the context of the Tag. Only use `==` to check if two tags are
/// identical.
///
/// The example below shows the results for a set of entity-tag pairs and
/// both the weak and strong comparison function results:
///
/// | ETag 1  | ETag 2  | Strong Comparison | Weak Comparison |
/// |---------|---------|-------------------|-----------------|
/// | `W/"1"` | `W/"1"` | no match          | match           |
/// | `W/"1"` | `W/"2"` | no match          | no match        |
/// | `W/"1"` | `"1"`   | no match          | match           |
/// | `"1"`   | `"1"`   | match             | match           |
///
/// # Example
///
/// ```
/// use headwise::EntityTag;
///
/// let tag: EntityTag = "W/\"0815\"".parse().unwrap();
/// assert_eq!(tag, EntityTag::Weak("0815".to_owned()));
/// assert_eq!(tag.to_string(), "W/\"0815\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityTag {
    /// `"<tag>"`
    Strong(String),
    /// `W/"<tag>"`
    Weak(String),
    /// `*`
    Wildcard,
}

static_str_error! {
    pub struct InvalidEntityTag = "invalid entity tag";
}

impl EntityTag {
    /// Create a strong tag, validating its characters.
    pub fn strong(tag: impl Into<String>) -> Result<Self, InvalidEntityTag> {
        let tag = tag.into();
        if check_tag_validity(&tag) {
            Ok(Self::Strong(tag))
        } else {
            Err(InvalidEntityTag)
        }
    }

    /// Create a weak tag, validating its characters.
    pub fn weak(tag: impl Into<String>) -> Result<Self, InvalidEntityTag> {
        let tag = tag.into();
        if check_tag_validity(&tag) {
            Ok(Self::Weak(tag))
        } else {
            Err(InvalidEntityTag)
        }
    }

    /// Get the opaque tag, `None` for the wildcard.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Strong(tag) | Self::Weak(tag) => Some(tag),
            Self::Wildcard => None,
        }
    }

    /// Return if this is a "weak" tag.
    #[must_use]
    pub fn is_weak(&self) -> bool {
        matches!(self, Self::Weak(_))
    }

    /// Return if this is the `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// For strong comparison two entity-tags are equivalent if both are not weak and their
    /// opaque-tags match character-by-character.
    #[must_use]
    pub fn strong_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Strong(a), Self::Strong(b)) => a == b,
            _ => false,
        }
    }

    /// For weak comparison two entity-tags are equivalent if their
    /// opaque-tags match character-by-character, regardless of either or
    /// both being tagged as "weak".
    #[must_use]
    pub fn weak_eq(&self, other: &Self) -> bool {
        match (self.tag(), other.tag()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// check that each char in the tag is either:
/// 1. `%x21`, or
/// 2. in the range `%x23` to `%x7E`, or
/// 3. above `%x80`
fn check_tag_validity(tag: &str) -> bool {
    tag.chars()
        .all(|c| c == '\x21' || ('\x23'..='\x7e').contains(&c) || c >= '\u{80}')
}

impl FromStr for EntityTag {
    type Err = InvalidEntityTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(Self::Wildcard);
        }

        let (weak, opaque) = match s.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("w/") => (true, &s[2..]),
            _ => (false, s),
        };

        let tag = match opaque
            .strip_prefix('"')
            .and_then(|opaque| opaque.strip_suffix('"'))
        {
            Some(tag) => tag,
            None if !opaque.is_empty() && !opaque.contains('"') => opaque,
            None => {
                tracing::trace!("invalid entity tag: '{s}'");
                return Err(InvalidEntityTag);
            }
        };

        if weak {
            Self::weak(tag)
        } else {
            Self::strong(tag)
        }
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strong(tag) => write!(f, "\"{tag}\""),
            Self::Weak(tag) => write!(f, "W/\"{tag}\""),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

derive_serde_via_str!(EntityTag);

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> EntityTag {
        s.parse().unwrap()
    }

    #[test]
    fn test_etag_parse_success() {
        // Expected success
        assert_eq!(tag("\"foobar\""), EntityTag::Strong("foobar".to_owned()));
        assert_eq!(tag("\"\""), EntityTag::Strong(String::new()));
        assert_eq!(tag("W/\"weaktag\""), EntityTag::Weak("weaktag".to_owned()));
        assert_eq!(tag("w/\"\x65\x62\""), EntityTag::Weak("eb".to_owned()));
        assert_eq!(tag("W/\"\""), EntityTag::Weak(String::new()));
        assert_eq!(tag("*"), EntityTag::Wildcard);
    }

    #[test]
    fn test_etag_parse_lenient() {
        assert_eq!(tag("no-quotes"), EntityTag::Strong("no-quotes".to_owned()));
        assert_eq!(tag(" \"padded\" "), EntityTag::Strong("padded".to_owned()));
    }

    #[test]
    fn test_etag_parse_failures() {
        // Expected failures
        for raw in ["", "\"unmatched-dquotes1", "unmatched-dquotes2\"", "\"inner\"quote\"", "W/"] {
            assert!(raw.parse::<EntityTag>().is_err(), "{raw}");
        }
    }

    #[test]
    fn test_etag_fmt() {
        assert_eq!(tag("W/\"0815\"").to_string(), "W/\"0815\"");
        assert_eq!(tag("w/\"0815\"").to_string(), "W/\"0815\"");
        assert_eq!(tag("\"0815\"").to_string(), "\"0815\"");
        assert_eq!(EntityTag::Wildcard.to_string(), "*");
    }

    #[test]
    fn test_cmp() {
        // | ETag 1  | ETag 2  | Strong Comparison | Weak Comparison |
        // |---------|---------|-------------------|-----------------|
        // | `W/"1"` | `W/"1"` | no match          | match           |
        // | `W/"1"` | `W/"2"` | no match          | no match        |
        // | `W/"1"` | `"1"`   | no match          | match           |
        // | `"1"`   | `"1"`   | match             | match           |
        let mut etag1 = tag("W/\"1\"");
        let mut etag2 = etag1.clone();
        assert!(!etag1.strong_eq(&etag2));
        assert!(etag1.weak_eq(&etag2));

        etag2 = tag("W/\"2\"");
        assert!(!etag1.strong_eq(&etag2));
        assert!(!etag1.weak_eq(&etag2));

        etag2 = tag("\"1\"");
        assert!(!etag1.strong_eq(&etag2));
        assert!(etag1.weak_eq(&etag2));

        etag1 = tag("\"1\"");
        assert!(etag1.strong_eq(&etag2));
        assert!(etag1.weak_eq(&etag2));

        assert!(!EntityTag::Wildcard.weak_eq(&EntityTag::Wildcard));
    }

    #[test]
    fn constructors_validate() {
        assert!(EntityTag::strong("abc").is_ok());
        assert!(EntityTag::strong("a\"c").is_err());
        assert!(EntityTag::weak("a c").is_err());
    }

    #[quickcheck_macros::quickcheck]
    fn constructed_tags_roundtrip(raw: String, weak: bool) -> bool {
        let constructed = if weak {
            EntityTag::weak(raw)
        } else {
            EntityTag::strong(raw)
        };
        match constructed {
            Ok(tag) => tag.to_string().parse::<EntityTag>() == Ok(tag),
            Err(_) => true,
        }
    }
}
