use crate::util::EntityTag;

/// `ETag` header, defined in [RFC7232](https://tools.ietf.org/html/rfc7232#section-2.3)
///
/// The `ETag` header field in a response provides the current entity-tag
/// for the selected representation, as determined at the conclusion of
/// handling the request.  An entity-tag is an opaque validator for
/// differentiating between multiple representations of the same
/// resource, regardless of whether those multiple representations are
/// due to resource state changes over time, content negotiation
/// resulting in multiple representations being valid at the same time,
/// or both. An entity-tag consists of an opaque quoted string, possibly
/// prefixed by a weakness indicator.
///
/// # ABNF
///
/// ```text
/// ETag       = entity-tag
/// ```
///
/// # Example values
///
/// * `"xyzzy"`
/// * `W/"xyzzy"`
/// * `""`
///
/// # Examples
///
/// ```
/// use headwise::{ETag, EntityTag, HeaderMapExt};
///
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::ETAG, r#"W/"0815""#.parse().unwrap());
///
/// let etag: ETag = headers.typed_get().unwrap();
/// assert_eq!(etag.tag(), &EntityTag::Weak("0815".to_owned()));
/// assert_eq!(etag.to_string(), r#"W/"0815""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ETag(EntityTag);

derive_header!(ETag(EntityTag), name: ETAG);

impl ETag {
    /// View the entity tag.
    #[must_use]
    pub fn tag(&self) -> &EntityTag {
        &self.0
    }
}

impl std::fmt::Display for ETag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn weak_roundtrip() {
        let etag = test_decode::<ETag>(&["W/\"0815\""]).unwrap();
        assert_eq!(etag.tag(), &EntityTag::Weak("0815".to_owned()));
        assert_eq!(test_encode(etag), ["W/\"0815\""]);
    }

    #[test]
    fn strong_and_lenient() {
        for (raw, expected) in [
            ("\"xyzzy\"", EntityTag::Strong("xyzzy".to_owned())),
            ("w/\"xyzzy\"", EntityTag::Weak("xyzzy".to_owned())),
            ("\"\"", EntityTag::Strong(String::new())),
            ("xyzzy", EntityTag::Strong("xyzzy".to_owned())),
        ] {
            assert_eq!(test_decode::<ETag>(&[raw]), Some(ETag(expected)), "{raw}");
        }
    }
}
