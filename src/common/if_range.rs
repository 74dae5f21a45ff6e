use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::util::{EntityTag, HttpDate};

/// `If-Range` header, defined in [RFC7233](https://tools.ietf.org/html/rfc7233#section-3.2)
///
/// If a client has a partial copy of a representation and wishes to have
/// an up-to-date copy of the entire representation, it could use the
/// Range header field with a conditional GET (using either or both of
/// If-Unmodified-Since and If-Match.)  However, if the precondition
/// fails because the representation has been modified, the client would
/// then have to make a second request to obtain the entire current
/// representation.
///
/// The `If-Range` header field allows a client to "short-circuit" the
/// second request.  Informally, its meaning is as follows: if the
/// representation is unchanged, send me the part(s) that I am requesting
/// in Range; otherwise, send me the entire representation.
///
/// # ABNF
///
/// ```text
/// If-Range = entity-tag / HTTP-date
/// ```
///
/// # Example values
///
/// * `Sat, 29 Oct 1994 19:43:31 GMT`
/// * `"xyzzy"`
///
/// # Examples
///
/// ```
/// use headwise::IfRange;
/// use std::time::{SystemTime, Duration};
///
/// let fetched = SystemTime::now() - Duration::from_secs(60 * 60 * 24);
/// let if_range = IfRange::date(fetched);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IfRange {
    /// The entity tag of the partial copy.
    EntityTag(EntityTag),
    /// The modification date of the partial copy.
    Date(HttpDate),
}

impl IfRange {
    /// Create an `IfRange` header with an entity tag.
    #[must_use]
    pub fn etag(tag: EntityTag) -> Self {
        Self::EntityTag(tag)
    }

    /// Create an `IfRange` header with a date value.
    #[must_use]
    pub fn date(time: SystemTime) -> Self {
        Self::Date(time.into())
    }

    /// Checks if the resource has been modified, or if the range request
    /// can be served.
    #[must_use]
    pub fn is_modified(&self, etag: Option<&EntityTag>, last_modified: Option<SystemTime>) -> bool {
        match self {
            Self::Date(since) => last_modified.is_none_or(|time| *since < time.into()),
            Self::EntityTag(tag) => etag.is_none_or(|etag| !tag.strong_eq(etag)),
        }
    }
}

impl FromStr for IfRange {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // an entity tag is always quoted, a date never is
        if s.starts_with('"') || s.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("w/")) {
            s.parse().map(Self::EntityTag).map_err(|err| {
                tracing::trace!("invalid if-range entity tag: {err}");
                crate::Error::invalid()
            })
        } else {
            s.parse().map(Self::Date).map_err(|err| {
                tracing::trace!("invalid if-range date: {err}");
                crate::Error::invalid()
            })
        }
    }
}

impl fmt::Display for IfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityTag(tag) => tag.fmt(f),
            Self::Date(date) => date.fmt(f),
        }
    }
}

impl crate::TypedHeader for IfRange {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::IF_RANGE
    }
}

impl crate::HeaderDecode for IfRange {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        crate::util::decode_single(values)
    }
}

impl crate::HeaderEncode for IfRange {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        values.extend(::std::iter::once(self.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn decode_etag_or_date() {
        assert_eq!(
            test_decode::<IfRange>(&["\"xyzzy\""]),
            Some(IfRange::etag(EntityTag::Strong("xyzzy".to_owned())))
        );
        assert_eq!(
            test_decode::<IfRange>(&["Sat, 29 Oct 1994 19:43:31 GMT"]),
            Some(IfRange::Date(HttpDate::from_unix_seconds(783_459_811)))
        );
        assert_eq!(test_decode::<IfRange>(&["xyzzy"]), None);
    }

    #[test]
    fn is_modified() {
        let now = SystemTime::now();
        let if_range = IfRange::date(now - Duration::from_secs(60));
        assert!(if_range.is_modified(None, Some(now)));
        assert!(!if_range.is_modified(None, Some(now - Duration::from_secs(120))));

        let tag = EntityTag::Strong("foo".to_owned());
        let if_range = IfRange::etag(tag.clone());
        assert!(!if_range.is_modified(Some(&tag), None));
        assert!(if_range.is_modified(Some(&EntityTag::Weak("foo".to_owned())), None));
        assert!(if_range.is_modified(None, None));
    }

    #[test]
    fn encode() {
        let if_range = IfRange::Date(HttpDate::from_unix_seconds(783_459_811));
        assert_eq!(test_encode(if_range), ["Sat, 29 Oct 1994 19:43:31 GMT"]);
    }
}
