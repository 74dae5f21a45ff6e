use std::time::SystemTime;

use crate::util::HttpDate;

/// `Last-Modified` header, defined in [RFC7232](https://tools.ietf.org/html/rfc7232#section-2.2)
///
/// The `Last-Modified` header field in a response provides a timestamp
/// indicating the date and time at which the origin server believes the
/// selected representation was last modified, as determined at the
/// conclusion of handling the request.
///
/// # ABNF
///
/// ```text
/// Last-Modified = HTTP-date
/// ```
///
/// # Example values
///
/// * `Sat, 29 Oct 1994 19:43:31 GMT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LastModified(HttpDate);

derive_header!(LastModified(HttpDate), name: LAST_MODIFIED);

impl From<SystemTime> for LastModified {
    fn from(time: SystemTime) -> Self {
        Self(time.into())
    }
}

impl From<LastModified> for SystemTime {
    fn from(date: LastModified) -> Self {
        date.0.into()
    }
}
