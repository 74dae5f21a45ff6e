//! A collection of common HTTP headers.
//!
//! ## Why typed?
//!
//! Each type in here translates between the raw textual values stored for a
//! header and a value that is easier to work with. Malformed input never
//! panics: a header which cannot be decoded at all is reported as an error
//! (which the accessors flatten into "absent"), and a list header drops the
//! individual elements it cannot understand.

pub use self::accept::Accept;
pub use self::accept_charset::AcceptCharset;
pub use self::accept_encoding::AcceptEncoding;
pub use self::accept_language::AcceptLanguage;
pub use self::accept_ranges::AcceptRanges;
pub use self::age::Age;
pub use self::authorization::{Authorization, InvalidBearerToken, ProxyAuthorization};
pub use self::cache_control::{CacheControl, CacheDirective, InvalidCacheDirective};
pub use self::content_disposition::{ContentDisposition, InvalidContentDisposition};
pub use self::content_encoding::ContentEncoding;
pub use self::content_language::ContentLanguage;
pub use self::content_length::ContentLength;
pub use self::content_range::{ContentRange, InvalidContentRange};
pub use self::content_type::{ContentType, InvalidContentType};
pub use self::cookie::{Cookie, Cookies, InvalidCookie, SetCookie};
pub use self::date::Date;
pub use self::etag::ETag;
pub use self::expires::Expires;
pub use self::if_match::IfMatch;
pub use self::if_modified_since::IfModifiedSince;
pub use self::if_none_match::IfNoneMatch;
pub use self::if_range::IfRange;
pub use self::if_unmodified_since::IfUnmodifiedSince;
pub use self::last_modified::LastModified;
pub use self::link::{InvalidLink, Link, LinkValue};
pub use self::location::Location;
pub use self::pragma::{Pragma, PragmaDirective};
pub use self::range::{InvalidRangeSpec, Range, RangeSpec};
pub use self::te::Te;
pub use self::transfer_encoding::TransferEncoding;
pub use self::vary::Vary;
pub use self::www_authenticate::{Challenge, ProxyAuthenticate, WwwAuthenticate};

#[cfg(test)]
fn test_decode<T: crate::HeaderDecode>(values: &[&str]) -> Option<T> {
    let mut values = values.iter().copied();
    T::decode(&mut values).ok()
}

#[cfg(test)]
fn test_encode<T: crate::HeaderEncode>(header: T) -> Vec<String> {
    let mut values = Vec::new();
    header.encode(&mut values);
    values
}

mod accept;
mod accept_charset;
mod accept_encoding;
mod accept_language;
mod accept_ranges;
mod age;
mod authorization;
mod cache_control;
mod content_disposition;
mod content_encoding;
mod content_language;
mod content_length;
mod content_range;
mod content_type;
mod cookie;
mod date;
mod etag;
mod expires;
mod if_match;
mod if_modified_since;
mod if_none_match;
mod if_range;
mod if_unmodified_since;
mod last_modified;
mod link;
mod location;
mod pragma;
mod range;
mod te;
mod transfer_encoding;
mod vary;
mod www_authenticate;
