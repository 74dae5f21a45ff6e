use std::ops;
use std::time::{Duration, SystemTime};

use crate::specifier::{Charset, Encoding, Language, MediaType, QualityValue, RangeUnit};
use crate::util::EntityTag;
use crate::{
    Accept, AcceptCharset, AcceptEncoding, AcceptLanguage, AcceptRanges, Age, Authorization,
    CacheControl, CacheDirective, Challenge, ContentDisposition, ContentEncoding, ContentLanguage,
    ContentLength, ContentRange, ContentType, Cookie, Cookies, Date, ETag, Expires, HeaderMapExt,
    IfMatch, IfModifiedSince, IfNoneMatch, IfRange, IfUnmodifiedSince, LastModified, Link,
    LinkValue, Location, Pragma, PragmaDirective, ProxyAuthenticate, ProxyAuthorization, Range,
    RawHeaders, SetCookie, Te, TransferEncoding, TypedHeader, Vary, WwwAuthenticate,
};

macro_rules! accessors {
    (
        $(
            $(#[$m:meta])*
            $kind:ident $get:ident, $set:ident: $header:ident => $value:ty;
        )+
    ) => {
        $(
            accessors!(@$kind $(#[$m])* $get, $set, $header, $value);
        )+
    };

    // sorted by preference, excluding `q=0`
    (@quality $(#[$m:meta])* $get:ident, $set:ident, $header:ident, $value:ty) => {
        $(#[$m])*
        fn $get(&self) -> Vec<$value> {
            self.typed_get::<$header>()
                .map($header::into_values)
                .unwrap_or_default()
        }

        #[doc = concat!("Set the values read by [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        ///
        /// Values are written in the given order, an empty input removes the header.
        fn $set<I, V>(&mut self, values: I)
        where
            I: IntoIterator<Item = V>,
            V: Into<QualityValue<$value>>,
        {
            self.typed_insert(values.into_iter().map(Into::into).collect::<$header>());
        }
    };

    (@list $(#[$m:meta])* $get:ident, $set:ident, $header:ident, $value:ty) => {
        $(#[$m])*
        fn $get(&self) -> Vec<$value> {
            self.typed_get::<$header>()
                .map(|header| header.0)
                .unwrap_or_default()
        }

        #[doc = concat!("Set the values read by [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        ///
        /// An empty input removes the header.
        fn $set<I>(&mut self, values: I)
        where
            I: IntoIterator<Item = $value>,
        {
            self.typed_insert($header(values.into_iter().collect()));
        }
    };

    // header and value convert into each other
    (@value $(#[$m:meta])* $get:ident, $set:ident, $header:ident, $value:ty) => {
        $(#[$m])*
        fn $get(&self) -> Option<$value> {
            self.typed_get::<$header>().map(Into::into)
        }

        #[doc = concat!("Set the value read by [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        ///
        /// `None` removes the header.
        fn $set(&mut self, value: Option<$value>) {
            match value {
                Some(value) => self.typed_insert($header::from(value)),
                None => self.typed_remove::<$header>(),
            }
        }
    };

    // header wraps the value
    (@inner $(#[$m:meta])* $get:ident, $set:ident, $header:ident, $value:ty) => {
        $(#[$m])*
        fn $get(&self) -> Option<$value> {
            self.typed_get::<$header>().map($header::into_inner)
        }

        #[doc = concat!("Set the value read by [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        ///
        /// `None` removes the header.
        fn $set(&mut self, value: Option<$value>) {
            match value {
                Some(value) => self.typed_insert($header::from(value)),
                None => self.typed_remove::<$header>(),
            }
        }
    };
}

/// Named, typed getters and setters for the well-known headers, available
/// on every [`RawHeaders`] store.
///
/// Getters never fail: an absent or malformed header reads as `None` or as
/// an empty list. Setters replace every value of the header, and remove it
/// when given `None` or an empty list.
///
/// [`RawHeaders`]: crate::RawHeaders
///
/// # Example
///
/// ```
/// use headwise::{Encoding, HeaderAccessors, MediaType, QualityValue};
///
/// let mut headers = http::HeaderMap::new();
/// headers.set_accept_encoding([
///     QualityValue::new(Encoding::GZIP, 800.into()),
///     QualityValue::new_value(Encoding::BR),
/// ]);
/// assert_eq!(headers["accept-encoding"], "gzip;q=0.8, br");
/// assert_eq!(headers.accept_encoding(), vec![Encoding::BR, Encoding::GZIP]);
///
/// headers.set_content_type(Some(MediaType::JSON.into()));
/// assert_eq!(headers["content-type"], "application/json");
///
/// headers.set_accept_encoding(Vec::<Encoding>::new());
/// assert!(!headers.contains_key("accept-encoding"));
/// ```
pub trait HeaderAccessors: HeaderMapExt {
    accessors! {
        /// The media types the client accepts, most preferred first.
        quality accept, set_accept: Accept => MediaType;
        /// The charsets the client accepts, most preferred first.
        quality accept_charset, set_accept_charset: AcceptCharset => Charset;
        /// The content codings the client accepts, most preferred first.
        quality accept_encoding, set_accept_encoding: AcceptEncoding => Encoding;
        /// The languages the client accepts, most preferred first.
        quality accept_language, set_accept_language: AcceptLanguage => Language;
        /// The transfer codings the client accepts, most preferred first.
        quality te, set_te: Te => Encoding;

        /// The range units the server supports.
        list accept_ranges, set_accept_ranges: AcceptRanges => RangeUnit;
        /// The codings applied to the content, in order of application.
        list content_encoding, set_content_encoding: ContentEncoding => Encoding;
        /// The codings applied to the message body, in order of application.
        list transfer_encoding, set_transfer_encoding: TransferEncoding => Encoding;
        /// The languages of the intended audience.
        list content_language, set_content_language: ContentLanguage => Language;
        /// The `If-Match` entity tags.
        list if_match, set_if_match: IfMatch => EntityTag;
        /// The `If-None-Match` entity tags.
        list if_none_match, set_if_none_match: IfNoneMatch => EntityTag;
        /// The `Pragma` directives.
        list pragma, set_pragma: Pragma => PragmaDirective;
        /// The challenges of a `401 Unauthorized` response.
        list www_authenticate, set_www_authenticate: WwwAuthenticate => Challenge;
        /// The challenges of a `407 Proxy Authentication Required` response.
        list proxy_authenticate, set_proxy_authenticate: ProxyAuthenticate => Challenge;
        /// The `Link` values.
        list link, set_link: Link => LinkValue;
        /// The cookies sent by a client, as name and value pairs.
        list cookies, set_cookies: Cookies => Cookie;
        /// The cookies set by a server, one per `Set-Cookie` line.
        list set_cookie, set_set_cookie: SetCookie => Cookie;

        /// The `Cache-Control` directives.
        value cache_control, set_cache_control: CacheControl => CacheControl;
        /// The media type and parameters of the content.
        value content_type, set_content_type: ContentType => ContentType;
        /// How the content is meant to be presented.
        value content_disposition, set_content_disposition: ContentDisposition => ContentDisposition;
        /// The part of the representation enclosed in a partial response.
        value content_range, set_content_range: ContentRange => ContentRange;
        /// The credentials of the client.
        value authorization, set_authorization: Authorization => Authorization;
        /// The condition of a conditional range request.
        value if_range, set_if_range: IfRange => IfRange;
        /// The request headers the response varies on.
        value vary, set_vary: Vary => Vary;
        /// The time the message was originated.
        value date, set_date: Date => SystemTime;
        /// The time after which the response is considered stale.
        value expires, set_expires: Expires => SystemTime;
        /// The time the representation was last modified.
        value last_modified, set_last_modified: LastModified => SystemTime;
        /// The `If-Modified-Since` condition.
        value if_modified_since, set_if_modified_since: IfModifiedSince => SystemTime;
        /// The `If-Unmodified-Since` condition.
        value if_unmodified_since, set_if_unmodified_since: IfUnmodifiedSince => SystemTime;
        /// The time the response spent in caches.
        value age, set_age: Age => Duration;

        /// The credentials of the client for a proxy.
        inner proxy_authorization, set_proxy_authorization: ProxyAuthorization => Authorization;
        /// The size of the content in bytes.
        inner content_length, set_content_length: ContentLength => u64;
        /// The entity tag of the representation.
        inner etag, set_etag: ETag => EntityTag;
        /// The URI reference to redirect to.
        inner location, set_location: Location => String;
    }

    /// The requested ranges, resolved to half-open intervals.
    ///
    /// A suffix range `-N` resolves to `[-N, -N + 1)`, an open range `N-`
    /// to `[N, i64::MAX)`. Malformed specs are dropped.
    fn range(&self) -> Vec<ops::Range<i64>> {
        self.typed_get::<Range>()
            .map(|range| range.intervals().collect())
            .unwrap_or_default()
    }

    /// Request the given `bytes` intervals, an empty input removes the header.
    fn set_range<I>(&mut self, intervals: I)
    where
        I: IntoIterator<Item = ops::Range<i64>>,
    {
        self.typed_insert(Range::from_intervals(intervals));
    }

    /// Append a cookie as a new `Set-Cookie` line, keeping the existing ones.
    ///
    /// Existing lines are kept as-is, even when they cannot be decoded.
    fn add_set_cookie(&mut self, cookie: Cookie) {
        let name = SetCookie::name();
        let mut values = self.raw_values(name).unwrap_or_default();
        values.push(cookie.to_string());
        self.set_raw_values(name, Some(values));
    }

    /// Add a directive to the `Cache-Control` header, replacing a directive
    /// of the same kind.
    fn add_cache_directive(&mut self, directive: CacheDirective) {
        let mut cache_control = self.cache_control().unwrap_or_default();
        cache_control.insert(directive);
        self.set_cache_control(Some(cache_control));
    }
}

impl<T: HeaderMapExt + ?Sized> HeaderAccessors for T {}
