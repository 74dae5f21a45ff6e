use std::fmt;
use std::mem;
use std::str::FromStr;
use std::time::Duration;

use crate::util::{Seconds, csv, is_token, quote, unquote};
use crate::{Error, HeaderDecode, HeaderEncode, TypedHeader};

/// `Cache-Control` header, defined in [RFC7234](https://tools.ietf.org/html/rfc7234#section-5.2)
/// with extensions in [RFC8246](https://www.rfc-editor.org/rfc/rfc8246)
/// and [RFC5861](https://www.rfc-editor.org/rfc/rfc5861).
///
/// The `Cache-Control` header field is used to specify directives for
/// caches along the request/response chain.  Such cache directives are
/// unidirectional in that the presence of a directive in a request does
/// not imply that the same directive is to be given in the response.
///
/// Directives are kept in the order they were received or set. Directives
/// which are not known are kept as [`CacheDirective::Custom`].
///
/// ## ABNF
///
/// ```text
/// Cache-Control   = 1#cache-directive
/// cache-directive = token [ "=" ( token / quoted-string ) ]
/// ```
///
/// ## Example values
///
/// * `no-cache`
/// * `private, community="UCI"`
/// * `max-age=30`
///
/// # Example
///
/// ```
/// use headwise::CacheControl;
/// use std::time::Duration;
///
/// let cc = CacheControl::new()
///     .with_public()
///     .with_max_age(Duration::from_secs(600));
/// assert_eq!(cc.to_string(), "public, max-age=600");
/// assert_eq!(cc.max_age(), Some(Duration::from_secs(600)));
/// ```
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct CacheControl(pub Vec<CacheDirective>);

/// A single `Cache-Control` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheDirective {
    /// `no-cache`, optionally limited to the listed field names.
    NoCache(Option<String>),
    /// `no-store`
    NoStore,
    /// `no-transform`
    NoTransform,
    /// `only-if-cached`
    OnlyIfCached,

    // request directives
    /// `max-age=<seconds>`
    MaxAge(Seconds),
    /// `max-stale[=<seconds>]`
    MaxStale(Option<Seconds>),
    /// `min-fresh=<seconds>`
    MinFresh(Seconds),

    // response directives
    /// `must-revalidate`
    MustRevalidate,
    /// `must-understand`
    MustUnderstand,
    /// `public`
    Public,
    /// `private`, optionally limited to the listed field names.
    Private(Option<String>),
    /// `proxy-revalidate`
    ProxyRevalidate,
    /// `s-maxage=<seconds>`
    SMaxAge(Seconds),
    /// `immutable`
    Immutable,
    /// `stale-while-revalidate=<seconds>`
    StaleWhileRevalidate(Seconds),
    /// `stale-if-error=<seconds>`
    StaleIfError(Seconds),

    /// Any other directive, with its (lower-cased) name and optional value.
    Custom(String, Option<String>),
}

static_str_error! {
    pub struct InvalidCacheDirective = "invalid cache directive";
}

impl CacheDirective {
    /// The directive name as written on the wire.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NoCache(_) => "no-cache",
            Self::NoStore => "no-store",
            Self::NoTransform => "no-transform",
            Self::OnlyIfCached => "only-if-cached",
            Self::MaxAge(_) => "max-age",
            Self::MaxStale(_) => "max-stale",
            Self::MinFresh(_) => "min-fresh",
            Self::MustRevalidate => "must-revalidate",
            Self::MustUnderstand => "must-understand",
            Self::Public => "public",
            Self::Private(_) => "private",
            Self::ProxyRevalidate => "proxy-revalidate",
            Self::SMaxAge(_) => "s-maxage",
            Self::Immutable => "immutable",
            Self::StaleWhileRevalidate(_) => "stale-while-revalidate",
            Self::StaleIfError(_) => "stale-if-error",
            Self::Custom(name, _) => name,
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a, _), Self::Custom(b, _)) => a == b,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

fn parse_seconds(name: &str, value: Option<&str>) -> Seconds {
    match value.map(str::parse::<Seconds>) {
        Some(Ok(seconds)) => seconds,
        Some(Err(err)) => {
            tracing::trace!("invalid seconds for cache directive '{name}', using 0: {err}");
            Seconds::default()
        }
        None => Seconds::default(),
    }
}

impl FromStr for CacheDirective {
    type Err = InvalidCacheDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(unquote(value.trim()))),
            None => (s.trim(), None),
        };
        if !is_token(name) {
            return Err(InvalidCacheDirective);
        }
        let name = name.to_ascii_lowercase();
        let value = value.as_deref();
        let field_names = || value.map(str::to_owned);

        Ok(match name.as_str() {
            "no-cache" => Self::NoCache(field_names()),
            "no-store" => Self::NoStore,
            "no-transform" => Self::NoTransform,
            "only-if-cached" => Self::OnlyIfCached,
            "max-age" => Self::MaxAge(parse_seconds(&name, value)),
            "max-stale" => Self::MaxStale(value.map(|v| parse_seconds(&name, Some(v)))),
            "min-fresh" => Self::MinFresh(parse_seconds(&name, value)),
            "must-revalidate" => Self::MustRevalidate,
            "must-understand" => Self::MustUnderstand,
            "public" => Self::Public,
            "private" => Self::Private(field_names()),
            "proxy-revalidate" => Self::ProxyRevalidate,
            "s-maxage" => Self::SMaxAge(parse_seconds(&name, value)),
            "immutable" => Self::Immutable,
            "stale-while-revalidate" => Self::StaleWhileRevalidate(parse_seconds(&name, value)),
            "stale-if-error" => Self::StaleIfError(parse_seconds(&name, value)),
            _ => Self::Custom(name, value.map(str::to_owned)),
        })
    }
}

impl fmt::Display for CacheDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::MaxAge(secs)
            | Self::MinFresh(secs)
            | Self::SMaxAge(secs)
            | Self::StaleWhileRevalidate(secs)
            | Self::StaleIfError(secs)
            | Self::MaxStale(Some(secs)) => write!(f, "={secs}"),
            Self::NoCache(Some(fields)) | Self::Private(Some(fields)) => {
                write!(f, "={}", quote(fields))
            }
            Self::Custom(_, Some(value)) if is_token(value) => write!(f, "={value}"),
            Self::Custom(_, Some(value)) => write!(f, "={}", quote(value)),
            _ => Ok(()),
        }
    }
}

macro_rules! flag_getters {
    ($($(#[$m:meta])* $fn_name:ident => $pat:pat,)+) => {
        $(
            $(#[$m])*
            #[must_use]
            pub fn $fn_name(&self) -> bool {
                self.0.iter().any(|d| matches!(d, $pat))
            }
        )+
    };
}

impl CacheControl {
    /// Construct a new empty `CacheControl` header.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Iterate over the directives.
    pub fn iter(&self) -> impl Iterator<Item = &CacheDirective> {
        self.0.iter()
    }

    /// Insert a directive, replacing an existing directive of the same kind.
    pub fn insert(&mut self, directive: CacheDirective) -> &mut Self {
        match self.0.iter_mut().find(|d| d.same_kind(&directive)) {
            Some(existing) => *existing = directive,
            None => self.0.push(directive),
        }
        self
    }

    /// Get the value of a directive by name, including custom ones.
    ///
    /// Returns `Some("")` for directives without a value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let directive = self
            .0
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))?;
        let s = directive.to_string();
        Some(match s.split_once('=') {
            Some((_, value)) => unquote(value).into_owned(),
            None => String::new(),
        })
    }

    // getters

    flag_getters! {
        /// Check if the `no-cache` directive is set.
        no_cache => CacheDirective::NoCache(_),
        /// Check if the `no-store` directive is set.
        no_store => CacheDirective::NoStore,
        /// Check if the `no-transform` directive is set.
        no_transform => CacheDirective::NoTransform,
        /// Check if the `only-if-cached` directive is set.
        only_if_cached => CacheDirective::OnlyIfCached,
        /// Check if the `public` directive is set.
        public => CacheDirective::Public,
        /// Check if the `private` directive is set.
        private => CacheDirective::Private(_),
        /// Check if the `immutable` directive is set.
        immutable => CacheDirective::Immutable,
        /// Check if the `must-revalidate` directive is set.
        must_revalidate => CacheDirective::MustRevalidate,
        /// Check if the `must-understand` directive is set.
        must_understand => CacheDirective::MustUnderstand,
        /// Check if the `proxy-revalidate` directive is set.
        proxy_revalidate => CacheDirective::ProxyRevalidate,
    }

    fn seconds(&self, f: impl Fn(&CacheDirective) -> Option<Seconds>) -> Option<Duration> {
        self.0.iter().find_map(f).map(Into::into)
    }

    /// Get the value of the `max-age` directive if set.
    #[must_use]
    pub fn max_age(&self) -> Option<Duration> {
        self.seconds(|d| match d {
            CacheDirective::MaxAge(secs) => Some(*secs),
            _ => None,
        })
    }

    /// Get the value of the `max-stale` directive if set.
    ///
    /// A `max-stale` directive without value accepts any staleness,
    /// which is returned as [`Duration::MAX`].
    #[must_use]
    pub fn max_stale(&self) -> Option<Duration> {
        self.0.iter().find_map(|d| match d {
            CacheDirective::MaxStale(secs) => Some(secs.map_or(Duration::MAX, Into::into)),
            _ => None,
        })
    }

    /// Get the value of the `min-fresh` directive if set.
    #[must_use]
    pub fn min_fresh(&self) -> Option<Duration> {
        self.seconds(|d| match d {
            CacheDirective::MinFresh(secs) => Some(*secs),
            _ => None,
        })
    }

    /// Get the value of the `s-maxage` directive if set.
    #[must_use]
    pub fn s_max_age(&self) -> Option<Duration> {
        self.seconds(|d| match d {
            CacheDirective::SMaxAge(secs) => Some(*secs),
            _ => None,
        })
    }

    /// Get the value of the `stale-while-revalidate` directive if set.
    #[must_use]
    pub fn stale_while_revalidate(&self) -> Option<Duration> {
        self.seconds(|d| match d {
            CacheDirective::StaleWhileRevalidate(secs) => Some(*secs),
            _ => None,
        })
    }

    /// Get the value of the `stale-if-error` directive if set.
    #[must_use]
    pub fn stale_if_error(&self) -> Option<Duration> {
        self.seconds(|d| match d {
            CacheDirective::StaleIfError(secs) => Some(*secs),
            _ => None,
        })
    }

    // setters

    generate_set_and_with! {
        /// Set the `no-cache` directive.
        pub fn no_cache(mut self) -> Self {
            self.insert(CacheDirective::NoCache(None));
            self
        }
    }

    generate_set_and_with! {
        /// Set the `no-store` directive.
        pub fn no_store(mut self) -> Self {
            self.insert(CacheDirective::NoStore);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `no-transform` directive.
        pub fn no_transform(mut self) -> Self {
            self.insert(CacheDirective::NoTransform);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `only-if-cached` directive.
        pub fn only_if_cached(mut self) -> Self {
            self.insert(CacheDirective::OnlyIfCached);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `private` directive.
        pub fn private(mut self) -> Self {
            self.insert(CacheDirective::Private(None));
            self
        }
    }

    generate_set_and_with! {
        /// Set the `public` directive.
        pub fn public(mut self) -> Self {
            self.insert(CacheDirective::Public);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `immutable` directive.
        pub fn immutable(mut self) -> Self {
            self.insert(CacheDirective::Immutable);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `must-revalidate` directive.
        pub fn must_revalidate(mut self) -> Self {
            self.insert(CacheDirective::MustRevalidate);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `must-understand` directive.
        pub fn must_understand(mut self) -> Self {
            self.insert(CacheDirective::MustUnderstand);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `proxy-revalidate` directive.
        pub fn proxy_revalidate(mut self) -> Self {
            self.insert(CacheDirective::ProxyRevalidate);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `max-age` directive, truncated to whole seconds.
        pub fn max_age(mut self, dur: Duration) -> Self {
            self.insert(CacheDirective::MaxAge(dur.into()));
            self
        }
    }

    generate_set_and_with! {
        /// Set the `max-stale` directive, truncated to whole seconds.
        pub fn max_stale(mut self, dur: Duration) -> Self {
            self.insert(CacheDirective::MaxStale(Some(dur.into())));
            self
        }
    }

    generate_set_and_with! {
        /// Set the `min-fresh` directive, truncated to whole seconds.
        pub fn min_fresh(mut self, dur: Duration) -> Self {
            self.insert(CacheDirective::MinFresh(dur.into()));
            self
        }
    }

    generate_set_and_with! {
        /// Set the `s-maxage` directive, truncated to whole seconds.
        pub fn s_max_age(mut self, dur: Duration) -> Self {
            self.insert(CacheDirective::SMaxAge(dur.into()));
            self
        }
    }

    generate_set_and_with! {
        /// Set the `stale-while-revalidate` directive, truncated to whole seconds.
        pub fn stale_while_revalidate(mut self, dur: Duration) -> Self {
            self.insert(CacheDirective::StaleWhileRevalidate(dur.into()));
            self
        }
    }

    generate_set_and_with! {
        /// Set the `stale-if-error` directive, truncated to whole seconds.
        pub fn stale_if_error(mut self, dur: Duration) -> Self {
            self.insert(CacheDirective::StaleIfError(dur.into()));
            self
        }
    }
}

impl FromIterator<CacheDirective> for CacheControl {
    fn from_iter<I: IntoIterator<Item = CacheDirective>>(iter: I) -> Self {
        let mut cc = Self::new();
        for directive in iter {
            cc.insert(directive);
        }
        cc
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        csv::fmt_comma_delimited(f, self.0.iter())
    }
}

impl TypedHeader for CacheControl {
    fn name() -> &'static http::HeaderName {
        &http::header::CACHE_CONTROL
    }
}

impl HeaderDecode for CacheControl {
    fn decode<'i, I: Iterator<Item = &'i str>>(values: &mut I) -> Result<Self, Error> {
        let cc: Self = csv::from_comma_delimited(values);
        if cc.0.is_empty() {
            tracing::debug!("failed to decode cache-control header: no directives");
            return Err(Error::invalid());
        }
        Ok(cc)
    }
}

impl HeaderEncode for CacheControl {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        if !self.0.is_empty() {
            values.extend(::std::iter::once(self.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_parse_multiple_headers() {
        let cc = test_decode::<CacheControl>(&["no-cache", "private"]).unwrap();
        assert_eq!(
            cc,
            CacheControl::new().with_no_cache().with_private()
        );
        assert!(cc.no_cache());
        assert!(cc.private());
        assert!(!cc.public());
    }

    #[test]
    fn test_parse_argument() {
        assert_eq!(
            test_decode::<CacheControl>(&["max-age=100, private"]).unwrap(),
            CacheControl::new()
                .with_max_age(Duration::from_secs(100))
                .with_private()
        );
    }

    #[test]
    fn test_parse_quote_form() {
        assert_eq!(
            test_decode::<CacheControl>(&["max-age=\"200\""]).unwrap(),
            CacheControl::new().with_max_age(Duration::from_secs(200))
        );
    }

    #[test]
    fn test_parse_invalid_seconds_default_to_zero() {
        let cc = test_decode::<CacheControl>(&["max-age=soon, s-maxage=-5"]).unwrap();
        assert_eq!(cc.max_age(), Some(Duration::ZERO));
        assert_eq!(cc.s_max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn test_parse_field_names() {
        let cc = test_decode::<CacheControl>(&[r#"private="set-cookie, x-id", no-cache"#]).unwrap();
        assert_eq!(
            cc.0,
            vec![
                CacheDirective::Private(Some("set-cookie, x-id".to_owned())),
                CacheDirective::NoCache(None),
            ]
        );
        assert_eq!(cc.get("private").as_deref(), Some("set-cookie, x-id"));
        assert_eq!(test_encode(cc), [r#"private="set-cookie, x-id", no-cache"#]);
    }

    #[test]
    fn test_parse_extension() {
        let cc = test_decode::<CacheControl>(&["foo, Bar=baz, community=\"UCI rocks\""]).unwrap();
        assert_eq!(
            cc.0,
            vec![
                CacheDirective::Custom("foo".to_owned(), None),
                CacheDirective::Custom("bar".to_owned(), Some("baz".to_owned())),
                CacheDirective::Custom("community".to_owned(), Some("UCI rocks".to_owned())),
            ]
        );
        assert_eq!(cc.get("foo").as_deref(), Some(""));
        assert_eq!(cc.get("bar").as_deref(), Some("baz"));
        assert_eq!(
            cc.to_string(),
            r#"foo, bar=baz, community="UCI rocks""#
        );
    }

    #[test]
    fn test_parse_max_stale() {
        let cc = test_decode::<CacheControl>(&["max-stale"]).unwrap();
        assert_eq!(cc.max_stale(), Some(Duration::MAX));
        let cc = test_decode::<CacheControl>(&["max-stale=30"]).unwrap();
        assert_eq!(cc.max_stale(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_parse_bad_syntax() {
        assert_eq!(test_decode::<CacheControl>(&["\"no-cache\""]), None);
        assert_eq!(test_decode::<CacheControl>(&[""]), None);
    }

    #[test]
    fn setter_replaces_same_kind() {
        let mut cc = CacheControl::new().with_max_age(Duration::from_secs(1));
        cc.set_max_age(Duration::from_millis(2_500)).set_no_store();
        assert_eq!(cc.to_string(), "max-age=2, no-store");
    }

    #[test]
    fn encode_all_known() {
        let cc = CacheControl::new()
            .with_no_transform()
            .with_only_if_cached()
            .with_must_revalidate()
            .with_must_understand()
            .with_proxy_revalidate()
            .with_immutable()
            .with_min_fresh(Duration::from_secs(5))
            .with_stale_while_revalidate(Duration::from_secs(60))
            .with_stale_if_error(Duration::from_secs(120));
        let raw = cc.to_string();
        assert_eq!(
            raw,
            "no-transform, only-if-cached, must-revalidate, must-understand, proxy-revalidate, \
             immutable, min-fresh=5, stale-while-revalidate=60, stale-if-error=120"
        );
        assert_eq!(test_decode::<CacheControl>(&[raw.as_str()]), Some(cc));
    }

    #[test]
    fn encode_empty_is_nothing() {
        assert!(test_encode(CacheControl::new()).is_empty());
    }

    #[test]
    fn empty_field_list_roundtrips() {
        for directive in [
            CacheDirective::NoCache(Some(String::new())),
            CacheDirective::Private(Some(String::new())),
            CacheDirective::NoCache(None),
        ] {
            let cc = CacheControl::from_iter([directive]);
            let values = test_encode(cc.clone());
            assert_eq!(test_decode(&[values[0].as_str()]), Some(cc));
        }
        assert_eq!(
            "no-cache=\"\"".parse(),
            Ok(CacheDirective::NoCache(Some(String::new())))
        );
    }
}
