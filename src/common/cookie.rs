use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::util::{HttpDate, Params, csv::split_unquoted, is_token, unquote, write_quoted};

/// An HTTP cookie, as set by a `Set-Cookie` header, defined in
/// [RFC6265](https://tools.ietf.org/html/rfc6265#section-4.1).
///
/// Attribute names are matched case-insensitively. Attributes which are
/// not known (e.g. `SameSite`) are kept as extensions and written back the
/// way they were given.
///
/// # ABNF
///
/// ```text
/// set-cookie-string = cookie-pair *( ";" SP cookie-av )
/// cookie-pair       = cookie-name "=" cookie-value
/// cookie-av         = expires-av / max-age-av / domain-av /
///                     path-av / secure-av / httponly-av /
///                     extension-av
/// ```
///
/// # Example
///
/// ```
/// use headwise::{Cookie, HttpDate};
///
/// let cookie = Cookie::new("id", "a3fWa")
///     .unwrap()
///     .with_expires(HttpDate::from_unix_seconds(1_445_412_480))
///     .with_path("/")
///     .with_secure(true)
///     .with_http_only(true)
///     .with_extension("SameSite", "Lax");
/// assert_eq!(
///     cookie.to_string(),
///     "id=a3fWa; Expires=Wed, 21 Oct 2015 07:28:00 GMT; Path=/; Secure; HttpOnly; SameSite=Lax",
/// );
///
/// assert!(Cookie::new("id", "a;b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
    expires: Option<HttpDate>,
    domain: Option<String>,
    path: Option<String>,
    max_age: Option<i64>,
    comment: Option<String>,
    secure: bool,
    http_only: bool,
    extensions: Params,
}

static_str_error! {
    pub struct InvalidCookie = "invalid cookie";
}

/// Returns `true` for a `cookie-value`: a possibly double quoted string of
/// `cookie-octet`s, which excludes whitespace, `"`, `,`, `;` and `\`.
fn is_cookie_value(s: &str) -> bool {
    let inner = s
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s);
    inner
        .bytes()
        .all(|b| matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E))
}

impl Cookie {
    /// Create a cookie without attributes.
    ///
    /// The name has to be a token and the value a `cookie-value`, as defined
    /// in [RFC6265](https://tools.ietf.org/html/rfc6265#section-4.1.1).
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, InvalidCookie> {
        let (name, value) = (name.into(), value.into());
        if !is_token(&name) || !is_cookie_value(&value) {
            return Err(InvalidCookie);
        }
        Ok(Self::from_pair(name, value))
    }

    // values read from the wire are kept as-is, even outside of cookie-octet
    fn from_pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires: None,
            domain: None,
            path: None,
            max_age: None,
            comment: None,
            secure: false,
            http_only: false,
            extensions: Params::new(),
        }
    }

    /// The cookie name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cookie value, as found on the wire.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The `Expires` attribute.
    #[must_use]
    pub fn expires(&self) -> Option<SystemTime> {
        self.expires.map(Into::into)
    }

    /// The `Domain` attribute.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The `Path` attribute.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The `Max-Age` attribute in seconds, zero or negative expires the cookie.
    #[must_use]
    pub fn max_age(&self) -> Option<i64> {
        self.max_age
    }

    /// The `Comment` attribute (RFC2109).
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Whether the `Secure` attribute is set.
    #[must_use]
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Whether the `HttpOnly` attribute is set.
    #[must_use]
    pub fn http_only(&self) -> bool {
        self.http_only
    }

    /// Attributes other than the known ones.
    #[must_use]
    pub fn extensions(&self) -> &Params {
        &self.extensions
    }

    generate_set_and_with! {
        /// Set the `Expires` attribute.
        pub fn expires(mut self, expires: impl Into<HttpDate>) -> Self {
            self.expires = Some(expires.into());
            self
        }
    }

    generate_set_and_with! {
        /// Set the `Domain` attribute.
        pub fn domain(mut self, domain: impl Into<String>) -> Self {
            self.domain = Some(domain.into());
            self
        }
    }

    generate_set_and_with! {
        /// Set the `Path` attribute.
        pub fn path(mut self, path: impl Into<String>) -> Self {
            self.path = Some(path.into());
            self
        }
    }

    generate_set_and_with! {
        /// Set the `Max-Age` attribute.
        pub fn max_age(mut self, seconds: i64) -> Self {
            self.max_age = Some(seconds);
            self
        }
    }

    generate_set_and_with! {
        /// Set the `Comment` attribute.
        pub fn comment(mut self, comment: impl Into<String>) -> Self {
            self.comment = Some(comment.into());
            self
        }
    }

    generate_set_and_with! {
        /// Set or clear the `Secure` attribute.
        pub fn secure(mut self, secure: bool) -> Self {
            self.secure = secure;
            self
        }
    }

    generate_set_and_with! {
        /// Set or clear the `HttpOnly` attribute.
        pub fn http_only(mut self, http_only: bool) -> Self {
            self.http_only = http_only;
            self
        }
    }

    generate_set_and_with! {
        /// Set an extension attribute, an empty value writes a bare attribute.
        pub fn extension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.extensions.insert(name, value);
            self
        }
    }
}

fn parse_pair(s: &str) -> Result<(&str, &str), InvalidCookie> {
    let (name, value) = s.split_once('=').ok_or(InvalidCookie)?;
    let name = name.trim();
    if !is_token(name) {
        return Err(InvalidCookie);
    }
    Ok((name, value.trim()))
}

impl FromStr for Cookie {
    type Err = InvalidCookie;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = split_unquoted(s, ';');
        let (name, value) = parse_pair(segments.next().unwrap_or_default())?;
        let mut cookie = Self::from_pair(name, value);

        for segment in segments.map(str::trim).filter(|s| !s.is_empty()) {
            let (attr, value) = match segment.split_once('=') {
                Some((attr, value)) => (attr.trim(), Some(value.trim())),
                None => (segment, None),
            };
            match (attr.to_ascii_lowercase().as_str(), value) {
                ("expires", Some(value)) => match value.parse() {
                    Ok(date) => cookie.expires = Some(date),
                    Err(err) => tracing::trace!("ignoring invalid cookie expires '{value}': {err}"),
                },
                ("max-age", Some(value)) => match value.parse() {
                    Ok(seconds) => cookie.max_age = Some(seconds),
                    Err(err) => tracing::trace!("ignoring invalid cookie max-age '{value}': {err}"),
                },
                ("domain", Some(value)) => cookie.domain = Some(value.to_owned()),
                ("path", Some(value)) => cookie.path = Some(value.to_owned()),
                ("comment", Some(value)) => cookie.comment = Some(unquote(value).into_owned()),
                ("secure", None) => cookie.secure = true,
                ("httponly", None) => cookie.http_only = true,
                (_, value) if is_token(attr) => {
                    cookie
                        .extensions
                        .insert(attr, value.map(|v| unquote(v).into_owned()).unwrap_or_default());
                }
                _ => tracing::trace!("ignoring invalid cookie attribute '{segment}'"),
            }
        }

        Ok(cookie)
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(expires) = &self.expires {
            write!(f, "; Expires={expires}")?;
        }
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={domain}")?;
        }
        if let Some(path) = &self.path {
            write!(f, "; Path={path}")?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={max_age}")?;
        }
        if let Some(comment) = &self.comment {
            f.write_str("; Comment=")?;
            write_quoted(f, comment)?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        if !self.extensions.is_empty() {
            f.write_str("; ")?;
            self.extensions.fmt_delimited(f, "; ", |_| false)?;
        }
        Ok(())
    }
}

/// `Set-Cookie` header, defined in [RFC6265](https://tools.ietf.org/html/rfc6265#section-4.1)
///
/// Unlike most list headers, `Set-Cookie` cannot be combined into a single
/// comma separated line: every cookie is its own header value.
///
/// # Example
///
/// ```
/// use headwise::{Cookie, HeaderMapExt, SetCookie};
///
/// let mut headers = http::HeaderMap::new();
/// headers.typed_insert(SetCookie(vec![
///     Cookie::new("a", "1").unwrap(),
///     Cookie::new("b", "2").unwrap().with_http_only(true),
/// ]));
/// let values: Vec<_> = headers.get_all("set-cookie").iter().collect();
/// assert_eq!(values, ["a=1", "b=2; HttpOnly"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCookie(pub Vec<Cookie>);

impl crate::TypedHeader for SetCookie {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::SET_COOKIE
    }
}

impl crate::HeaderDecode for SetCookie {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        Ok(Self(
            values
                .filter_map(|value| match value.parse() {
                    Ok(cookie) => Some(cookie),
                    Err(err) => {
                        tracing::trace!("dropping invalid set-cookie '{value}': {err}");
                        None
                    }
                })
                .collect(),
        ))
    }
}

impl crate::HeaderEncode for SetCookie {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        values.extend(self.0.iter().map(ToString::to_string));
    }
}

/// `Cookie` header, defined in [RFC6265](https://tools.ietf.org/html/rfc6265#section-5.4)
///
/// The cookies a user agent sends back, as `name=value` pairs only.
///
/// # Example values
///
/// * `SID=31d4d96e407aad42; lang=en-US`
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Cookies(pub Vec<Cookie>);

impl Cookies {
    /// Get the value of the first cookie with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|cookie| cookie.name == name)
            .map(Cookie::value)
    }
}

impl FromIterator<Cookie> for Cookies {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Cookies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cookie) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}={}", cookie.name, cookie.value)?;
        }
        Ok(())
    }
}

impl crate::TypedHeader for Cookies {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::COOKIE
    }
}

impl crate::HeaderDecode for Cookies {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        Ok(values
            .flat_map(|value| split_unquoted(value, ';'))
            .filter(|pair| !pair.trim().is_empty())
            .filter_map(|pair| match parse_pair(pair) {
                Ok((name, value)) => Some(Cookie::from_pair(name, value)),
                Err(err) => {
                    tracing::trace!("dropping invalid cookie pair '{pair}': {err}");
                    None
                }
            })
            .collect())
    }
}

impl crate::HeaderEncode for Cookies {
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
    fn parse_set_cookie() {
        let cookie: Cookie = "id=a3fWa; Expires=Wed, 21 Oct 2015 07:28:00 GMT; Max-Age=2592000; \
                              domain=example.com; PATH=/docs; Secure; HttpOnly; SameSite=Strict"
            .parse()
            .unwrap();
        assert_eq!(cookie.name(), "id");
        assert_eq!(cookie.value(), "a3fWa");
        assert_eq!(
            cookie.expires(),
            Some(HttpDate::from_unix_seconds(1_445_412_480).into())
        );
        assert_eq!(cookie.max_age(), Some(2_592_000));
        assert_eq!(cookie.domain(), Some("example.com"));
        assert_eq!(cookie.path(), Some("/docs"));
        assert!(cookie.secure());
        assert!(cookie.http_only());
        assert_eq!(cookie.extensions().get("SameSite"), Some("Strict"));
    }

    #[test]
    fn invalid_attributes_are_ignored() {
        let cookie: Cookie = "a=b; Expires=never; Max-Age=soon; Secure=yes; =x; Partitioned"
            .parse()
            .unwrap();
        assert_eq!(cookie.expires(), None);
        assert_eq!(cookie.max_age(), None);
        assert!(!cookie.secure());
        assert_eq!(cookie.extensions().get("secure"), Some("yes"));
        assert!(cookie.extensions().contains_key("partitioned"));
    }

    #[test]
    fn invalid_pair() {
        assert!("no-value".parse::<Cookie>().is_err());
        assert!("=value".parse::<Cookie>().is_err());
        assert!("".parse::<Cookie>().is_err());
    }

    #[test]
    fn attribute_roundtrip() {
        let cookie = Cookie::new("session", "\"quoted=value\"")
            .unwrap()
            .with_expires(HttpDate::from_unix_seconds(1_445_412_480))
            .with_domain("example.com")
            .with_path("/")
            .with_max_age(-1)
            .with_comment("for \"tracking\"; or not")
            .with_secure(true)
            .with_http_only(true)
            .with_extension("SameSite", "None")
            .with_extension("Partitioned", "");
        let raw = cookie.to_string();
        assert_eq!(
            raw,
            "session=\"quoted=value\"; Expires=Wed, 21 Oct 2015 07:28:00 GMT; Domain=example.com; \
             Path=/; Max-Age=-1; Comment=\"for \\\"tracking\\\"; or not\"; Secure; HttpOnly; \
             SameSite=None; Partitioned"
        );
        assert_eq!(raw.parse(), Ok(cookie));
    }

    #[test]
    fn constructor_rejects_what_cannot_be_written() {
        for (name, value) in [
            ("a", "x;y"),
            ("a", "x y"),
            ("a", "x,y"),
            ("a", "\"x"),
            ("a", "back\\slash"),
            ("a b", "x"),
            ("", "x"),
            ("a;", "x"),
        ] {
            assert_eq!(Cookie::new(name, value), Err(InvalidCookie), "{name:?}={value:?}");
        }
        assert!(Cookie::new("a", "").is_ok());
        assert!(Cookie::new("a", "\"\"").is_ok());
    }

    #[test]
    fn set_cookie_roundtrip_with_attributes() {
        let set_cookie = SetCookie(vec![
            Cookie::new("lang", "en-US")
                .unwrap()
                .with_path("/")
                .with_max_age(3600)
                .with_extension("SameSite", "Lax"),
            Cookie::new("sid", "\"31d4d96e407aad42\"")
                .unwrap()
                .with_domain("example.com")
                .with_secure(true)
                .with_http_only(true),
        ]);
        let values = test_encode(set_cookie.clone());
        assert_eq!(
            values,
            [
                "lang=en-US; Path=/; Max-Age=3600; SameSite=Lax",
                "sid=\"31d4d96e407aad42\"; Domain=example.com; Secure; HttpOnly",
            ]
        );
        let values: Vec<_> = values.iter().map(String::as_str).collect();
        assert_eq!(test_decode(&values), Some(set_cookie));
    }

    #[test]
    fn extension_names_keep_their_casing() {
        let cookie: Cookie = "a=b; SameSite=Strict; Partitioned".parse().unwrap();
        assert_eq!(cookie.extensions().get("samesite"), Some("Strict"));
        assert_eq!(cookie.to_string(), "a=b; SameSite=Strict; Partitioned");
        assert_eq!(cookie, "a=b; samesite=Strict; PARTITIONED".parse().unwrap());
    }

    #[test]
    fn set_cookie_lines() {
        let set_cookie: SetCookie =
            test_decode(&["a=1; Path=/", "broken", "b=2; Expires=Wed, 21 Oct 2015 07:28:00 GMT"])
                .unwrap();
        assert_eq!(set_cookie.0.len(), 2);
        assert_eq!(set_cookie.0[1].name(), "b");
        assert_eq!(
            test_encode(set_cookie),
            ["a=1; Path=/", "b=2; Expires=Wed, 21 Oct 2015 07:28:00 GMT"]
        );
    }

    #[test]
    fn request_cookies() {
        let cookies: Cookies =
            test_decode(&["SID=31d4d96e407aad42; lang=en-US", "theme=dark;;bad"]).unwrap();
        assert_eq!(cookies.0.len(), 3);
        assert_eq!(cookies.get("lang"), Some("en-US"));
        assert_eq!(cookies.get("theme"), Some("dark"));
        assert_eq!(
            test_encode(cookies),
            ["SID=31d4d96e407aad42; lang=en-US; theme=dark"]
        );
    }
}
