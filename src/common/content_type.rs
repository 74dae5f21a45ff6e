use std::fmt;
use std::str::FromStr;

use crate::specifier::{Charset, MediaType};
use crate::util::{Params, parse_token_params};

/// `Content-Type` header, defined in
/// [RFC7231](https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.1.5)
///
/// The `Content-Type` header field indicates the media type of the
/// associated representation: either the representation enclosed in the
/// message payload or the selected representation, as determined by the
/// message semantics.  The indicated media type defines both the data
/// format and how that data is intended to be processed by a recipient,
/// within the scope of the received message semantics, after any content
/// codings indicated by Content-Encoding are decoded.
///
/// # ABNF
///
/// ```text
/// Content-Type = media-type
/// media-type   = type "/" subtype *( OWS ";" OWS parameter )
/// ```
///
/// # Example values
///
/// * `text/html; charset=utf-8`
/// * `application/json`
///
/// # Examples
///
/// ```
/// use headwise::{Charset, ContentType, MediaType};
///
/// let ct: ContentType = "Text/HTML; Charset=\"UTF-8\"".parse().unwrap();
/// assert_eq!(ct.media_type(), &MediaType::HTML);
/// assert_eq!(ct.charset(), Some(Charset::UTF_8));
///
/// let ct = ContentType::json().with_charset(Charset::UTF_8);
/// assert_eq!(ct.to_string(), "application/json; charset=utf-8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentType {
    media_type: MediaType,
    params: Params,
}

static_str_error! {
    pub struct InvalidContentType = "invalid content-type";
}

impl ContentType {
    /// Create a `Content-Type` header without parameters.
    #[must_use]
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            params: Params::new(),
        }
    }

    /// A constructor to easily create a `Content-Type: application/json` header.
    #[must_use]
    pub fn json() -> Self {
        Self::new(MediaType::JSON)
    }

    /// A constructor to easily create a `Content-Type: text/plain; charset=utf-8` header.
    #[must_use]
    pub fn text_utf8() -> Self {
        Self::new(MediaType::PLAIN).with_charset(Charset::UTF_8)
    }

    /// A constructor to easily create a `Content-Type: text/html; charset=utf-8` header.
    #[must_use]
    pub fn html_utf8() -> Self {
        Self::new(MediaType::HTML).with_charset(Charset::UTF_8)
    }

    /// A constructor to easily create a `Content-Type: application/x-www-form-urlencoded` header.
    #[must_use]
    pub fn form_url_encoded() -> Self {
        Self::new(MediaType::FORM_URL_ENCODED)
    }

    /// A constructor to easily create a `Content-Type: application/octet-stream` header.
    #[must_use]
    pub fn octet_stream() -> Self {
        Self::new(MediaType::OCTET_STREAM)
    }

    /// The media type, without parameters.
    #[must_use]
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Consume the header into its media type.
    #[must_use]
    pub fn into_media_type(self) -> MediaType {
        self.media_type
    }

    /// The parameters following the media type.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The value of a parameter, by case-insensitive name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The `charset` parameter, if present and valid.
    #[must_use]
    pub fn charset(&self) -> Option<Charset> {
        self.params.get("charset").and_then(|c| Charset::new(c).ok())
    }

    /// The `boundary` parameter of a multipart media type.
    #[must_use]
    pub fn boundary(&self) -> Option<&str> {
        self.params.get("boundary")
    }

    generate_set_and_with! {
        /// Set the `charset` parameter.
        pub fn charset(mut self, charset: Charset) -> Self {
            self.params.insert("charset", charset.as_str());
            self
        }
    }

    generate_set_and_with! {
        /// Set an arbitrary parameter.
        pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.params.insert(name, value);
            self
        }
    }
}

impl From<MediaType> for ContentType {
    fn from(media_type: MediaType) -> Self {
        Self::new(media_type)
    }
}

impl FromStr for ContentType {
    type Err = InvalidContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (media_type, params) = parse_token_params(s, ';');
        let media_type = MediaType::new(media_type).map_err(|err| {
            tracing::trace!("invalid content-type media type: {err}");
            InvalidContentType
        })?;
        Ok(Self { media_type, params })
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.media_type, f)?;
        if !self.params.is_empty() {
            f.write_str("; ")?;
            self.params.fmt_delimited(f, "; ", |_| false)?;
        }
        Ok(())
    }
}

impl crate::TypedHeader for ContentType {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::CONTENT_TYPE
    }
}

impl crate::HeaderDecode for ContentType {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        crate::util::decode_single(values)
    }
}

impl crate::HeaderEncode for ContentType {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        values.extend(::std::iter::once(self.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn json() {
        assert_eq!(
            test_decode::<ContentType>(&["application/json"]),
            Some(ContentType::json()),
        );
    }

    #[test]
    fn vendor_infix() {
        assert_eq!(
            test_decode::<ContentType>(&["application/x-json"]).unwrap().media_type(),
            &MediaType::JSON,
        );
    }

    #[test]
    fn params() {
        let ct = test_decode::<ContentType>(&[
            "multipart/form-data; boundary=\"----WebKitFormBoundary7MA4YWxk\"; charset=UTF-8",
        ])
        .unwrap();
        assert_eq!(ct.media_type(), &MediaType::MULTIPART_FORM_DATA);
        assert_eq!(ct.boundary(), Some("----WebKitFormBoundary7MA4YWxk"));
        assert_eq!(ct.charset(), Some(Charset::UTF_8));
        assert_eq!(
            test_encode(ct),
            ["multipart/form-data; boundary=----WebKitFormBoundary7MA4YWxk; charset=UTF-8"]
        );
    }

    #[test]
    fn quoted_params_on_encode() {
        let ct = ContentType::new(MediaType::PLAIN).with_param("format", "a b");
        assert_eq!(ct.to_string(), "text/plain; format=\"a b\"");
        assert_eq!(ct.to_string().parse(), Ok(ct));
    }

    #[test]
    fn setter_replaces() {
        let mut ct = ContentType::text_utf8();
        ct.set_charset(Charset::ISO_8859_1);
        assert_eq!(test_encode(ct), ["text/plain; charset=iso-8859-1"]);
    }

    #[test]
    fn invalid() {
        assert_eq!(test_decode::<ContentType>(&["text"]), None);
        assert_eq!(test_decode::<ContentType>(&["; charset=utf-8"]), None);
    }
}
