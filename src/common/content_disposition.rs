// # References
//
// "The Content-Disposition Header Field" https://www.ietf.org/rfc/rfc2183.txt
// "The Content-Disposition Header Field in the Hypertext Transfer Protocol (HTTP)" https://www.ietf.org/rfc/rfc6266.txt
// "Returning Values from Forms: multipart/form-data" https://www.ietf.org/rfc/rfc7578.txt
// Browser conformance tests at: http://greenbytes.de/tech/tc2231/
// IANA assignment: http://www.iana.org/assignments/cont-disp/cont-disp.xhtml

use std::fmt;
use std::str::FromStr;

use crate::util::{ExtValue, parse_token_params, write_quoted};

/// A `Content-Disposition` header, (re)defined in [RFC6266](https://tools.ietf.org/html/rfc6266).
///
/// The Content-Disposition response header field is used to convey
/// additional information about how to process the response payload, and
/// also can be used to attach additional metadata, such as the filename
/// to use when saving the response payload locally.
///
/// A `filename*` parameter, encoded as in [RFC8187](https://tools.ietf.org/html/rfc8187),
/// takes precedence over a plain `filename` parameter. When formatting, both
/// are written: an ISO-8859-1 safe `filename` for older clients, followed by
/// the faithful `filename*`.
///
/// # ABNF
///
/// ```text
/// content-disposition = "Content-Disposition" ":"
///                       disposition-type *( ";" disposition-parm )
///
/// disposition-type    = "inline" | "attachment" | disp-ext-type
///                       ; case-insensitive
///
/// disp-ext-type       = token
///
/// disposition-parm    = filename-parm | disp-ext-parm
///
/// filename-parm       = "filename" "=" value
///                     | "filename*" "=" ext-value
///
/// disp-ext-parm       = token "=" value
///                     | ext-token "=" ext-value
///
/// ext-token           = <the characters in token, followed by "*">
/// ```
///
/// # Example
///
/// ```
/// use headwise::ContentDisposition;
///
/// let cd: ContentDisposition = r#"attachment; filename="file.jpg""#.parse().unwrap();
/// assert!(cd.is_attachment());
/// assert_eq!(cd.filename(), Some("file.jpg"));
///
/// let cd = ContentDisposition::attachment(Some("€ rates.txt".to_owned()));
/// assert_eq!(
///     cd.to_string(),
///     r#"attachment; filename=" rates.txt"; filename*=UTF-8''%E2%82%AC%20rates.txt"#,
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentDisposition {
    /// Displayed inline, the default when the type is empty.
    Inline,
    /// Downloaded, optionally under the given filename.
    Attachment {
        /// The suggested filename.
        filename: Option<String>,
    },
    /// A part of a `multipart/form-data` body.
    FormData {
        /// The name of the form field.
        name: Option<String>,
        /// The original filename of an uploaded file.
        filename: Option<String>,
    },
}

static_str_error! {
    pub struct InvalidContentDisposition = "invalid content-disposition";
}

impl ContentDisposition {
    /// Construct a `Content-Disposition: inline` header.
    #[must_use]
    pub fn inline() -> Self {
        Self::Inline
    }

    /// Construct a `Content-Disposition: attachment` header.
    #[must_use]
    pub fn attachment(filename: Option<String>) -> Self {
        Self::Attachment { filename }
    }

    /// Construct a `Content-Disposition: form-data` header.
    #[must_use]
    pub fn form_data(name: Option<String>, filename: Option<String>) -> Self {
        Self::FormData { name, filename }
    }

    /// Check if the disposition-type is `inline`.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline)
    }

    /// Check if the disposition-type is `attachment`.
    #[must_use]
    pub fn is_attachment(&self) -> bool {
        matches!(self, Self::Attachment { .. })
    }

    /// Check if the disposition-type is `form-data`.
    #[must_use]
    pub fn is_form_data(&self) -> bool {
        matches!(self, Self::FormData { .. })
    }

    /// The filename, if any.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Inline => None,
            Self::Attachment { filename } | Self::FormData { filename, .. } => filename.as_deref(),
        }
    }

    /// The form field name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::FormData { name, .. } => name.as_deref(),
            Self::Inline | Self::Attachment { .. } => None,
        }
    }
}

impl FromStr for ContentDisposition {
    type Err = InvalidContentDisposition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, params) = parse_token_params(s, ';');

        let filename = match params.get("filename*").map(str::parse::<ExtValue>) {
            Some(Ok(value)) => Some(value.into_value()),
            Some(Err(err)) => {
                tracing::trace!("ignoring invalid content-disposition filename*: {err}");
                params.get("filename").map(str::to_owned)
            }
            None => params.get("filename").map(str::to_owned),
        };

        if kind.is_empty() || kind.eq_ignore_ascii_case("inline") {
            Ok(Self::Inline)
        } else if kind.eq_ignore_ascii_case("attachment") {
            Ok(Self::Attachment { filename })
        } else if kind.eq_ignore_ascii_case("form-data") {
            Ok(Self::FormData {
                name: params.get("name").map(str::to_owned),
                filename,
            })
        } else {
            tracing::trace!("unknown content-disposition type: '{kind}'");
            Err(InvalidContentDisposition)
        }
    }
}

fn fmt_filename(f: &mut fmt::Formatter<'_>, filename: &str) -> fmt::Result {
    let legacy: String = filename.chars().filter(|c| u32::from(*c) <= 0xFF).collect();
    f.write_str("; filename=")?;
    write_quoted(f, &legacy)?;
    write!(f, "; filename*={}", ExtValue::new(filename))
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("inline"),
            Self::Attachment { filename } => {
                f.write_str("attachment")?;
                filename.as_deref().map_or(Ok(()), |name| fmt_filename(f, name))
            }
            Self::FormData { name, filename } => {
                f.write_str("form-data")?;
                if let Some(name) = name {
                    f.write_str("; name=")?;
                    write_quoted(f, name)?;
                }
                filename.as_deref().map_or(Ok(()), |name| fmt_filename(f, name))
            }
        }
    }
}

impl crate::TypedHeader for ContentDisposition {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::CONTENT_DISPOSITION
    }
}

impl crate::HeaderDecode for ContentDisposition {
    fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
    where
        I: Iterator<Item = &'i str>,
    {
        crate::util::decode_single(values)
    }
}

impl crate::HeaderEncode for ContentDisposition {
    fn encode<E: Extend<String>>(&self, values: &mut E) {
        values.extend(::std::iter::once(self.to_string()));
    }
}
