use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

/// Everything but RFC 8187 `attr-char` gets percent encoded.
const ATTR_CHAR_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Charsets supported for extended parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtCharset {
    /// `UTF-8`
    #[default]
    Utf8,
    /// `ISO-8859-1`
    Iso8859_1,
}

impl ExtCharset {
    fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Iso8859_1 => "ISO-8859-1",
        }
    }
}

/// An extended parameter value, defined in
/// [RFC8187](https://datatracker.ietf.org/doc/html/rfc8187#section-3.2).
///
/// Used to transport non-ASCII parameter values, most notably the
/// `filename*` parameter of `Content-Disposition`.
///
/// # ABNF
///
/// ```text
/// ext-value     = charset  "'" [ language ] "'" value-chars
/// charset       = "UTF-8" / "ISO-8859-1" / mime-charset
/// value-chars   = *( pct-encoded / attr-char )
/// ```
///
/// # Example
///
/// ```
/// use headwise::util::ExtValue;
///
/// let value: ExtValue = "UTF-8''%e2%82%ac%20rates".parse().unwrap();
/// assert_eq!(value.value(), "€ rates");
/// assert_eq!(value.to_string(), "UTF-8''%E2%82%AC%20rates");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtValue {
    charset: ExtCharset,
    language: Option<String>,
    value: String,
}

static_str_error! {
    pub struct InvalidExtValue = "invalid RFC 8187 extended value";
}

impl ExtValue {
    /// Create a new UTF-8 extended value without a language tag.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            charset: ExtCharset::Utf8,
            language: None,
            value: value.into(),
        }
    }

    generate_set_and_with! {
        /// Set the charset used when encoding.
        pub fn charset(mut self, charset: ExtCharset) -> Self {
            self.charset = charset;
            self
        }
    }

    generate_set_and_with! {
        /// Set the language tag.
        pub fn language(mut self, language: impl Into<String>) -> Self {
            self.language = Some(language.into());
            self
        }
    }

    /// The decoded value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume into the decoded value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// The charset of the encoded form.
    #[must_use]
    pub fn charset(&self) -> ExtCharset {
        self.charset
    }

    /// The language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl FromStr for ExtValue {
    type Err = InvalidExtValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '\'');
        let (Some(charset), Some(language), Some(encoded)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(InvalidExtValue);
        };

        let charset = if charset.eq_ignore_ascii_case("utf-8") {
            ExtCharset::Utf8
        } else if charset.eq_ignore_ascii_case("iso-8859-1") {
            ExtCharset::Iso8859_1
        } else {
            tracing::trace!("unsupported extended value charset: '{charset}'");
            return Err(InvalidExtValue);
        };

        let bytes: Vec<u8> = percent_decode_str(encoded).collect();
        let value = match charset {
            ExtCharset::Utf8 => String::from_utf8(bytes).map_err(|err| {
                tracing::trace!("extended value is not valid UTF-8: {err}");
                InvalidExtValue
            })?,
            ExtCharset::Iso8859_1 => bytes.into_iter().map(char::from).collect(),
        };

        Ok(Self {
            charset,
            language: (!language.is_empty()).then(|| language.to_owned()),
            value,
        })
    }
}

impl fmt::Display for ExtValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'{}'",
            self.charset.as_str(),
            self.language.as_deref().unwrap_or_default()
        )?;
        match self.charset {
            ExtCharset::Utf8 => {
                fmt::Display::fmt(
                    &percent_encode(self.value.as_bytes(), ATTR_CHAR_ENCODE_SET),
                    f,
                )
            }
            ExtCharset::Iso8859_1 => {
                let bytes: Vec<u8> = self
                    .value
                    .chars()
                    .filter_map(|c| u8::try_from(u32::from(c)).ok())
                    .collect();
                fmt::Display::fmt(&percent_encode(&bytes, ATTR_CHAR_ENCODE_SET), f)
            }
        }
    }
}
