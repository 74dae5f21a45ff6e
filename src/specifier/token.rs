use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::util::is_token;

macro_rules! token_type {
    (
        $(#[$m:meta])*
        pub struct $name:ident, error = $err:ident($desc:literal);
        $($(#[$cm:meta])* $const_name:ident => $const_value:literal,)*
    ) => {
        $(#[$m])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(Cow<'static, str>);

        static_str_error! {
            pub struct $err = $desc;
        }

        impl $name {
            $(
                $(#[$cm])*
                pub const $const_name: Self = Self(Cow::Borrowed($const_value));
            )*

            #[doc = concat!("Create a new [`", stringify!($name), "`] from a raw token.")]
            ///
            /// The token is trimmed and lower-cased.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, $err> {
                let raw = raw.as_ref().trim();
                if is_token(raw) {
                    Ok(Self(Cow::Owned(raw.to_ascii_lowercase())))
                } else {
                    Err($err)
                }
            }

            /// View the normalized token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if this is the `*` wildcard.
            #[must_use]
            pub fn is_any(&self) -> bool {
                self.as_str() == "*"
            }
        }

        impl FromStr for $name {
            type Err = $err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        derive_serde_via_str!($name);
    };
}

token_type! {
    /// A content or transfer coding, such as `gzip` or `chunked`.
    ///
    /// Used by `Accept-Encoding`, `Content-Encoding`, `Transfer-Encoding`
    /// and `TE`. Compared case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use headwise::Encoding;
    ///
    /// assert_eq!(Encoding::new("GZip").unwrap(), Encoding::GZIP);
    /// ```
    pub struct Encoding, error = InvalidEncoding("invalid content coding");

    /// `gzip`
    GZIP => "gzip",
    /// `deflate`
    DEFLATE => "deflate",
    /// `br`
    BR => "br",
    /// `zstd`
    ZSTD => "zstd",
    /// `compress`
    COMPRESS => "compress",
    /// `identity`
    IDENTITY => "identity",
    /// `chunked`, a transfer coding
    CHUNKED => "chunked",
    /// `trailers`, only meaningful in the `TE` header
    TRAILERS => "trailers",
    /// `*`, any coding
    ANY => "*",
}

token_type! {
    /// A charset, such as `utf-8`, as used by `Accept-Charset`.
    pub struct Charset, error = InvalidCharset("invalid charset");

    /// `utf-8`
    UTF_8 => "utf-8",
    /// `us-ascii`
    US_ASCII => "us-ascii",
    /// `iso-8859-1`
    ISO_8859_1 => "iso-8859-1",
    /// `*`, any charset
    ANY => "*",
}

token_type! {
    /// A language tag, such as `en-us`, as used by `Accept-Language`
    /// and `Content-Language`.
    ///
    /// Tags are lower-cased, sub-tags are not validated.
    pub struct Language, error = InvalidLanguage("invalid language tag");

    /// `*`, any language
    ANY => "*",
}

impl Language {
    /// The primary language sub-tag, e.g. `en` for `en-us`.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.as_str().split('-').next().unwrap_or_default()
    }
}
