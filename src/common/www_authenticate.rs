use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as ENGINE;

use super::authorization::{
    BASIC_SCHEME, BEARER_SCHEME, DIGEST_SCHEME, MUTUAL_SCHEME, NEGOTIATE_SCHEME, OAUTH_SCHEME,
    decode_base64, fmt_scheme_params, split_scheme,
};
use crate::util::{Params, csv, parse_params};

/// An authentication challenge, as found in `WWW-Authenticate`
/// and `Proxy-Authenticate`, defined in [RFC7235](https://tools.ietf.org/html/rfc7235#section-2.1).
///
/// ```text
/// challenge   = auth-scheme [ 1*SP ( token68 / #auth-param ) ]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Challenge {
    /// `Basic` challenge, usually carrying a `realm` and `charset`.
    Basic(Params),
    /// `Bearer` challenge.
    Bearer(Params),
    /// `Digest` challenge.
    Digest(Params),
    /// `OAuth` challenge.
    OAuth(Params),
    /// `Mutual` challenge.
    Mutual(Params),
    /// `Negotiate` challenge, with an optional server token.
    Negotiate(Option<Vec<u8>>),
    /// Any other scheme, with its parameters.
    Custom {
        /// The scheme, as received.
        scheme: String,
        /// The auth parameters.
        params: Params,
    },
}

impl Challenge {
    /// Create a `Basic` challenge for the given realm.
    pub fn basic(realm: impl Into<String>) -> Self {
        Self::Basic(Params::from([("realm", realm.into())]))
    }

    /// Create a `Bearer` challenge for the given realm.
    pub fn bearer(realm: impl Into<String>) -> Self {
        Self::Bearer(Params::from([("realm", realm.into())]))
    }

    /// The auth scheme of this challenge.
    #[must_use]
    pub fn scheme(&self) -> &str {
        match self {
            Self::Basic(_) => BASIC_SCHEME,
            Self::Bearer(_) => BEARER_SCHEME,
            Self::Digest(_) => DIGEST_SCHEME,
            Self::OAuth(_) => OAUTH_SCHEME,
            Self::Mutual(_) => MUTUAL_SCHEME,
            Self::Negotiate(_) => NEGOTIATE_SCHEME,
            Self::Custom { scheme, .. } => scheme,
        }
    }

    /// The auth parameters of this challenge, `None` for `Negotiate`.
    #[must_use]
    pub fn params(&self) -> Option<&Params> {
        match self {
            Self::Basic(params)
            | Self::Bearer(params)
            | Self::Digest(params)
            | Self::OAuth(params)
            | Self::Mutual(params)
            | Self::Custom { params, .. } => Some(params),
            Self::Negotiate(_) => None,
        }
    }

    /// The `realm` parameter, if any.
    #[must_use]
    pub fn realm(&self) -> Option<&str> {
        self.params().and_then(|params| params.get("realm"))
    }
}

impl FromStr for Challenge {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, rest) = split_scheme(s).ok_or_else(crate::Error::invalid)?;
        let is = |name: &str| scheme.eq_ignore_ascii_case(name);

        if is(NEGOTIATE_SCHEME) {
            if rest.is_empty() {
                return Ok(Self::Negotiate(None));
            }
            return decode_base64(scheme, rest)
                .map(|token| Self::Negotiate(Some(token)))
                .ok_or_else(crate::Error::invalid);
        }

        let params = parse_params(rest, ',');
        Ok(if is(BASIC_SCHEME) {
            Self::Basic(params)
        } else if is(BEARER_SCHEME) {
            Self::Bearer(params)
        } else if is(DIGEST_SCHEME) {
            Self::Digest(params)
        } else if is(OAUTH_SCHEME) {
            Self::OAuth(params)
        } else if is(MUTUAL_SCHEME) {
            Self::Mutual(params)
        } else {
            Self::Custom {
                scheme: scheme.to_owned(),
                params,
            }
        })
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negotiate(None) => f.write_str(NEGOTIATE_SCHEME),
            Self::Negotiate(Some(token)) => {
                write!(f, "{NEGOTIATE_SCHEME} {}", ENGINE.encode(token))
            }
            Self::Basic(params) => fmt_scheme_params(f, BASIC_SCHEME, params, true),
            Self::Bearer(params) => fmt_scheme_params(f, BEARER_SCHEME, params, true),
            Self::Digest(params) => fmt_scheme_params(f, DIGEST_SCHEME, params, true),
            Self::OAuth(params) => fmt_scheme_params(f, OAUTH_SCHEME, params, true),
            Self::Mutual(params) => fmt_scheme_params(f, MUTUAL_SCHEME, params, true),
            Self::Custom { scheme, params } => fmt_scheme_params(f, scheme, params, true),
        }
    }
}

/// Reassemble the challenges of one or more raw values.
///
/// Challenge parameters are comma separated just like the challenges
/// themselves. An element whose leading token (up to the first space)
/// contains no `=` starts a new challenge, any other element continues the
/// previous one. This is a best-effort heuristic: a `token68` continuation
/// without padding is taken for a new scheme.
fn decode_challenges<'i, I>(values: &mut I) -> Vec<Challenge>
where
    I: Iterator<Item = &'i str>,
{
    let mut raw_challenges: Vec<String> = Vec::new();
    for element in values.flat_map(csv::split_csv_str) {
        let leading = element.split(' ').next().unwrap_or_default();
        if !leading.contains('=') {
            raw_challenges.push(element.to_owned());
        } else if let Some(current) = raw_challenges.last_mut() {
            current.push_str(", ");
            current.push_str(element);
        } else {
            tracing::trace!("dropping auth param without challenge: '{element}'");
        }
    }

    raw_challenges
        .iter()
        .filter_map(|raw| match raw.parse() {
            Ok(challenge) => Some(challenge),
            Err(err) => {
                tracing::trace!("dropping invalid challenge '{raw}': {err}");
                None
            }
        })
        .collect()
}

macro_rules! challenge_header {
    (
        #[header(name = $name:ident)]
        $(#[$m:meta])*
        pub struct $type:ident;
    ) => {
        $(#[$m])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $type(pub Vec<Challenge>);

        impl $type {
            /// Create a header holding a single challenge.
            #[must_use]
            pub fn new(challenge: Challenge) -> Self {
                Self(vec![challenge])
            }

            /// Iterate over the challenges.
            pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
                self.0.iter()
            }
        }

        impl FromIterator<Challenge> for $type {
            fn from_iter<I: IntoIterator<Item = Challenge>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl crate::TypedHeader for $type {
            fn name() -> &'static ::http::header::HeaderName {
                &::http::header::$name
            }
        }

        impl crate::HeaderDecode for $type {
            fn decode<'i, I>(values: &mut I) -> Result<Self, crate::Error>
            where
                I: Iterator<Item = &'i str>,
            {
                Ok(Self(decode_challenges(values)))
            }
        }

        impl crate::HeaderEncode for $type {
            fn encode<E: Extend<String>>(&self, values: &mut E) {
                values.extend(self.0.iter().map(ToString::to_string));
            }
        }
    };
}

challenge_header! {
    #[header(name = WWW_AUTHENTICATE)]
    /// `WWW-Authenticate` header, defined in [RFC7235](https://tools.ietf.org/html/rfc7235#section-4.1)
    ///
    /// The "WWW-Authenticate" header field indicates the authentication
    /// scheme(s) and parameters applicable to the target resource.
    ///
    /// Several challenges may be combined in a single value, they are
    /// always encoded as one value per challenge.
    ///
    /// # ABNF
    ///
    /// ```text
    /// WWW-Authenticate = 1#challenge
    /// ```
    ///
    /// # Example values
    ///
    /// * `Basic realm="simple"`
    /// * `Newauth realm="apps", type=1, title="Login to \"apps\"", Basic realm="simple"`
    ///
    /// # Example
    ///
    /// ```
    /// use headwise::{Challenge, HeaderMapExt, WwwAuthenticate};
    ///
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(
    ///     http::header::WWW_AUTHENTICATE,
    ///     r#"Newauth realm="apps", type=1, Basic realm="simple""#.parse().unwrap(),
    /// );
    ///
    /// let www: WwwAuthenticate = headers.typed_get().unwrap();
    /// assert_eq!(www.0[0].scheme(), "Newauth");
    /// assert_eq!(www.0[1], Challenge::basic("simple"));
    /// ```
    pub struct WwwAuthenticate;
}

challenge_header! {
    #[header(name = PROXY_AUTHENTICATE)]
    /// `Proxy-Authenticate` header, defined in [RFC7235](https://tools.ietf.org/html/rfc7235#section-4.3)
    ///
    /// The "Proxy-Authenticate" header field consists of at least one
    /// challenge that indicates the authentication scheme(s) and parameters
    /// applicable to the proxy for this effective request URI.
    pub struct ProxyAuthenticate;
}
