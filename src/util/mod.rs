use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

macro_rules! generate_set_and_with {
    (
        $(#[$outer_doc:meta])*
        $vis:vis fn $fn_name:ident(mut $self_token:ident) -> Self {
            $($body:tt)*
        }
    ) => {
        ::paste::paste! {
            $(#[$outer_doc])*
            #[must_use]
            $vis fn [<with_ $fn_name>](mut $self_token) -> Self {
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<set_ $fn_name>](&mut $self_token) -> &mut Self {
                $($body)*
            }
        }
    };
    (
        $(#[$outer_doc:meta])*
        $vis:vis fn $fn_name:ident(mut $self_token:ident, $($param_name:ident: $param_ty:ty),+ $(,)?) -> Self {
            $($body:tt)*
        }
    ) => {
        ::paste::paste! {
            $(#[$outer_doc])*
            #[must_use]
            $vis fn [<with_ $fn_name>](mut $self_token, $($param_name: $param_ty),+) -> Self {
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<set_ $fn_name>](&mut $self_token, $($param_name: $param_ty),+) -> &mut Self {
                $($body)*
            }
        }
    };
}

macro_rules! static_str_error {
    (
        $(#[$m:meta])*
        pub struct $name:ident = $desc:literal;
    ) => {
        $(#[$m])*
        #[derive(Debug, Default, Clone, PartialEq, Eq)]
        #[non_exhaustive]
        #[doc = concat!("Error: ", $desc, ".")]
        pub struct $name;

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), ".")]
            #[must_use]
            pub fn new() -> Self {
                Self
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($desc)
            }
        }

        impl ::std::error::Error for $name {}
    };
}

macro_rules! derive_serde_via_str {
    ($type:ty) => {
        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// A header holding exactly one value which is parsed and formatted
/// through the `FromStr` and `Display` impls of the inner type.
macro_rules! derive_header {
    ($type:ident($inner:ty), name: $name:ident) => {
        impl $type {
            /// Consume the header into its inner value.
            #[must_use]
            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $type {
            fn from(value: $inner) -> Self {
                Self(value)
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
                crate::util::decode_single(values).map($type)
            }
        }

        impl crate::HeaderEncode for $type {
            fn encode<E: Extend<String>>(&self, values: &mut E) {
                values.extend(::std::iter::once(self.0.to_string()));
            }
        }
    };
}

/// A comma separated list header. Elements which fail to parse are dropped
/// individually, an empty list encodes to nothing.
macro_rules! derive_list_header {
    (
        #[header(name = $name:ident)]
        $(#[$m:meta])*
        pub struct $type:ident(pub Vec<$t:ty>);
    ) => {
        $(#[$m])*
        pub struct $type(pub Vec<$t>);

        impl $type {
            /// Create a header holding a single value.
            #[must_use]
            pub fn new(value: $t) -> Self {
                Self(vec![value])
            }

            /// Iterate over the values of this header.
            pub fn iter(&self) -> impl Iterator<Item = &$t> {
                self.0.iter()
            }

            /// Consume the header into its values.
            #[must_use]
            pub fn into_values(self) -> Vec<$t> {
                self.0
            }
        }

        impl FromIterator<$t> for $type {
            fn from_iter<I: IntoIterator<Item = $t>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                crate::util::csv::fmt_comma_delimited(f, self.0.iter())
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
                Ok(Self(crate::util::csv::from_comma_delimited(values)))
            }
        }

        impl crate::HeaderEncode for $type {
            fn encode<E: Extend<String>>(&self, values: &mut E) {
                if !self.0.is_empty() {
                    values.extend(::std::iter::once(self.to_string()));
                }
            }
        }
    };
}

/// A negotiation list header of `token[;q=value]` elements,
/// stored sorted by descending quality with `q=0` entries removed.
macro_rules! derive_quality_list_header {
    (
        #[header(name = $name:ident, value = $t:ty)]
        $(#[$m:meta])*
        pub struct $type:ident;
    ) => {
        $(#[$m])*
        pub struct $type(pub Vec<$crate::specifier::QualityValue<$t>>);

        impl $type {
            /// Create a header holding a single value of full quality.
            #[must_use]
            pub fn new(value: $t) -> Self {
                Self(vec![$crate::specifier::QualityValue::new_value(value)])
            }

            /// Iterate over the weighted values, in preference order.
            pub fn iter(&self) -> impl Iterator<Item = &$crate::specifier::QualityValue<$t>> {
                self.0.iter()
            }

            /// Consume the header into its values, in preference order.
            #[must_use]
            pub fn into_values(self) -> Vec<$t> {
                self.0.into_iter().map(|qv| qv.value).collect()
            }
        }

        impl FromIterator<$crate::specifier::QualityValue<$t>> for $type {
            fn from_iter<I>(iter: I) -> Self
            where
                I: IntoIterator<Item = $crate::specifier::QualityValue<$t>>,
            {
                Self(iter.into_iter().collect())
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                crate::util::csv::fmt_comma_delimited(f, self.0.iter())
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
                Ok(Self($crate::specifier::parse_quality_list(values)))
            }
        }

        impl crate::HeaderEncode for $type {
            fn encode<E: Extend<String>>(&self, values: &mut E) {
                if !self.0.is_empty() {
                    values.extend(::std::iter::once(self.to_string()));
                }
            }
        }
    };
}

pub use self::entity::{EntityTag, InvalidEntityTag};
pub use self::ext_value::{ExtCharset, ExtValue, InvalidExtValue};
pub use self::http_date::{DateFormat, HttpDate, InvalidHttpDate};
pub use self::params::{Params, is_token, parse_params, parse_token_params, quote, unquote};
pub(crate) use self::params::write_quoted;
pub use self::seconds::{InvalidSeconds, Seconds};

pub(crate) mod csv;
mod entity;
mod ext_value;
mod http_date;
mod params;
mod seconds;

/// Decode the first raw value of a single-value header.
pub(crate) fn decode_single<'i, I, T>(values: &mut I) -> Result<T, Error>
where
    I: Iterator<Item = &'i str>,
    T: FromStr,
    T::Err: Display,
{
    let Some(value) = values.next() else {
        tracing::debug!("failed to decode single-value header: no values provided");
        return Err(Error::invalid());
    };
    value.trim().parse().map_err(|err| {
        tracing::debug!("failed to decode single-value header '{value}': {err}");
        Error::invalid()
    })
}
