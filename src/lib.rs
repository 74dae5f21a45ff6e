//! # Typed HTTP Header Values
//!
//! headwise translates between the raw textual values stored for an HTTP
//! header and strongly-typed domain values: media types, quality sorted
//! negotiation lists, byte ranges, cache directives, cookies, credentials,
//! challenges and dates. Every typed value can be parsed from and formatted
//! back into its wire representation.
//!
//! # Why Typed?
//!
//! Or, why not stringly-typed? Types give the following advantages:
//!
//! - More difficult to typo, since typos in types should be caught by the compiler
//! - Parsing to a proper type by default
//! - Formatting that round-trips, so what you set is what you read back
//!
//! # Leniency
//!
//! Real-world header values are messy. Decoding never panics: a header that
//! cannot be understood decodes as absent, and a list element that cannot be
//! understood is dropped while its siblings are kept. Use
//! [`HeaderMapExt::typed_try_get`] if you need to tell "absent" and
//! "malformed" apart.
//!
//! # Header Stores
//!
//! The crate does not own header storage. Anything implementing
//! [`RawHeaders`] can be used, with an implementation provided for
//! [`http::HeaderMap`]:
//!
//! ```
//! use headwise::{HeaderAccessors, MediaType};
//!
//! let mut headers = http::HeaderMap::new();
//! headers.insert(
//!     http::header::ACCEPT,
//!     "text/html, application/xhtml+xml;q=0.5, */*;q=0.8".parse().unwrap(),
//! );
//!
//! assert_eq!(
//!     headers.accept(),
//!     vec![MediaType::HTML, MediaType::ANY, MediaType::XHTML],
//! );
//! ```
//!
//! # Defining Custom Headers
//!
//! Consider a Do Not Track header. It can be true or false, but it represents
//! that via the numerals `1` and `0`.
//!
//! ```
//! use headwise::{HeaderDecode, HeaderEncode, TypedHeader};
//! use http::HeaderName;
//!
//! struct Dnt(bool);
//!
//! impl TypedHeader for Dnt {
//!     fn name() -> &'static HeaderName {
//!         &http::header::DNT
//!     }
//! }
//!
//! impl HeaderDecode for Dnt {
//!     fn decode<'i, I>(values: &mut I) -> Result<Self, headwise::Error>
//!     where
//!         I: Iterator<Item = &'i str>,
//!     {
//!         match values.next().map(str::trim) {
//!             Some("0") => Ok(Dnt(false)),
//!             Some("1") => Ok(Dnt(true)),
//!             _ => Err(headwise::Error::invalid()),
//!         }
//!     }
//! }
//!
//! impl HeaderEncode for Dnt {
//!     fn encode<E: Extend<String>>(&self, values: &mut E) {
//!         let s = if self.0 { "1" } else { "0" };
//!         values.extend(std::iter::once(s.to_owned()));
//!     }
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod header;
#[doc(inline)]
pub use header::{Error, HeaderDecode, HeaderEncode, TypedHeader};

#[macro_use]
pub mod util;

pub mod specifier;

mod common;
pub use self::common::*;

mod accessors;
mod map_ext;
mod store;

pub use self::accessors::HeaderAccessors;
pub use self::map_ext::HeaderMapExt;
pub use self::store::RawHeaders;

pub use self::specifier::{
    Charset, Encoding, Language, MediaType, Quality, QualityValue, RangeUnit,
};
pub use self::util::{EntityTag, HttpDate, Params, Seconds};

pub mod dep {
    //! dependencies headwise exposes in its public API

    pub use http;
}
