use http::HeaderName;

use std::error;
use std::fmt::{self, Display, Formatter};

/// A trait for any object that will represent a header field and value.
///
/// This trait represents the identification of headers. Decoding and
/// encoding live in [`HeaderDecode`] and [`HeaderEncode`] so that a header
/// can support one direction only.
pub trait TypedHeader {
    /// The name of this header.
    fn name() -> &'static HeaderName;
}

/// Decode a [`TypedHeader`] from its raw string values.
pub trait HeaderDecode: TypedHeader {
    /// Decode this type from an iterator of raw header values,
    /// in the order they appear in the header store.
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i str>;
}

/// Encode a [`TypedHeader`] into raw string values.
pub trait HeaderEncode: TypedHeader {
    /// Encode this type to raw header values, and add them to a container
    /// which has `String` as each element.
    ///
    /// This function should be infallible. Values that cannot be represented
    /// are logged and skipped; encoding nothing removes the header.
    fn encode<E: Extend<String>>(&self, values: &mut E);

    /// Encode this [`TypedHeader`] to its first raw value, if any.
    fn encode_to_string(&self) -> Option<String> {
        let mut container = ExtendOnce(None);
        self.encode(&mut container);
        container.0
    }
}

struct ExtendOnce(Option<String>);

impl Extend<String> for ExtendOnce {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        if self.0.is_none() {
            self.0 = iter.into_iter().next();
        }
    }
}

/// Errors trying to decode a header.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    Invalid,
}

impl Error {
    /// Create an 'invalid' Error.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            kind: Kind::Invalid,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.kind {
            Kind::Invalid => f.write_str("invalid HTTP header"),
        }
    }
}

impl error::Error for Error {}
