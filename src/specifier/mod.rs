//! Value types which headers are composed of: media types, codings,
//! charsets, languages, range units and quality weighted values.

mod media_type;
mod quality_value;
mod range_unit;
mod token;

pub use self::media_type::{InvalidMediaType, MediaType};
pub use self::quality_value::{InvalidQuality, Quality, QualityValue, parse_quality_list};
pub use self::range_unit::{InvalidRangeUnit, RangeUnit};
pub use self::token::{
    Charset, Encoding, InvalidCharset, InvalidEncoding, InvalidLanguage, Language,
};
