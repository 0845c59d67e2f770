//! Part-name decoding: family, feature code, temperature grade.

mod family;
mod ring;

pub use family::Family;
pub use ring::{DecodedInfo, DecoderRing, DecoderRule, TempGrade};
