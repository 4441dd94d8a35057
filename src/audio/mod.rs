//! Background music: decoding, and turning one track into a looped, trimmed, faded bed.

pub mod bed;
pub mod decode;
