//! Share-link parsing

pub mod explodes;

pub use explodes::{explode_ss, explode_sub, DecodeError, DecodeOptions, ExplodeResult};
