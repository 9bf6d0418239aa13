pub mod common;
pub mod ss;

pub use common::{explode_sub, ExplodeResult};
pub use ss::{explode_ss, DecodeError, DecodeOptions};
