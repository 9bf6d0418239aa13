pub mod formats;
pub mod subexport;
