//! Support library shared by the days of a year.
//!
//! Days are declared with [entry!], which takes care of option parsing,
//! loading the input, printing answers and benching.

pub mod cli;
pub mod env;
pub mod input;
mod macros;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, Line, Ws};
    pub use anyhow::{anyhow, bail, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}
