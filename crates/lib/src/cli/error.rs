use core::fmt;
use core::ops::Range;
use std::path::Path;

use thiserror::Error;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Used in macros to associate the input position of an error with it.
#[doc(hidden)]
pub fn error_context<E>(path: &Path, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_range(&error);
    let pos = crate::env::pos_from(data.as_data(), span);

    error.context(ErrorContext {
        path: path.into(),
        pos,
    })
}

/// A line and column combination, both zero-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// The error might have been threaded through multiple layers of
/// processing, so look for the input error anywhere in the chain.
fn find_range(error: &anyhow::Error) -> Range<Size> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(|e| e.span.clone())
        .unwrap_or(Size::ZERO..Size::ZERO)
}

/// Where in the input an error happened.
#[derive(Debug, Error)]
#[error("{}:{pos}", .path.display())]
struct ErrorContext {
    path: Box<Path>,
    pos: LineCol,
}
