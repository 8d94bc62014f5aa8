use core::ops::Range;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::cli::error::LineCol;
use crate::cli::Opts;
use crate::input::{IStr, NL};

#[cfg(test)]
mod tests;

/// A byte offset into the input being processed.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub(crate) const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column of the start of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let start = span.start.0.min(data.len());

    let Some(head) = data.get(..start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, head).count();

    let column = match memchr::memrchr(NL, head) {
        Some(n) => start - n - 1,
        None => start,
    };

    LineCol::new(line, column)
}

/// Load the input of a day.
///
/// The input is read from `read_path` unless overridden with `--input`, and
/// `path` is what errors refer to. The data is leaked since it lives for as
/// long as the process anyway, which is much easier to deal with than
/// lifetimes.
pub fn input(
    opts: &Opts,
    path: &'static str,
    read_path: &'static str,
) -> Result<(IStr, Box<Path>)> {
    let (path, read_path) = match &opts.input {
        Some(input) => (input.as_path(), input.as_path()),
        None => (Path::new(path), Path::new(read_path)),
    };

    let data = fs::read(read_path).with_context(|| anyhow!("{}", path.display()))?;
    log::debug!("{}: read {} bytes", path.display(), data.len());
    Ok((IStr::new(Vec::leak(data)), path.into()))
}
