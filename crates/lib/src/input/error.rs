use core::ops::Range;

use bstr::BStr;
use thiserror::Error;

use crate::env::Size;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("expected an integer")]
    ExpectedInteger,
    #[error("not utf-8")]
    NotUtf8,
    #[error("expected line")]
    ExpectedLine,
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(&'static BStr),
    #[error("unexpected eof")]
    UnexpectedEof,
}

/// Error raised through string processing.
#[derive(Debug, Error)]
#[error("{kind} (at {span:?})")]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
