//! Input parser.

mod error;
mod iter;


use core::mem;
use core::ops;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::Iter;

type Result<T> = std::result::Result<T, IStrError>;

use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Index of the data in the original input.
    index: Size,
}

impl IStr {
    /// Construct a new input processor over the whole of `data`.
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self::with_index(data, Size::ZERO)
    }

    #[inline]
    fn with_index(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Construct an iterator over the current input.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the whole next line as `T`, errors if there are no more lines.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the whole next line as `T`, returns `Ok(None)` if there are no
    /// more lines.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(Line(value)) = self.try_next()? else {
            return Ok(None);
        };

        Ok(Some(value))
    }

    /// Shorthand for using [Ws] to scan newlines.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Try to parse the next whitespace-delimited word.
    fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split once at the given byte or until the end of string, returning
    /// the part before it. The byte itself is consumed.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = mem::take(&mut self.data);
            self.index.advance(data.len());
            return Some(IStr::with_index(data, index));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(IStr::with_index(data, index))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;
        Some(Self::with_index(self.data.get(range)?, index))
    }

    /// The span covering the rest of the input.
    #[inline]
    fn rest(&self) -> ops::Range<Size> {
        self.index..self.index.saturating_add(Size::new(self.data.len()))
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Optionally try to consume input, ignoring leading whitespace by
    /// default.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedInteger
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(n) = str::parse(string) else {
                    return Err(IStrError::new(index.saturating_add(n)..p.index, ErrorKind::NotInteger(string)));
                };

                Ok(Some(n))
            }
        }
    };
}

integer!(u32);
integer!(u64);
integer!(i32);
integer!(i64);

/// Consumes the rest of the input as a string.
impl FromInput for &str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let data = mem::take(&mut p.data);
        p.index = index.saturating_add(Size::new(data.len()));

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

/// Parse a whole line, failing if anything but whitespace follows the value
/// on it.
///
/// The newline terminating the line is consumed, so a final newline at the
/// end of the input does not produce an extra empty line.
pub struct Line<T>(pub T);

impl<T> FromInput for Line<T>
where
    T: FromInput,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedLine
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(mut line) = p.split_once(NL) else {
            return Ok(None);
        };

        let value = line.next::<T>()?;
        line.ws()?;

        if !line.is_empty() {
            return Err(IStrError::new(
                line.rest(),
                ErrorKind::TrailingInput(line.as_bstr()),
            ));
        }

        Ok(Some(Self(value)))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());

        let Some(data) = p.data.get(..n) else {
            return Ok(Some(Self(0)));
        };

        p.advance(n);
        Ok(Some(Self(memchr::memchr_iter(NL, data).count())))
    }
}
