use core::fmt;
use std::io;

/// The answers produced by a day, one per part.
pub trait Answers {
    /// Call `f` with each part of the answer in order.
    fn for_each_part(
        &self,
        f: &mut dyn FnMut(&dyn fmt::Display) -> io::Result<()>,
    ) -> io::Result<()>;
}

impl<A, B> Answers for (A, B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    #[inline]
    fn for_each_part(
        &self,
        f: &mut dyn FnMut(&dyn fmt::Display) -> io::Result<()>,
    ) -> io::Result<()> {
        f(&self.0)?;
        f(&self.1)
    }
}

macro_rules! single {
    ($ty:ty) => {
        impl Answers for $ty {
            #[inline]
            fn for_each_part(
                &self,
                f: &mut dyn FnMut(&dyn fmt::Display) -> io::Result<()>,
            ) -> io::Result<()> {
                f(self)
            }
        }
    };
}

single!(u32);
single!(u64);
single!(i32);
single!(i64);
