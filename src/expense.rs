//! Finding entries of an expense report which add up to a target.
//!
//! The search is exhaustive over ordered index tuples. Every index ranges
//! over the whole report, so an entry may be combined with itself.

use core::fmt;

use lib::input::{FromInput, IStr, IStrError, Line};
use num::traits::{One, WrappingAdd, WrappingMul, Zero};


/// A numeric entry that can be searched for.
///
/// Sums and products wrap around on overflow instead of panicking.
pub trait Entry: Copy + PartialEq + Zero + One + WrappingAdd + WrappingMul {}

impl<T> Entry for T where T: Copy + PartialEq + Zero + One + WrappingAdd + WrappingMul {}

/// Entries adding up to a target, along with the indexes they were taken
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuple<T, const N: usize> {
    pub indexes: [usize; N],
    pub entries: [T; N],
}

pub type Pair<T> = Tuple<T, 2>;
pub type Triple<T> = Tuple<T, 3>;

impl<T, const N: usize> Tuple<T, N>
where
    T: Entry,
{
    /// The product of all entries.
    pub fn product(&self) -> T {
        self.entries
            .iter()
            .fold(T::one(), |acc, entry| acc.wrapping_mul(entry))
    }

    /// The sum of all entries.
    pub fn sum(&self) -> T {
        self.entries
            .iter()
            .fold(T::zero(), |acc, entry| acc.wrapping_add(entry))
    }
}

impl<T, const N: usize> fmt::Display for Tuple<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, entry) in self.entries.iter().enumerate() {
            if n > 0 {
                f.write_str(" + ")?;
            }

            entry.fmt(f)?;
        }

        f.write_str(" (at")?;

        for index in &self.indexes {
            write!(f, " #{index}")?;
        }

        f.write_str(")")
    }
}

/// Find the first pair of entries adding up to `target`.
///
/// Pairs are visited with the first index in the outer loop and the second
/// in the inner loop.
pub fn find_pair<T>(numbers: &[T], target: T) -> Option<Pair<T>>
where
    T: Entry,
{
    for (p, a) in numbers.iter().enumerate() {
        for (q, b) in numbers.iter().enumerate() {
            if a.wrapping_add(b) == target {
                return Some(Tuple {
                    indexes: [p, q],
                    entries: [*a, *b],
                });
            }
        }
    }

    None
}

/// Find the first triple of entries adding up to `target`.
///
/// Triples are visited in nested order, outermost index first.
pub fn find_triple<T>(numbers: &[T], target: T) -> Option<Triple<T>>
where
    T: Entry,
{
    for (p, a) in numbers.iter().enumerate() {
        for (q, b) in numbers.iter().enumerate() {
            let ab = a.wrapping_add(b);

            for (r, c) in numbers.iter().enumerate() {
                if ab.wrapping_add(c) == target {
                    return Some(Tuple {
                        indexes: [p, q, r],
                        entries: [*a, *b, *c],
                    });
                }
            }
        }
    }

    None
}

/// The product of the first pair adding up to `target`.
///
/// Returns zero if there is no such pair, which can't be told apart from a
/// pair whose product is zero. Use [find_pair] to tell them apart.
pub fn find_pair_product<T>(numbers: &[T], target: T) -> T
where
    T: Entry,
{
    find_pair(numbers, target).map_or_else(T::zero, |pair| pair.product())
}

/// The product of the first triple adding up to `target`.
///
/// Returns zero if there is no such triple, see [find_pair_product].
pub fn find_triple_product<T>(numbers: &[T], target: T) -> T
where
    T: Entry,
{
    find_triple(numbers, target).map_or_else(T::zero, |triple| triple.product())
}

/// An expense report, one entry per line in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpenseReport {
    entries: Vec<i64>,
}

impl ExpenseReport {
    /// Construct a report out of the given entries.
    pub fn new(entries: Vec<i64>) -> Self {
        Self { entries }
    }

    /// The entries of the report.
    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromInput for ExpenseReport {
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>, IStrError> {
        let entries = p
            .iter::<Line<i64>>()
            .map(|line| line.map(|Line(entry)| entry))
            .collect::<Result<_, _>>()?;

        Ok(Some(Self { entries }))
    }
}
