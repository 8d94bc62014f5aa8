//! Day 1: Report Repair.
//!
//! Find the entries of an expense report which add up to 2020 and multiply
//! them together.

pub mod expense;

pub use self::expense::{
    find_pair, find_pair_product, find_triple, find_triple_product, Entry, ExpenseReport, Pair,
    Triple, Tuple,
};

/// The sum the entries of a qualifying tuple add up to.
pub const TARGET: i64 = 2020;

/// Product of the first pair of entries adding up to [TARGET], or zero.
pub fn part1(entries: &[i64]) -> i64 {
    answer(1, find_pair(entries, TARGET))
}

/// Product of the first triple of entries adding up to [TARGET], or zero.
pub fn part2(entries: &[i64]) -> i64 {
    answer(2, find_triple(entries, TARGET))
}

fn answer<const N: usize>(part: usize, tuple: Option<Tuple<i64, N>>) -> i64 {
    match tuple {
        Some(tuple) => {
            log::debug!("part {part}: {tuple}");
            tuple.product()
        }
        None => {
            log::warn!("part {part}: no entries add up to {TARGET}, answering 0");
            0
        }
    }
}
