use aoc2020::{part1, part2, ExpenseReport};
use lib::prelude::*;

lib::entry! {
    input = "d01.txt",
    expect = (514579, 241861950),
    fn main(mut input: IStr) -> Result<(i64, i64)> {
        let report = input.next::<ExpenseReport>()?;
        log::debug!("loaded {} entries", report.len());
        Ok((part1(report.entries()), part2(report.entries())))
    }
}
