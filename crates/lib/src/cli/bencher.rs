use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Error, Result};

use crate::cli::{check_expected, Opts, Output, OutputEq, OutputKind, Percentiles, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time limit in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    ///
    /// The first error raised by `iter` ends the bench and is returned.
    #[inline]
    pub fn iter<T, O, E>(&mut self, opts: &Opts, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        Error: From<E>,
    {
        self.run(opts, |_: &O| Ok(()), iter)
    }

    /// Bench the given fn, checking every output against `expected`.
    #[inline]
    pub fn iter_expected<T, O, C, E>(&mut self, opts: &Opts, expected: C, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
        Error: From<E>,
    {
        self.run(opts, |value: &O| check_expected(opts, value, &expected), iter)
    }

    fn run<T, O, E, C>(&mut self, opts: &Opts, check: C, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        C: Fn(&O) -> Result<()>,
        Error: From<E>,
    {
        let stdout = std::io::stdout();
        let mut o = Output::new(stdout.lock(), opts.output_kind());
        self.run_with(&mut o, opts, check, iter)
    }

    pub(super) fn run_with<T, O, E, C>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        check: C,
        iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        C: Fn(&O) -> Result<()>,
        Error: From<E>,
    {
        let result = self.inner_run(o, opts, check, iter);

        // Plain errors are printed by `main`.
        if let (Err(e), OutputKind::Json) = (&result, opts.output_kind()) {
            o.error(e)?;
        }

        result
    }

    fn inner_run<T, O, E, C>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        check: C,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        C: Fn(&O) -> Result<()>,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut sample = || -> Result<Duration> {
            let before = Instant::now();
            let value = iter()?;
            let after = Instant::now();
            check(&value)?;
            black_box(value);
            Ok(after.duration_since(before))
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                sample()?;
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        let mut percentiles = Percentiles::new();
        percentiles.insert(5000, &samples);
        percentiles.insert(9500, &samples);
        percentiles.insert(9900, &samples);

        let min = samples.first().copied();
        let max = samples.last().copied();
        let sum = samples.iter().sum();
        let report = Report::new(samples.len(), min, max, sum, &percentiles);
        log::debug!("bench finished after {} samples", report.count);
        o.report(&report)?;
        Ok(())
    }
}
