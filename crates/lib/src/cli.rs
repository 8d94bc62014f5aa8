//! CLI helpers.

mod answers;
mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

pub use self::answers::Answers;
pub use self::bencher::Bencher;
#[doc(hidden)]
pub use self::error::error_context;
use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
    /// Read input from this path instead of the default.
    pub(crate) input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options and install the stdout logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments, not including the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Some(number(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(number(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(number(&mut it, "--count")?);
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        return Ok(opts);

        fn number<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> Result<T>
        where
            T: core::str::FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            let value = it
                .next()
                .with_context(|| anyhow!("missing argument to `{name}`"))?;

            let value = value
                .to_str()
                .with_context(|| anyhow!("missing string argument to `{name}`"))?;

            value
                .parse()
                .with_context(|| anyhow!("bad argument to `{name}`"))
        }
    }

    /// Test if the input is the default one of the day, which is what any
    /// expected answers refer to.
    pub fn uses_default_input(&self) -> bool {
        self.input.is_none()
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Print the answers of a day to stdout.
pub fn answers<T>(opts: &Opts, value: &T) -> Result<()>
where
    T: ?Sized + Answers,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());
    o.answers(value)?;
    Ok(())
}

/// Check answers against the expected ones.
///
/// Expectations describe the default input, so with `--input` the check is
/// skipped.
pub fn check_expected<O, C>(opts: &Opts, value: &O, expected: &C) -> Result<()>
where
    O: ?Sized + fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if !opts.uses_default_input() {
        log::debug!("not checking answers against {expected:?} for a custom input");
        return Ok(());
    }

    if !value.output_eq(expected) {
        bail!("{value:?} (value) != {expected:?} (expected)");
    }

    Ok(())
}

/// Percentiles of a sorted set of samples, keyed by hundredths of a percent.
#[derive(Default)]
pub(crate) struct Percentiles {
    values: ArrayVec<(u16, Duration), 8>,
}

impl Percentiles {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record percentile `p` out of `samples`, which must be sorted.
    pub(crate) fn insert(&mut self, p: u16, samples: &[Duration]) {
        let Some(last) = samples.len().checked_sub(1) else {
            return;
        };

        let index = (samples.len() * usize::from(p) / 10000).min(last);

        if let Some(&sample) = samples.get(index) {
            let _ = self.values.try_push((p, sample));
        }
    }

    /// Get a recorded percentile, or zero if it wasn't recorded.
    pub(crate) fn get(&self, p: u16) -> Duration {
        self.values
            .iter()
            .find(|(n, _)| *n == p)
            .map(|(_, d)| *d)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    pub(crate) fn new(
        count: usize,
        min: Option<Duration>,
        max: Option<Duration>,
        sum: Duration,
        percentiles: &Percentiles,
    ) -> Self {
        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            p50: percentiles.get(5000),
            p95: percentiles.get(9500),
            p99: percentiles.get(9900),
            count,
            min: min.unwrap_or_default(),
            max: max.unwrap_or_default(),
            avg,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}
