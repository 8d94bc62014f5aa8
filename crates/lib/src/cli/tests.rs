use core::time::Duration;
use std::ffi::OsString;

use anyhow::anyhow;

use super::{check_expected, Bencher, Mode, OutputEq, Opts, Percentiles, Report};
use crate::cli::output::{Output, OutputKind};

fn parse(args: &[&str]) -> anyhow::Result<Opts> {
    Opts::parse_from(args.iter().map(OsString::from))
}

#[test]
fn test_parse_opts() {
    let opts = parse(&[]).unwrap();
    assert_eq!(opts.mode, Mode::Default);
    assert!(opts.input.is_none());

    let opts = parse(&["--bench", "--count", "10", "--input", "other.txt", "--json"]).unwrap();
    assert_eq!(opts.mode, Mode::Bench);
    assert_eq!(opts.count, Some(10));
    assert_eq!(opts.input.as_deref(), Some("other.txt".as_ref()));
    assert!(opts.json);

    let opts = parse(&["--verbose", "--", "--bench"]).unwrap();
    assert_eq!(opts.mode, Mode::Default);
    assert!(opts.verbose);
}

#[test]
fn test_parse_opts_errors() {
    assert!(parse(&["--bench", "--bench"]).is_err());
    assert!(parse(&["--count"]).is_err());
    assert!(parse(&["--warmup", "soon"]).is_err());
    assert!(parse(&["--input"]).is_err());

    let e = parse(&["--frobnicate"]).unwrap_err();
    assert_eq!(e.to_string(), "unsupported argument: --frobnicate");
}

#[test]
fn test_percentiles() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();

    let mut percentiles = Percentiles::new();
    percentiles.insert(5000, &samples);
    percentiles.insert(9900, &samples);
    percentiles.insert(9500, &[]);

    assert_eq!(percentiles.get(5000), Duration::from_millis(51));
    assert_eq!(percentiles.get(9900), Duration::from_millis(100));
    assert_eq!(percentiles.get(9500), Duration::ZERO);
}

#[test]
fn test_report() {
    let samples = [Duration::from_millis(1), Duration::from_millis(3)];

    let mut percentiles = Percentiles::new();
    percentiles.insert(5000, &samples);

    let report = Report::new(
        2,
        Some(samples[0]),
        Some(samples[1]),
        samples.iter().sum(),
        &percentiles,
    );

    assert_eq!(report.avg, Duration::from_millis(2));
    assert_eq!(report.p50, Duration::from_millis(3));
    assert_eq!(report.p99, Duration::ZERO);

    let mut total = Report::default();
    total += &report;
    total += &report;
    assert_eq!(total.count, 4);
    assert_eq!(total.max, Duration::from_millis(6));

    let empty = Report::new(0, None, None, Duration::ZERO, &Percentiles::new());
    assert_eq!(
        empty.to_string(),
        "count: 0, min: 0ns, max: 0ns, avg: 0ns, 50th: 0ns, 95th: 0ns, 99th: 0ns"
    );
}

#[test]
fn test_output_normal() {
    let mut o = Output::new(Vec::new(), OutputKind::Normal);
    o.answers(&(514579i64, 241861950i64)).unwrap();
    o.info("warming up").unwrap();

    let out = String::from_utf8(o.into_inner()).unwrap();
    assert_eq!(
        out,
        "part 1 result is 514579\npart 2 result is 241861950\ninfo: warming up\n"
    );
}

#[test]
fn test_output_json() {
    let mut o = Output::new(Vec::new(), OutputKind::Json);
    o.answers(&42u32).unwrap();
    o.error("boom").unwrap();

    let out = String::from_utf8(o.into_inner()).unwrap();
    assert_eq!(
        out,
        concat!(
            "{\"type\":\"answer\",\"data\":{\"part\":1,\"value\":\"42\"}}\n",
            "{\"type\":\"message\",\"data\":{\"kind\":\"error\",\"output\":\"boom\"}}\n",
        )
    );
}

#[test]
fn test_output_eq() {
    assert!((1i64, 2u32).output_eq(&(1, 2)));
    assert!(!(1i64, 2u32).output_eq(&(1, 3)));
    assert!(7u64.output_eq(&7));
}

#[test]
fn test_check_expected() {
    let opts = parse(&[]).unwrap();
    assert!(check_expected(&opts, &(514579i64, 241861950i64), &(514579, 241861950)).is_ok());

    let e = check_expected(&opts, &(1020100i64, 0i64), &(514579, 241861950)).unwrap_err();
    assert_eq!(
        e.to_string(),
        "(1020100, 0) (value) != (514579, 241861950) (expected)"
    );
}

#[test]
fn test_check_expected_custom_input() {
    let opts = parse(&["--input", "mine.txt"]).unwrap();
    assert!(check_expected(&opts, &(1020100i64, 0i64), &(514579, 241861950)).is_ok());
}

fn bench_opts(extra: &[&str]) -> Opts {
    let mut args = vec!["--bench", "--json", "--warmup", "0", "--count", "3"];
    args.extend_from_slice(extra);
    parse(&args).unwrap()
}

#[test]
fn test_bench_report() {
    let opts = bench_opts(&[]);
    let mut o = Output::new(Vec::new(), OutputKind::Json);
    let mut calls = 0;

    let check = |value: &u32| check_expected(&opts, value, &7);
    let iter = || -> anyhow::Result<u32> {
        calls += 1;
        Ok(7)
    };

    Bencher::new().run_with(&mut o, &opts, check, iter).unwrap();
    assert_eq!(calls, 3);

    let out = String::from_utf8(o.into_inner()).unwrap();
    let last = out.lines().last().unwrap();
    assert!(last.starts_with("{\"type\":\"report\",\"data\":{"));
    assert!(last.contains("\"count\":3"));
}

#[test]
fn test_bench_error_is_fatal() {
    let opts = bench_opts(&[]);
    let mut o = Output::new(Vec::new(), OutputKind::Json);

    let e = Bencher::new()
        .run_with(
            &mut o,
            &opts,
            |_: &u32| Ok(()),
            || -> anyhow::Result<u32> { Err(anyhow!("inputs/d01.txt:2:1")) },
        )
        .unwrap_err();

    assert_eq!(e.to_string(), "inputs/d01.txt:2:1");

    let out = String::from_utf8(o.into_inner()).unwrap();
    assert!(out.ends_with(
        "{\"type\":\"message\",\"data\":{\"kind\":\"error\",\"output\":\"inputs/d01.txt:2:1\"}}\n"
    ));
    assert!(!out.contains("\"report\""));
}

#[test]
fn test_bench_expectation() {
    let opts = bench_opts(&[]);
    let mut o = Output::new(Vec::new(), OutputKind::Json);
    let check = |value: &u32| check_expected(&opts, value, &7);
    assert!(Bencher::new().run_with(&mut o, &opts, check, || anyhow::Ok(8u32)).is_err());

    let opts = bench_opts(&["--input", "mine.txt"]);
    let mut o = Output::new(Vec::new(), OutputKind::Json);
    let check = |value: &u32| check_expected(&opts, value, &7);
    assert!(Bencher::new().run_with(&mut o, &opts, check, || anyhow::Ok(8u32)).is_ok());
}
