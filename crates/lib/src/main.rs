//! Build every day of a package and run them, aggregating their answers and
//! bench reports.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use lib::cli::Report;
use serde::{de::IntoDeserializer, Deserialize};

/// Package built when none is specified.
const DEFAULT_PACKAGE: &str = "aoc2020";

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Executable {
    name: String,
    path: PathBuf,
}

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    package: Option<String>,
    args: Vec<OsString>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "-p" | "--package" => {
                    let package = it.next().context("missing argument to `--package`")?;
                    let package = package
                        .into_string()
                        .ok()
                        .context("missing string argument to `--package`")?;
                    opts.package = Some(package);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    /// Test if options are verbose.
    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    fn package(&self) -> &str {
        self.package.as_deref().unwrap_or(DEFAULT_PACKAGE)
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let executables = build(opts.package())?;

    let mut total = Report::default();
    let mut reports = 0;

    for e in executables {
        let mut cmd = Command::new(&e.path);
        cmd.stdout(Stdio::piped());
        cmd.args(&opts.args[..]);
        cmd.arg("--json");

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning {}", e.path.display()))?;
        let output = child.stdout.take().context("missing stdout")?;
        let output = serde_json::Deserializer::from_reader(output).into_iter();

        for value in output {
            let value: serde_json::Value = value?;

            match value.get("type").and_then(|d| d.as_str()) {
                Some("answer") => {
                    let answer = Data::<Answer>::deserialize(value.into_deserializer())?.data;

                    if !opts.quiet {
                        println!(
                            "{name}: part {part}: {value}",
                            name = e.name,
                            part = answer.part,
                            value = answer.value
                        );
                    }
                }
                Some("report") => {
                    let report = Data::<Report>::deserialize(value.into_deserializer())?.data;

                    if !opts.quiet {
                        println!("{name}: {report}", name = e.name);
                    }

                    total += &report;
                    reports += 1;
                }
                Some("message") => {
                    let message = Data::<Message>::deserialize(value.into_deserializer())?.data;

                    if opts.is_verbose() || message.is_important() {
                        println!(
                            "{name}: {kind}: {output}",
                            name = e.name,
                            kind = message.kind,
                            output = message.output
                        );
                    }
                }
                _ => {}
            }
        }

        let status = child.wait()?;

        if !status.success() {
            println!("{name}: {status}", name = e.name);
        } else if opts.is_verbose() {
            println!("{name}: {status}", name = e.name);
        }
    }

    if reports > 0 {
        println!("total: {total}");
    }

    Ok(())
}

/// Build all binaries in the given package in release mode, returning them
/// sorted by name.
fn build(package: &str) -> Result<Vec<Executable>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.arg("build");
    cmd.arg("--release");
    cmd.args(["-p", package]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn().context("spawning cargo")?;

    let output = child.stdout.take().context("missing stdout")?;
    let output = serde_json::Deserializer::from_reader(output).into_iter();

    let mut executables = Vec::new();

    for value in output {
        let value: serde_json::Value = value?;

        if !matches!(
            value.get("reason").and_then(|d| d.as_str()),
            Some("compiler-artifact")
        ) {
            continue;
        }

        let artifact = Artifact::deserialize(value.into_deserializer())?;

        let [kind] = &artifact.target.kind[..] else {
            continue;
        };

        if kind != "bin" {
            continue;
        }

        let path = artifact.executable.context("missing executable")?;

        executables.push(Executable {
            name: artifact.target.name,
            path,
        });
    }

    let status = child.wait()?;

    if !status.success() {
        bail!("building `{package}` failed: {status}");
    }

    executables.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(executables)
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Answer {
    part: usize,
    value: String,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

impl Message {
    fn is_important(&self) -> bool {
        self.kind == "error"
    }
}
