//! polymul: multiply two polynomials with both strategies and compare.
//!
//! Operands come from files given with `--left`/`--right`, or are read
//! interactively from stdin.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use polymul::io::{read_polynomial_file, write_labeled, TokenReader};
use polymul::logging::init_logging;
use polymul::poly::Polynomial;
use polymul::{RunConfig, Runner, Strategy};

/// Exit status when every requested method ran.
const EXIT_SUCCESS: u8 = 0;

/// Exit status when an operand cannot be parsed.
const EXIT_PARSE_FAILURE: u8 = 1;

/// Exit status when a requested method could not run.
const EXIT_METHOD_FAILURE: u8 = 2;

/// Multiply two polynomials by direct convolution and by block recursion.
#[derive(Parser, Debug)]
#[command(name = "polymul", version)]
#[command(about = "Compare direct and block-recursive polynomial multiplication")]
struct Args {
    /// File holding the first polynomial (degree line, then coefficients)
    #[arg(long, value_name = "FILE")]
    left: Option<PathBuf>,

    /// File holding the second polynomial
    #[arg(long, value_name = "FILE")]
    right: Option<PathBuf>,

    /// Algorithms to run: direct, block or both
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Block-recursive base-case size
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    threshold: Option<u64>,

    /// Report block-recursive products at their true degree
    #[arg(long)]
    trim: bool,

    /// Zero-extend the smaller operand when degrees differ
    #[arg(long)]
    pad_unequal: bool,

    /// Print the wall-clock time of each multiplication
    #[arg(long)]
    timing: bool,

    /// Log filter, e.g. "debug" or "polymul_poly=trace"
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Applies command-line overrides on top of an environment config.
    fn apply(&self, mut config: RunConfig) -> RunConfig {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = usize::try_from(threshold).unwrap_or(usize::MAX);
        }
        config.trim |= self.trim;
        config.pad_unequal |= self.pad_unequal;
        config.timing |= self.timing;
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
        config
    }
}

fn read_operand<R: BufRead, W: Write>(
    path: Option<&Path>,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<Polynomial> {
    match path {
        Some(path) => read_polynomial_file(path)
            .with_context(|| format!("cannot read polynomial from {}", path.display())),
        None => input
            .read_polynomial_prompted(out)
            .context("cannot read polynomial from stdin"),
    }
}

/// Reads both operands, prints them, then prints one line per method.
///
/// Returns the process exit status. Errors are reported on `err`; only
/// failures writing the results themselves are returned as `Err`.
fn run<R, W, E>(
    args: &Args,
    config: RunConfig,
    input: &mut TokenReader<R>,
    out: &mut W,
    err: &mut E,
) -> Result<u8>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let first = match read_operand(args.left.as_deref(), input, out) {
        Ok(p) => p,
        Err(e) => {
            writeln!(err, "error: {e:#}")?;
            return Ok(EXIT_PARSE_FAILURE);
        }
    };
    write_labeled(out, "Polynomial_One", &first)?;

    let second = match read_operand(args.right.as_deref(), input, out) {
        Ok(p) => p,
        Err(e) => {
            writeln!(err, "error: {e:#}")?;
            return Ok(EXIT_PARSE_FAILURE);
        }
    };
    write_labeled(out, "Polynomial_Two", &second)?;

    let timing = config.timing;
    let runner = Runner::new(config);
    let mut status = EXIT_SUCCESS;

    for result in runner.run(&first, &second) {
        match result {
            Ok(product) => {
                if timing {
                    writeln!(
                        out,
                        "{}: {} ({:?})",
                        product.method, product.polynomial, product.elapsed
                    )?;
                } else {
                    write_labeled(out, product.method.label(), &product.polynomial)?;
                }
            }
            Err(e) => {
                debug!(error = %e, "multiplication skipped");
                writeln!(err, "error: {e}")?;
                status = EXIT_METHOD_FAILURE;
            }
        }
    }

    out.flush()?;
    Ok(status)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.apply(RunConfig::from_env());

    if let Err(err) = init_logging(&config.log_level) {
        eprintln!("warning: {err}");
    }

    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    match run(&args, config, &mut input, &mut out, &mut err) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            let _ = writeln!(err, "error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
