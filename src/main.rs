use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use sort_compare::{
    constants::{DEFAULT_INPUTS, DEMO_INPUT, ORIGINAL_PREVIEW_LEN, SORTED_PREVIEW_LEN},
    harness::{compare, format_millis, preview, time_sort, Algorithm},
    input::read_input,
};

/// Compares insertion sort and merge sort on the same integer inputs.
#[derive(Parser, Debug)]
#[command(name = "sort_compare", version)]
struct Args {
    /// Input files: a count on the first line, space-separated integers on the second
    #[arg(default_values = DEFAULT_INPUTS)]
    files: Vec<PathBuf>,

    /// Sort the built-in sample instead of reading files
    #[arg(long, conflicts_with_all = ["random", "files"])]
    demo: bool,

    /// Sort N uniformly random integers instead of reading files
    #[arg(long, value_name = "N", conflicts_with = "files")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0, env = "SORT_COMPARE_SEED")]
    seed: u64,

    /// Also time the bottom-up merge sort
    #[arg(long)]
    bottom_up: bool,

    /// Values shown from each unsorted input
    #[arg(long, value_name = "N", default_value_t = ORIGINAL_PREVIEW_LEN)]
    preview: usize,

    /// Values shown from each sorted result
    #[arg(long, value_name = "N", default_value_t = SORTED_PREVIEW_LEN)]
    sorted_preview: usize,
}

impl Args {
    fn sources(&self) -> Vec<Source> {
        if self.demo {
            vec![Source::Demo]
        } else if let Some(len) = self.random {
            vec![Source::Random {
                len,
                seed: self.seed,
            }]
        } else {
            self.files.iter().cloned().map(Source::File).collect()
        }
    }
}

#[derive(Debug, PartialEq)]
enum Source {
    Demo,
    Random { len: usize, seed: u64 },
    File(PathBuf),
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Demo => "demo input".to_owned(),
            Source::Random { len, seed } => format!("{len} random values (seed {seed})"),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn load(&self) -> anyhow::Result<Vec<i32>> {
        match self {
            Source::Demo => Ok(DEMO_INPUT.to_vec()),
            Source::Random { len, seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                Ok((0..*len).map(|_| rng.gen()).collect())
            }
            Source::File(path) => read_input(path).context("loading input"),
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let failed = run_all(&args.sources(), &args, &mut std::io::stdout().lock());
    exit_code(failed)
}

fn exit_code(failed: usize) -> ExitCode {
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Runs every source in turn, reporting failures and moving on. Returns the number of sources
/// that failed.
fn run_all(sources: &[Source], args: &Args, out: &mut impl Write) -> usize {
    let mut failed = 0;
    for (i, source) in sources.iter().enumerate() {
        let result = (|| -> anyhow::Result<Option<Algorithm>> {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "Sorting {}...", source.label())?;
            run(source, args, out)
        })();
        if let Err(e) = result {
            error!("{e:#}");
            failed += 1;
        }
    }
    failed
}

/// Returns the faster algorithm, or `None` if there was nothing to sort.
fn run(source: &Source, args: &Args, out: &mut impl Write) -> anyhow::Result<Option<Algorithm>> {
    let data = source.load()?;
    if data.is_empty() {
        warn!(source = %source.label(), "nothing to sort");
        writeln!(out, "Original array is empty!")?;
        return Ok(None);
    }
    info!(len = data.len(), "loaded {}", source.label());

    writeln!(out, "\nOriginal Array:")?;
    writeln!(out, "{}", preview(&data, args.preview))?;

    let comparison = compare(&data);
    let mut runs = vec![&comparison.insertion, &comparison.merge];
    let bottom_up = args
        .bottom_up
        .then(|| time_sort(Algorithm::MergeSortBottomUp, &data));
    runs.extend(bottom_up.as_ref());

    for run in &runs {
        writeln!(out, "\n{}", run.algorithm.sorted_heading())?;
        writeln!(out, "{}", preview(&run.sorted, args.sorted_preview))?;
    }
    writeln!(out)?;
    for run in &runs {
        writeln!(out, "{} Time: {}", run.algorithm, format_millis(run.elapsed))?;
    }
    let faster = comparison.faster();
    writeln!(out, "{faster} was faster.")?;
    Ok(Some(faster))
}
