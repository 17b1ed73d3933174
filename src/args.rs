//! Code to parse the command line using `clap`, the alternative
//! `set1=...;set2=...;operation=...` form, and definitions of the parsed
//! result

use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::operations::Config;

/// The one kind of error the command line can produce: a message saying what
/// was wrong with it.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(String);

/// Returns the parsed command line. A lone argument containing `=` is read as
/// `key=value` pairs (see `from_kwargs`); anything else goes to `clap`, which
/// exits with its own message on a malformed command line.
pub fn parsed() -> Result<Args, UsageError> {
    let raw: Vec<_> = std::env::args_os().skip(1).collect();
    if let [only] = raw.as_slice() {
        if let Some(text) = only.to_str().filter(|t| t.contains('=')) {
            return from_kwargs(text);
        }
    }
    Args::try_from(CliArgs::parse())
}

/// The parsed command line
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    /// `op` is the set operation requested
    pub op: OpName,
    /// `files` holds the two operand files, in order
    pub files: [PathBuf; 2],
    /// How each file becomes a vocabulary
    pub config: Config,
    /// Where to save a numbered output file, if not to stdout
    pub output_dir: Option<PathBuf>,
    /// Number of `-v` flags given
    pub verbosity: u8,
}

/// Name of a set operation
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpName {
    /// Tokens present in either file
    Union,
    /// Tokens present in the first file but not the second
    Difference,
    /// Tokens present in both files
    Intersection,
}

impl std::str::FromStr for OpName {
    type Err = UsageError;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "union" => Ok(OpName::Union),
            "difference" => Ok(OpName::Difference),
            "intersection" => Ok(OpName::Intersection),
            _ => Err(UsageError(format!(
                "operation '{name}' does not exist\nValid operations: [difference|union|intersection]"
            ))),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "wordset", version)]
/// Prints the union, difference, or intersection of the words in two files
struct CliArgs {
    #[arg(value_enum)]
    /// The set operation to perform
    op: CliName,
    /// The first operand
    set1: PathBuf,
    /// The second operand
    set2: PathBuf,
    #[arg(long)]
    /// Compare words exactly as written instead of lowercasing them
    keep_case: bool,
    #[arg(short, long, value_name = "DIR")]
    /// Save the result to the next free outputN.txt in DIR instead of printing it
    output_dir: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count)]
    /// Log more detail to stderr (repeat for more)
    verbose: u8,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
/// Name of the requested operation
enum CliName {
    /// Print the words present in either file
    Union,
    #[value(alias = "diff")]
    /// Print the words present in the first file but not the second
    Difference,
    #[value(alias = "intersect")]
    /// Print the words present in both files
    Intersection,
}

impl TryFrom<CliArgs> for Args {
    type Error = UsageError;
    fn try_from(parsed: CliArgs) -> Result<Self, Self::Error> {
        let op = match parsed.op {
            CliName::Union => OpName::Union,
            CliName::Difference => OpName::Difference,
            CliName::Intersection => OpName::Intersection,
        };
        for file in [&parsed.set1, &parsed.set2] {
            check_file(file)?;
        }
        Ok(Args {
            op,
            files: [parsed.set1, parsed.set2],
            config: Config { fold_case: !parsed.keep_case },
            output_dir: parsed.output_dir,
            verbosity: parsed.verbose,
        })
    }
}

/// One row of the `key=value` validation table
struct KeySpec {
    key: &'static str,
    required: bool,
    check: fn(&str) -> Result<(), UsageError>,
}

const KEYS: [KeySpec; 4] = [
    KeySpec { key: "set1", required: true, check: check_operand },
    KeySpec { key: "set2", required: true, check: check_operand },
    KeySpec { key: "operation", required: true, check: check_operation },
    KeySpec { key: "output", required: false, check: check_dir },
];

fn check_operand(name: &str) -> Result<(), UsageError> {
    check_file(Path::new(name))
}

fn check_operation(name: &str) -> Result<(), UsageError> {
    name.parse::<OpName>().map(|_| ())
}

fn check_file(path: &Path) -> Result<(), UsageError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(UsageError(format!("file '{}' does not exist", path.display())))
    }
}

fn check_dir(name: &str) -> Result<(), UsageError> {
    if Path::new(name).is_dir() {
        Ok(())
    } else {
        Err(UsageError(format!("directory '{name}' does not exist")))
    }
}

/// Parses `text` as `key=value` pairs separated by `;`, with spaces ignored,
/// e.g. `set1=a.txt; set2=b.txt; operation=union`. Keys other than `set1`,
/// `set2`, `operation` and `output` are ignored. The keys are checked in that
/// order, and the first problem found is returned.
pub fn from_kwargs(text: &str) -> Result<Args, UsageError> {
    let text = text.replace(' ', "");
    let pairs: Vec<(&str, &str)> =
        text.split(';').map(|pair| pair.split_once('=').unwrap_or((pair, ""))).collect();
    let value_of = |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|&(_, v)| v);

    if let Some(missing) = KEYS.iter().find(|spec| spec.required && value_of(spec.key).is_none()) {
        return Err(UsageError(format!("missing key '{}'", missing.key)));
    }
    for spec in &KEYS {
        if let Some(value) = value_of(spec.key) {
            (spec.check)(value)?;
        }
    }

    // Every required key is present and checked
    let required = |key: &str| value_of(key).unwrap_or_default();
    Ok(Args {
        op: required("operation").parse()?,
        files: [PathBuf::from(required("set1")), PathBuf::from(required("set2"))],
        config: Config::default(),
        output_dir: value_of("output").map(PathBuf::from),
        verbosity: 0,
    })
}
