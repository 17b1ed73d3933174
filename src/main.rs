use anyhow::Result;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use wordset::operands::read_pair;
use wordset::operations::calculate;
use wordset::output::{save_numbered, write_lines};

fn main() -> Result<()> {
    let args = wordset::args::parsed()?;

    let level = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_env("WORDSET_LOG").init();

    let (first, second) = read_pair(&args.files)?;
    let result = calculate(args.op, &first, &second, args.config);

    match &args.output_dir {
        Some(dir) => {
            save_numbered(&result, dir)?;
        }
        None if io::stdout().is_terminal() => write_lines(&result, io::stdout().lock())?,
        None => write_lines(&result, io::BufWriter::new(io::stdout().lock()))?,
    }
    Ok(())
}
