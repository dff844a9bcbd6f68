mod calc_engine;
mod input_mode;
mod results;
mod scanner;

use anyhow::Context;
use clap::Parser;
use input_mode::{Mode, Session};
use scanner::Scanner;
use std::{
    fs::File,
    io,
    path::PathBuf,
    process::ExitCode,
    sync::Mutex,
};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[clap(version, about = "Evaluates `operand operator operand` expressions and saves the results")]
struct Args {
    #[clap(short, long, default_value = "results.txt", help = "the file to write results to")]
    output: PathBuf,

    #[clap(short, long, allow_negative_numbers = true,
           help = "input method to use instead of asking: 1 = stream extraction, 2 = whole lines")]
    mode: Option<i64>,

    #[clap(short, long, help = "the file to write logs to, by default they are swallowed")]
    log_file: Option<PathBuf>,

    #[clap(short, long, action = clap::ArgAction::Count,
           help = "log to stderr, may be provided multiple times for more detail")]
    verbose: u8,
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level);

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file).context("unable to create log file")?;
        builder.with_writer(Mutex::new(file)).init();
    } else if args.verbose > 0 {
        builder.with_writer(io::stderr).init();
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args)?;

    let stdin = io::stdin();
    let mut session = Session::new(Scanner::new(stdin.lock()), io::stdout(), io::stderr());

    let choice = match args.mode {
        Some(choice) => choice,
        None => session.read_choice().context("reading input method")?,
    };
    let mode = match Mode::try_from(choice) {
        Ok(mode) => mode,
        Err(e) => {
            error!(?e, "bad input method");
            eprintln!("{}.", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(?mode, "collecting expressions");

    let mut strategy = mode.strategy();
    session.collect(&mut *strategy).context("reading expressions")?;

    let (expressions, mut out, mut err) = session.finish();
    results::report(&expressions, &args.output, &mut out, &mut err)?;

    Ok(ExitCode::SUCCESS)
}
