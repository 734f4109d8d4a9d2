use chainsh::conf::ShellConfig;
use chainsh::control;
use chainsh::control_state::ControlState;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// chainsh - run command lines chained with ';' and '&&'
#[derive(Parser, Debug)]
#[command(name = "chainsh", version, about)]
struct Args {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Batch file to run line by line; omit for interactive mode
    inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(args.verbose);

    let mut state = ControlState::with_config(ShellConfig::default());
    let mut inputs = args.inputs;
    let result = match inputs.len() {
        0 => control::interactive_mode(&mut state),
        1 => {
            let path = inputs.remove(0);
            control::batch_mode(&mut state, &path)
        }
        _ => {
            print_usage();
            return ExitCode::SUCCESS;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "fatal error");
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Enter the correct number of arguments...");
    println!("Enter no arguments to run shell in interactive mode");
    println!("OR enter the name of a batchfile to run shell in batch mode!!!");
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
