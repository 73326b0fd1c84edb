use std::env;
use std::process::ExitCode;
use std::thread::available_parallelism;

use log::{error, info};

use aggressive_queens::aggregate;
use aggressive_queens::cli::{self, Args};
use aggressive_queens::error::{AqError, ArgError};
use aggressive_queens::report;

const EXIT_OK: u8 = 0;
const EXIT_NUM_ARGS_INCORRECT: u8 = 1;
const EXIT_ARGS_INVALID: u8 = 2;
const EXIT_UNKNOWN: u8 = 3;

fn main() -> ExitCode {
    env_logger::init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match cli::try_parse_args(&argv) {
        Ok(args) => args,
        Err(e) => return report_arg_error(&e),
    };

    info!("received arguments: N={} k={} l={} w={}", args.n, args.k, args.print_boards, args.wrap);

    match run(args) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            error!("fatal error: {e}");
            ExitCode::from(EXIT_UNKNOWN)
        }
    }
}

/// Picks the worker count an external launcher would otherwise supply: this
/// crate has no MPI binding, so `P` is derived once from the host's
/// available parallelism rather than read from the invocation.
fn run(args: Args) -> Result<(), AqError> {
    let worker_count = available_parallelism().map_or(1, |n| n.get()).clamp(1, 64);

    let result = aggregate::run(args.n, args.k, args.wrap, worker_count)?;

    report::print_summary(result.solutions.len(), result.max_queens);
    if args.print_boards {
        for board in &result.solutions {
            report::print_board(board);
        }
    }

    Ok(())
}

fn report_arg_error(e: &ArgError) -> ExitCode {
    eprintln!("{e}");
    let code = match e {
        ArgError::WrongCount { .. } => EXIT_NUM_ARGS_INCORRECT,
        ArgError::NotAnInteger { .. }
        | ArgError::BoardSizeOutOfRange { .. }
        | ArgError::NegativeAttackCount { .. } => EXIT_ARGS_INVALID,
    };
    ExitCode::from(code)
}
