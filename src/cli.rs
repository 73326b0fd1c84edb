//! Argument parsing and validation for the `N k l w` invocation.
//!
//! A dedicated `try_parse_*` function returning a typed `Result`, rather
//! than pulling in a CLI-argument crate.

use crate::error::ArgError;

/// Exactly four positional arguments are accepted: `N k l w`.
const NUM_REQUIRED_ARGS: usize = 4;

/// Validated program arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args {
    /// Board side length, `N >= 2`.
    pub n: usize,
    /// Required per-queen attack count, `k >= 0`.
    pub k: i32,
    /// `true` prints every solution board in addition to the summary.
    pub print_boards: bool,
    /// `true` selects the wrap-around board topology.
    pub wrap: bool,
}

/// Parses and validates `N k l w` from already-split positional arguments
/// (i.e. `argv[1..]`, with the program name stripped).
///
/// # Errors
/// Returns [`ArgError`] for a wrong argument count, a non-integer argument,
/// or a value out of its accepted range. Validation order: count first,
/// then each argument in position, then the two range checks.
pub fn try_parse_args(argv: &[String]) -> Result<Args, ArgError> {
    if argv.len() != NUM_REQUIRED_ARGS {
        return Err(ArgError::WrongCount { found: argv.len() });
    }

    let n = parse_i64(argv, 0, "N")?;
    let k = parse_i64(argv, 1, "k")?;
    let l = parse_i64(argv, 2, "l")?;
    let w = parse_i64(argv, 3, "w")?;

    if n <= 1 {
        return Err(ArgError::BoardSizeOutOfRange { n });
    }
    if k < 0 {
        return Err(ArgError::NegativeAttackCount { k });
    }

    Ok(Args {
        n: n as usize,
        k: k as i32,
        print_boards: l != 0,
        wrap: w != 0,
    })
}

fn parse_i64(argv: &[String], idx: usize, which: &'static str) -> Result<i64, ArgError> {
    argv[idx]
        .trim()
        .parse::<i64>()
        .map_err(|_| ArgError::NotAnInteger { which, value: argv[idx].clone() })
}
