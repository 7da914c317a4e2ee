//! `emcee`: Emily compiler driver.

use std::io;
use std::process::ExitCode;

use emcee::{init_tracing, run, Config, DriverError, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => return fail(&err),
    };

    let result = run(&config, &mut io::stdout().lock(), &mut io::stderr().lock());
    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => fail(&err),
    }
}

fn fail(err: &DriverError) -> ExitCode {
    eprintln!("error: {err}");
    if matches!(err, DriverError::Usage(_)) {
        eprintln!();
        eprint!("{USAGE}");
    }
    ExitCode::from(err.exit_status())
}
