//! chapsplit - split a translated document into chapter files

use chapsplit_cli::commands::SplitArgs;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match SplitArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are not failures; anything else prints usage
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
