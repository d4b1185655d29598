use std::process;

use docplan::{
    cli::{Args, Command},
    error::{DocplanError, ErrorSeverity},
};

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);
    process::exit(run_command(command));
}

/// Run the command and map the outcome onto an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("\nError: {}", err.user_message());

            match &err {
                DocplanError::InvalidPath { .. } => {
                    eprintln!("Suggestion: Check that the path exists and is a directory");
                }
                DocplanError::ConfigNotFound { .. } => {
                    eprintln!("Suggestion: Create a .docplan.toml file in your project directory or specify a config file with --config");
                }
                DocplanError::PermissionDenied { .. } | DocplanError::Traversal { .. } => {
                    eprintln!("Suggestion: Check file permissions or use --exclude to keep unreadable directories out of the walk");
                }
                DocplanError::OutputDirectoryNotFound { .. } => {
                    eprintln!("Suggestion: Create the output directory first or specify a different output path");
                }
                DocplanError::Pattern { .. } => {
                    eprintln!("Suggestion: Exclusion patterns are shell globs; check the pattern syntax");
                }
                _ => {}
            }

            let exit_code = match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            };

            if exit_code > 0 {
                eprintln!("\nExiting with code {} due to {}", exit_code, err.severity());
            }

            exit_code
        }
    }
}
