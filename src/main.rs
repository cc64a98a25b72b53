use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use slox::{display_error, init_tracing, run};
use tracing::{debug, info};

// sysexits.h
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 => run_file(&args[1]),
        _ => {
            println!("Usage: slox [script]");
            ExitCode::from(EX_USAGE)
        }
    }
}

fn run_file(file_path: &str) -> ExitCode {
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: could not read `{}`: {}", file_path, err);
            return ExitCode::from(EX_IOERR);
        }
    };

    info!(file = file_path, bytes = source.len(), "scanning file");
    if scan_and_print(&source, file_name) {
        ExitCode::from(EX_DATAERR)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_prompt() -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::from(EX_IOERR);
        }

        match lines.next() {
            Some(Ok(line)) => {
                // Errors on one line never carry over to the next.
                scan_and_print(&line, "shell");
            }
            Some(Err(err)) => {
                eprintln!("Error: could not read input: {}", err);
                return ExitCode::from(EX_IOERR);
            }
            None => {
                println!();
                debug!("end of input, leaving prompt");
                return ExitCode::SUCCESS;
            }
        }
    }
}

/// Prints every token and displays every error. Returns whether any error
/// was reported.
fn scan_and_print(source: &str, file_name: &str) -> bool {
    let (tokens, diagnostics) = run(source);

    for token in &tokens {
        println!("{}", token);
    }

    for error in diagnostics.errors() {
        display_error(error, source, file_name);
    }

    diagnostics.had_error()
}
