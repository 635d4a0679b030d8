use std::{fs, io, process};

use clap::Parser;
use tinylox::{error::LoxError, parse, run, scan};

/// tinylox scans, parses, and evaluates programs in a tiny C-like expression
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tinylox to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the scanned tokens instead of running the program.
    #[arg(short, long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed program as parenthesized prefix text instead of
    /// running it.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn execute(args: &Args, script: &str) -> Result<(), LoxError> {
    if args.tokens {
        for token in scan(script)? {
            println!("{token}");
        }
    } else if args.ast {
        for statement in parse(script)? {
            println!("{statement}");
        }
    } else {
        run(script, io::stdout().lock())?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = execute(&args, &script) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
