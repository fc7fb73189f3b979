//! Monkey Language CLI
//!
//! Command-line interface for the Monkey front end: parses scripts or REPL
//! lines and prints the resulting program or its diagnostics.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use monkey_lang::{parse, tokenize, Diagnostic, MonkeyError, MonkeyResult, VERSION};

const PROMPT: &str = ">> ";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_tokens = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens = true,
            "--no-color" => colored::control::set_override(false),
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--version" | "-V" => {
                println!("monkey {}", VERSION);
                return;
            }
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    match filename {
        Some(file) => {
            if let Err(e) = run_file(file, show_tokens) {
                eprintln!("{}", Diagnostic::new(e));
                process::exit(1);
            }
        }
        None => {
            println!("Monkey v{} - Language Front End", VERSION);
            println!("Feel free to type in commands. Type 'exit' to quit\n");
            repl(show_tokens);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: monkey [OPTIONS] [script]");
    eprintln!("       monkey --help");
}

fn print_help() {
    println!("Monkey v{} - Lexer and parser for the Monkey language", VERSION);
    println!();
    println!("USAGE:");
    println!("    monkey [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens     Show tokenization output (lexer only)");
    println!("        --no-color   Disable colored diagnostics");
    println!("    -h, --help       Show this help message");
    println!("    -V, --version    Show version");
    println!();
    println!("EXAMPLES:");
    println!("    monkey script.mk           Parse a script and print its program");
    println!("    monkey --tokens script.mk  Show tokens from lexer");
    println!("    monkey                     Start interactive REPL");
}

fn read_source(filename: &str) -> MonkeyResult<String> {
    fs::read_to_string(filename)
        .map_err(|e| MonkeyError::io(format!("Failed to read file '{}': {}", filename, e)))
}

/// Parse (or tokenize) a script file
fn run_file(filename: &str, show_tokens: bool) -> MonkeyResult<()> {
    let source = read_source(filename)?;

    if show_tokens {
        println!("Tokens for '{}':", filename);
        println!("{}", "=".repeat(60));
        let count = print_tokens(&source, Some(filename));
        println!("{}", "=".repeat(60));
        println!("Total tokens: {}", count);
        return Ok(());
    }

    if !evaluate(&source, Some(filename)) {
        process::exit(1);
    }
    Ok(())
}

/// Print the token stream and return how many tokens were printed
fn print_tokens(source: &str, filename: Option<&str>) -> usize {
    let tokens = tokenize(source, filename);
    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:10} | {:12} | {}",
            i,
            token.kind.to_string(),
            format!("{:?}", token.literal),
            token.location
        );
    }
    tokens.len()
}

/// Parse `source`, printing the program or every diagnostic. Returns whether
/// parsing succeeded.
fn evaluate(source: &str, filename: Option<&str>) -> bool {
    match parse(source, filename) {
        Ok(program) => {
            println!("{}", program);
            true
        }
        Err(errors) => {
            for error in errors {
                eprint!("{}", Diagnostic::with_source(error, source));
            }
            false
        }
    }
}

/// Start an interactive REPL (Read-Eval-Print Loop)
fn repl(show_tokens: bool) {
    loop {
        print!("{}", PROMPT);
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error writing prompt: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                if show_tokens {
                    print_tokens(input, Some("<repl>"));
                } else {
                    evaluate(input, Some("<repl>"));
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
