//! Vellum CLI
//!
//! Debug front end for the CSS tokenizer and parser.

use vellumc::commands::{check_file, file_argument, lex_file, parse_command_options};

fn main() {
    vellumc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let Some(path) = file_argument(&args[2..]) else {
                eprintln!("Usage: vellum lex <file.css> [options]");
                std::process::exit(1);
            };
            let options = parse_command_options(&args[2..]);
            lex_file(path, &options);
        }
        "check" => {
            let Some(path) = file_argument(&args[2..]) else {
                eprintln!("Usage: vellum check <file.css> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --color=<mode>      Colored diagnostics: auto, always, never");
                eprintln!("  --error-limit=<n>   Stop reporting after n errors (0 = no limit)");
                std::process::exit(1);
            };
            let options = parse_command_options(&args[2..]);
            check_file(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Vellum {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Vellum CSS tokenizer and parser");
    println!();
    println!("Usage: vellum <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.css>       Tokenize and display tokens");
    println!("  check <file.css>     Walk the rule structure and report problems");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>      Colored diagnostics: auto, always, never");
    println!("  --error-limit=<n>   Stop reporting after n errors (0 = no limit)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable tracing output (e.g. RUST_LOG=vellum_parse=debug)");
    println!();
    println!("Examples:");
    println!("  vellum lex style.css");
    println!("  vellum check style.css");
    println!("  vellum check style.css --color=never --error-limit=0");
}
