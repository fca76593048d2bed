//! Interactive session
//!
//! A line-based loop over stdin. `inspect` and `stats` run in-process;
//! full query syntax stays with the `query` subcommand.

use std::io::{self, BufRead, Write};

use crate::database::NeoDatabase;

use super::commands;
use super::errors::CliResult;

/// Runs the interactive loop until `exit` or end of input
pub fn run(db: &NeoDatabase) -> CliResult<()> {
    let stats = db.statistics();
    println!(
        "Explore close approaches of near-Earth objects. \
         Type `help` or `?` to list commands and `exit` to exit."
    );
    println!(
        "Database loaded: {} NEOs, {} close approaches",
        stats.total_neos, stats.total_approaches
    );

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("(neo) ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        match tokens[0] {
            "exit" | "quit" => break,
            "help" | "?" => print_help(),
            "stats" => println!("{}", db.statistics()),
            "inspect" | "i" => run_inspect(db, &tokens[1..]),
            "query" | "q" => {
                println!("Use the `query` subcommand for full query functionality.");
            }
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  inspect --pdes <designation>  Inspect NEO by designation");
    println!("  inspect --name <name>         Inspect NEO by name");
    println!("  stats                         Print database statistics");
    println!("  exit                          Exit the session");
}

fn run_inspect(db: &NeoDatabase, args: &[&str]) {
    let mut pdes = None;
    let mut name = None;
    let mut verbose = false;

    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "--pdes" if i + 1 < args.len() => {
                pdes = Some(args[i + 1]);
                i += 2;
            }
            "--name" if i + 1 < args.len() => {
                name = Some(args[i + 1]);
                i += 2;
            }
            "--verbose" => {
                verbose = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    if let Err(e) = commands::inspect(db, pdes, name, verbose) {
        eprintln!("Error: {}", e);
    }
}
