use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use log::LevelFilter;
use notatio::{LineReport, Session, format_tokens};

/// notatio converts infix arithmetic with variables into prefix and postfix
/// notation and evaluates it, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells notatio to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Only print the value of each line.
    #[arg(short, long)]
    quiet: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Script to run, one expression per line. Reads standard input until a
    /// blank line when omitted.
    contents: Option<String>,
}

const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn print_report(report: &LineReport, session: &Session, quiet: bool) {
    if quiet {
        println!("{}", report.value);
        return;
    }

    for step in &report.steps {
        println!("{step}");
    }
    if let Some(name) = &report.target {
        println!("Variable assigned: {name} = {}", report.value);
        println!("Variables: {}", session.variables());
    }
    println!("Result: {}", report.value);
    println!("Prefix: {}", format_tokens(&report.prefix));
    println!("Postfix: {}", format_tokens(&report.postfix));
}

fn run_line(session: &mut Session, line: &str, quiet: bool) {
    match session.process_line(line) {
        Ok(report) => print_report(&report, session, quiet),
        Err(e) => {
            log::warn!("{line:?}: {e}");
            println!("Invalid expression");
        },
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(level_for(args.verbose))
                              .parse_default_env()
                              .init();

    let mut session = Session::new();

    let script = match args.contents {
        Some(path) if args.file => fs::read_to_string(&path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{path}'. \
                                                  Perhaps this file does not exist?");
                                       std::process::exit(1);
                                   }),
        Some(contents) => contents,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.unwrap_or_else(|e| {
                                   eprintln!("Failed to read standard input: {e}");
                                   std::process::exit(1);
                               });
                if line.trim().is_empty() {
                    break;
                }
                run_line(&mut session, &line, args.quiet);
            }
            return;
        },
    };

    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        run_line(&mut session, line, args.quiet);
    }
}
