//! ll1c: parse arithmetic expressions and JSON documents from the command line.

use ll1_grammars::expr::Env;
use ll1c::commands::{check_documents, evaluate, parse_binding, Source};

fn main() {
    ll1c::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "expr" => {
            let mut quiet = false;
            let mut env = Env::default();
            let mut texts = Vec::new();

            for arg in args.iter().skip(2) {
                if arg == "--quiet" || arg == "-q" {
                    quiet = true;
                } else if let Some(binding) = arg.strip_prefix("--var=") {
                    match parse_binding(binding) {
                        Ok((name, value)) => {
                            env.insert(name, value);
                        }
                        Err(error) => {
                            eprintln!("error: {error}");
                            std::process::exit(1);
                        }
                    }
                } else {
                    texts.push(arg.as_str());
                }
            }

            if texts.is_empty() {
                eprintln!("Usage: ll1c expr [--var=<x>=<number>]... [--quiet] <expression>...");
                std::process::exit(1);
            }

            let mut failed = false;
            for text in texts {
                match evaluate(text, &env) {
                    Ok(evaluated) if quiet => println!("{}", evaluated.value),
                    Ok(evaluated) => {
                        println!("{text}");
                        println!("  tree:  {}", evaluated.tree);
                        println!("  value: {}", evaluated.value);
                    }
                    Err(error) => {
                        eprintln!("{text}: {error}");
                        failed = true;
                    }
                }
            }

            if failed {
                std::process::exit(1);
            }
        }
        "json" => {
            let mut quiet = false;
            let mut sources = Vec::new();

            for arg in args.iter().skip(2) {
                if arg == "--quiet" || arg == "-q" {
                    quiet = true;
                } else {
                    sources.push(Source::from_arg(arg));
                }
            }

            if sources.is_empty() {
                eprintln!("Usage: ll1c json [--quiet] <file|->...");
                std::process::exit(1);
            }

            let reports = check_documents(sources);
            let failures = reports.iter().filter(|report| !report.is_ok()).count();

            for report in &reports {
                match &report.outcome {
                    Ok(summary) if !quiet => println!(
                        "{}: ok ({}, {} values)",
                        report.source, summary.kind, summary.nodes
                    ),
                    Ok(_) => {}
                    Err(error) => eprintln!("{}: {error}", report.source),
                }
            }

            if !quiet {
                println!("{} documents, {failures} failed", reports.len());
            }
            if failures > 0 {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("ll1c {}", env!("CARGO_PKG_VERSION"));
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
    println!("ll1c: predictive LL(1) parsing from the command line");
    println!();
    println!("Usage: ll1c <command> [options]");
    println!();
    println!("Commands:");
    println!("  expr <expression>...  Parse, print, and evaluate arithmetic expressions");
    println!("  json <file|->...      Validate JSON documents (- reads stdin)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Options:");
    println!("  --var=<x>=<number>    Bind a variable for expr");
    println!("  --quiet, -q           Print only values (expr) or only errors (json)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=ll1_core=trace) to see parser decisions.");
}
