//! Wordhoard CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wordhoard_runtime::{Repl, Session};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    commands: Vec<String>,
    show_help: bool,
    show_version: bool,
    trace_parser: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--trace" => config.trace_parser = true,
            "-e" | "--exec" => {
                i += 1;
                if i >= args.len() {
                    return Err("--exec requires a command".into());
                }
                config.commands.push(args[i].clone());
            }
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(trace_parser: bool) {
    let filter = if trace_parser {
        EnvFilter::new("wordhoard_parser=trace,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("wordhoard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.trace_parser);

    // Batch mode: run each command against the demo world and exit
    if !config.commands.is_empty() {
        let mut session = Session::demo()?;
        for command in &config.commands {
            println!("> {command}");
            for line in session.execute(command) {
                println!("{line}");
            }
        }
        return Ok(());
    }

    let mut repl = Repl::new()?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWordhoard\x1b[0m - Command parser for multi-user text worlds

\x1b[1mUSAGE:\x1b[0m
    wordhoard [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -e, --exec LINE    Parse LINE against the demo world and exit (repeatable)

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Log every parser stage to stderr
                       (otherwise RUST_LOG selects what is logged)

\x1b[1mEXAMPLES:\x1b[0m
    wordhoard                                  Start interactive REPL
    wordhoard -e \"get all coins\"               Show the events one line produces
    wordhoard --trace -e \"get book in box in cupboard\"

\x1b[1mREPL COMMANDS:\x1b[0m
    :look                Describe the room
    :inv                 List what you carry
    :help                Show REPL commands
    :quit                Exit REPL
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
