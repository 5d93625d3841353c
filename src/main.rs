use clap::{Parser as ClapParser, Subcommand};
use quanta_lang::cli::{self, CheckOutcome, CliError, RunOptions};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "quanta")]
#[command(about = "Quanta - a quantified logic language for validation rules over structured data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a program and print its result as JSON
    Eval {
        /// The program text (reads from stdin if not provided)
        program: Option<String>,

        /// Read the program from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate syntax without evaluating
    Check {
        /// The program text (reads from stdin if not provided)
        program: Option<String>,

        /// Read the program from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            program,
            file,
            pretty,
        } => run_eval(program, file, pretty),
        Commands::Check { program, file } => run_check(program, file),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_program(program: Option<String>, file: Option<PathBuf>) -> Result<String, CliError> {
    if let Some(path) = file {
        return std::fs::read_to_string(path).map_err(CliError::Io);
    }
    match program {
        Some(p) => Ok(p),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoProgram),
    }
}

fn run_eval(
    program: Option<String>,
    file: Option<PathBuf>,
    pretty: bool,
) -> Result<(), CliError> {
    let program = read_program(program, file)?;
    let output = cli::execute_run(&RunOptions { program, pretty })?;

    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .unwrap();
    println!("{}", json);
    Ok(())
}

fn run_check(program: Option<String>, file: Option<PathBuf>) -> Result<(), CliError> {
    let program = read_program(program, file)?;
    match cli::execute_check(&program) {
        CheckOutcome::Valid => println!("Syntax is valid"),
        CheckOutcome::Invalid(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic);
            }
            std::process::exit(1);
        }
    }
    Ok(())
}
