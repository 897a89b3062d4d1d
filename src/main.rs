use clap::{Parser as ClapParser, Subcommand};
use sqldoc::cli::{self, CheckOptions, CheckResult, CliError, TranslateOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sqldoc")]
#[command(about = "Translate SQL select statements into document-store query descriptors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate statements and print their query descriptors as JSON
    Translate {
        /// The `;`-terminated statements (reads from stdin if not provided)
        statements: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Tokenise and parse only, reporting whether the syntax is valid
    Check {
        /// The `;`-terminated statements (reads from stdin if not provided)
        statements: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate { statements, pretty } => run_translate(statements, pretty),
        Commands::Check { statements } => run_check(statements),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_translate(statements: Option<String>, pretty: bool) -> Result<(), CliError> {
    let options = TranslateOptions {
        statements: read_statements(statements)?,
        pretty,
    };

    let json = cli::execute_translate(&options)?;
    println!("{}", json);
    Ok(())
}

fn run_check(statements: Option<String>) -> Result<(), CliError> {
    let options = CheckOptions {
        statements: read_statements(statements)?,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
    }
    Ok(())
}

fn read_statements(arg: Option<String>) -> Result<String, CliError> {
    match arg {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}
