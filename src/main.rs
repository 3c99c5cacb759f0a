use clap::{Parser as ClapParser, Subcommand};
use hud_conditionals::cli::{self, CheckOptions, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "hudcond")]
#[command(about = "hudcond - compile and evaluate display conditionals")]
#[command(version)]
struct Cli {
    /// Log compiled trees and diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and evaluate a conditional
    Check {
        /// The conditional expression
        expression: String,

        /// JSON variables document (reads from stdin if not provided)
        #[arg(long)]
        vars: Option<String>,

        /// Config line reported in diagnostics
        #[arg(short, long, default_value_t = 1)]
        line: usize,

        /// Fail instead of falling back to true
        #[arg(long)]
        strict: bool,
    },

    /// Print the compiled tree
    Tree {
        /// The conditional expression
        expression: String,

        /// JSON variables document (reads from stdin if not provided)
        #[arg(long)]
        vars: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'hudcond docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Check {
            expression,
            vars,
            line,
            strict,
        } => run_check(expression, vars, line, strict),
        Commands::Tree { expression, vars } => run_tree(expression, vars),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_vars(vars: Option<String>) -> Result<Option<String>, CliError> {
    match vars {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_check(
    expression: String,
    vars: Option<String>,
    line: usize,
    strict: bool,
) -> Result<(), CliError> {
    let options = CheckOptions {
        expression,
        vars: read_vars(vars)?,
        line,
        strict,
    };

    let result = cli::execute_check(&options)?;
    if result.fell_back {
        eprintln!("warning: expression did not compile, using fallback");
    }
    if !result.enabled.is_empty() {
        log::info!("enabled data groups: {}", result.enabled.join(", "));
    }
    println!("{}", result.value);
    Ok(())
}

fn run_tree(expression: String, vars: Option<String>) -> Result<(), CliError> {
    let options = CheckOptions {
        expression,
        vars: read_vars(vars)?,
        line: 1,
        strict: true,
    };

    for line in cli::execute_tree(&options)? {
        println!("{}", line);
    }
    Ok(())
}
