use clap::{Parser as ClapParser, Subcommand};
use ctestep::cli::{self, CliError, RunOptions};
use std::fs;
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "ctestep")]
#[command(about = "Ctestep - run a prefix of a chained-CTE SQL pipeline and inspect the result")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the truncated pipeline without executing it
    Show {
        /// Pipeline SQL file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<String>,

        /// Number of leading stages to keep (0 keeps the whole pipeline)
        #[arg(short, long, default_value_t = 0)]
        stages: usize,

        /// Positional argument value, repeatable, in placeholder order
        #[arg(short, long = "arg")]
        args: Vec<String>,
    },

    /// Execute the truncated pipeline against PostgreSQL and print the rows
    Run {
        /// PostgreSQL connection string
        #[arg(short, long)]
        dsn: String,

        /// Pipeline SQL file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<String>,

        /// Number of leading stages to keep (0 keeps the whole pipeline)
        #[arg(short, long, default_value_t = 0)]
        stages: usize,

        /// Positional argument value, repeatable, in placeholder order
        #[arg(short, long = "arg")]
        args: Vec<String>,

        /// Emit rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate random rank arguments for a difficulty preset
    Sample {
        /// Difficulty preset: easy, medium or hard
        difficulty: String,

        /// How many values to generate
        #[arg(short, long, default_value_t = 8)]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { file, stages, args } => run_show(file, stages, args),
        Commands::Run {
            dsn,
            file,
            stages,
            args,
            json,
        } => run_run(dsn, file, stages, args, json),
        Commands::Sample { difficulty, count } => match cli::execute_sample(&difficulty, count) {
            Ok(ranks) => {
                println!("{}", ranks);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_show(file: Option<String>, stages: usize, args: Vec<String>) -> Result<(), CliError> {
    let options = RunOptions {
        pipeline: load_pipeline(file)?,
        arguments: args,
        stages,
    };

    println!("{}", cli::execute_show(&options)?);
    Ok(())
}

fn run_run(
    dsn: String,
    file: Option<String>,
    stages: usize,
    args: Vec<String>,
    json: bool,
) -> Result<(), CliError> {
    let options = RunOptions {
        pipeline: load_pipeline(file)?,
        arguments: args,
        stages,
    };

    println!("{}", cli::execute_run(&options, &dsn, json)?);
    Ok(())
}

fn load_pipeline(file: Option<String>) -> Result<String, CliError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(CliError::Io),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoPipeline),
    }
}
