#![warn(clippy::pedantic)]

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use cube_core::state_after;
use cube_service::{
    Config, CubeService, OptimalSolver, SolveMethod, SolveReport, config::DEFAULT_CONFIG_PATH,
    generate_random_scramble, validate,
};
use env_logger::TimestampPrecision;
use log::LevelFilter;
use owo_colors::OwoColorize;

/// Scrambles, validates and solves 3x3 cubes
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_PATH, value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the cube reached by a scramble
    Solve {
        /// The scramble, e.g. "R U R' F2"
        scramble: String,
        #[arg(long, short, value_enum, default_value_t)]
        method: SolveMethod,
        /// Merge adjacent turns of the same face in the solution
        #[arg(long)]
        simplify: bool,
    },
    /// Print a random 20 move scramble
    Scramble {
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check that a move sequence only contains legal moves
    Validate {
        /// The moves to check
        moves: String,
    },
    /// Solve a few example scrambles layer by layer
    Demo,
    /// Read scrambles from stdin and solve each one
    Repl {
        #[arg(long, short, value_enum, default_value_t)]
        method: SolveMethod,
    },
}

const DEMO_SCRAMBLES: [&str; 4] = [
    "R U R' F R F'",
    "R U R' U R U2 R'",
    "F R U' R' U' R U R' F'",
    "R U R' U' R' F R2 U' R' U' R U R' F'",
];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Solve {
            scramble,
            method,
            simplify,
        } => {
            let service = CubeService::from_config(&config)
                .with_simplify(config.service.simplify || simplify);
            let report = service.solve(&scramble, method)?;
            print_report(&report);
        }
        Commands::Scramble { seed } => {
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            println!("{}", generate_random_scramble(&mut rng));
        }
        Commands::Validate { moves } => {
            let validation = validate(&moves);
            if let Some(reason) = validation.reason {
                println!("{} {reason}", "Invalid:".red());
            } else {
                println!("{} {} moves", "Valid:".green(), validation.move_count);
            }
        }
        Commands::Demo => run_demo(&CubeService::from_config(&config))?,
        Commands::Repl { method } => run_repl(&CubeService::from_config(&config), method)?,
    }

    Ok(())
}

fn print_report(report: &SolveReport) {
    println!("Scramble:  {}", report.scramble);
    println!("Facelets:  {}", state_after(&report.scramble));
    println!("Method:    {}", report.method);
    println!(
        "Solution:  {} ({} moves, {} quarter turns, {:.3}s)",
        report.solution,
        report.move_count,
        report.quarter_turns,
        report.elapsed.as_secs_f64()
    );

    for phase in &report.phases {
        println!("  {phase}");
    }

    if report.verified {
        println!("{}", "✓ Solution verified".green());
    } else {
        println!("{}", "✗ Solution does not solve the cube".red());
    }
}

fn run_demo<S: OptimalSolver>(service: &CubeService<S>) -> color_eyre::Result<()> {
    for (i, scramble) in DEMO_SCRAMBLES.into_iter().enumerate() {
        println!("Example {}", i + 1);
        let report = service.solve(scramble, SolveMethod::LayerByLayer)?;
        print_report(&report);
        println!();
    }

    Ok(())
}

fn run_repl<S: OptimalSolver>(
    service: &CubeService<S>,
    method: SolveMethod,
) -> color_eyre::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    eprintln!("Enter a scramble to solve, or `quit` to exit");

    loop {
        write!(stdout, "Scramble > ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let scramble = line.trim();
        if matches!(scramble.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }
        if scramble.is_empty() {
            continue;
        }

        match service.solve(scramble, method) {
            Ok(report) => print_report(&report),
            Err(err) => eprintln!("{} {err}", "Error:".red()),
        }
        println!();
    }

    eprintln!("Goodbye!");
    Ok(())
}
