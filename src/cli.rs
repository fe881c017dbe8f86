use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use cryptarix::{
    AlphameticSolver, Candidate, Catalog, DivisionMode, Formula, SearchBudget, SearchStrategy,
    SolverConfig, SolverError, evaluate,
};
use log::{info, warn};
use std::time::Duration;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Cryptarix - Solve alphametic puzzles
#[derive(Parser, Debug)]
#[command(name = "cryptarix")]
#[command(about = "Find the digit for every letter of an alphametic such as SEND + MORE = MONEY")]
#[command(version)]
pub struct CliArgs {
    /// Formula to solve, e.g. "SEND + MORE = MONEY"
    #[arg(conflicts_with = "puzzle")]
    pub formula: Option<String>,

    /// Solve the built-in puzzle with this index instead
    #[arg(short, long)]
    pub puzzle: Option<usize>,

    /// Print the built-in puzzles and exit
    #[arg(long)]
    pub list_puzzles: bool,

    /// Search on all cores; the solution found may differ from the
    /// sequential one when several exist
    #[arg(long)]
    pub parallel: bool,

    /// Give up after evaluating this many candidates
    #[arg(long)]
    pub max_candidates: Option<u64>,

    /// Give up after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Treat a division with a remainder as invalid
    #[arg(long)]
    pub integer_division: bool,

    /// Check a mapping such as "X=1" instead of solving
    #[arg(short, long)]
    pub guess: Option<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What the application has been asked to do
#[derive(Debug)]
pub enum Command {
    ListPuzzles,
    Solve { formula: String },
    Check { formula: String, guess: String },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliArgs {
    fn solver_config(&self) -> SolverConfig {
        let mut budget = SearchBudget::unlimited();
        if let Some(max) = self.max_candidates {
            budget = budget.with_max_candidates(max);
        }
        if let Some(ms) = self.timeout_ms {
            budget = budget.with_time_limit(Duration::from_millis(ms));
        }

        SolverConfig::default()
            .with_strategy(if self.parallel {
                SearchStrategy::Parallel
            } else {
                SearchStrategy::Sequential
            })
            .with_budget(budget)
            .with_division_mode(if self.integer_division {
                DivisionMode::Integer
            } else {
                DivisionMode::Exact
            })
    }

    fn formula_text(&self, catalog: &Catalog) -> Result<String> {
        if let Some(index) = self.puzzle {
            return catalog
                .get(index)
                .map(str::to_string)
                .with_context(|| format!("No built-in puzzle {} (0..{})", index, catalog.len()));
        }
        match &self.formula {
            Some(formula) => Ok(formula.clone()),
            None => bail!("Give a formula or --puzzle <INDEX>"),
        }
    }

    /// Turn parsed arguments into a configuration
    pub fn into_config(self) -> Result<CliConfig> {
        let solver = self.solver_config();
        let command = if self.list_puzzles {
            Command::ListPuzzles
        } else {
            let formula = self.formula_text(&Catalog::builtin())?;
            match &self.guess {
                Some(guess) => Command::Check {
                    formula,
                    guess: guess.clone(),
                },
                None => Command::Solve { formula },
            }
        };

        Ok(CliConfig {
            command,
            solver,
            log_level: self.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Read a mapping such as `S=9, E=5 N=6` into letter/digit pairs
pub fn parse_guess(text: &str) -> Result<Vec<(char, u8)>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (letter, digit) = part
                .split_once('=')
                .with_context(|| format!("Expected LETTER=DIGIT, got '{}'", part))?;
            let mut letters = letter.trim().chars();
            let (Some(letter), None) = (letters.next(), letters.next()) else {
                bail!("Expected a single letter in '{}'", part);
            };
            let digit: u8 = digit
                .trim()
                .parse()
                .with_context(|| format!("Expected a digit in '{}'", part))?;
            Ok((letter.to_ascii_uppercase(), digit))
        })
        .collect()
}

fn check_guess(formula: &Formula, guess: &str, mode: DivisionMode) -> Result<()> {
    let pairs = parse_guess(guess).context("Invalid guess")?;
    let Some(assignment) = formula.assignment_from_pairs(&pairs) else {
        bail!(
            "A guess must give each of the letters {} a different digit",
            formula.letters()
        );
    };

    let verdict = evaluate(formula, &assignment, mode);
    if verdict.is_valid() {
        println!("Correct!");
    } else {
        println!("Incorrect: {}.", verdict);
    }
    Ok(())
}

fn solve(formula: &Formula, config: SolverConfig) -> Result<()> {
    let solver = AlphameticSolver::new(config);
    let report = solver.search_formula(formula);
    info!(
        "Examined {} candidates in {:?}",
        report.examined, report.elapsed
    );

    match report.outcome {
        Ok(solution) => {
            println!("{}", solution);
            println!("{}", Candidate::substitute(formula, solution.assignment()));
            Ok(())
        }
        Err(SolverError::NoSolutionFound) => {
            warn!("No assignment satisfies '{}'", formula);
            println!("No solution.");
            Ok(())
        }
        Err(SolverError::SearchBudgetExceeded { examined }) => {
            warn!("Gave up after {} candidates", examined);
            println!("Search budget exceeded.");
            Ok(())
        }
        Err(err) => Err(err).context("Solver failed"),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match config.command {
        Command::ListPuzzles => {
            for (index, puzzle) in Catalog::builtin().iter().enumerate() {
                println!("{:>2}  {}", index, puzzle);
            }
            Ok(())
        }
        Command::Solve { formula } => {
            let formula = Formula::parse(&formula).context("Invalid formula")?;
            solve(&formula, config.solver)
        }
        Command::Check { formula, guess } => {
            let formula = Formula::parse(&formula).context("Invalid formula")?;
            check_guess(&formula, &guess, config.solver.division_mode)
        }
    }
}
