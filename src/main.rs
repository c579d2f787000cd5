use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use git_playground::commands::*;
use git_playground::core::{
    configure_color, print_error, Category, CommitIdStrategy, Difficulty, MissingArgumentPolicy,
    PlaygroundConfig,
};
use git_playground::core::progress::DEFAULT_PASSING_SCORE;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "git-playground")]
#[command(about = "Practice git commands in a simulated terminal")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Read settings from this file instead of the default config location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use predictable commit ids (0000001, 0000002, ...)
    #[arg(long, global = true)]
    sequential_ids: bool,

    /// How to answer commands that are missing a required argument
    #[arg(long, global = true, value_enum)]
    missing_args: Option<MissingArgs>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum MissingArgs {
    /// Fail with a usage message
    Strict,
    /// Print nothing, change nothing
    Silent,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExplainCategory {
    Basic,
    Branching,
    Remote,
    History,
    Advanced,
    Collaboration,
    Maintenance,
}

impl From<ExplainCategory> for Category {
    fn from(category: ExplainCategory) -> Self {
        match category {
            ExplainCategory::Basic => Category::Basic,
            ExplainCategory::Branching => Category::Branching,
            ExplainCategory::Remote => Category::Remote,
            ExplainCategory::History => Category::History,
            ExplainCategory::Advanced => Category::Advanced,
            ExplainCategory::Collaboration => Category::Collaboration,
            ExplainCategory::Maintenance => Category::Maintenance,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExplainDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<ExplainDifficulty> for Difficulty {
    fn from(difficulty: ExplainDifficulty) -> Self {
        match difficulty {
            ExplainDifficulty::Beginner => Difficulty::Beginner,
            ExplainDifficulty::Intermediate => Difficulty::Intermediate,
            ExplainDifficulty::Advanced => Difficulty::Advanced,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive terminal
    Repl,
    /// Run command lines in a fresh session and print the transcript
    Run {
        /// Command lines, one per argument (e.g. "git add .")
        #[arg(required = true)]
        commands: Vec<String>,
        /// Print the final repository state as JSON
        #[arg(long)]
        state: bool,
        /// Exit with status 1 if any command failed
        #[arg(long)]
        strict: bool,
    },
    /// Show or update lesson progress
    Progress {
        /// Progress file to use instead of the default data location
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        #[command(subcommand)]
        action: ProgressCommand,
    },
    /// Explain what a git command does
    Explain {
        /// Command to explain, with or without the leading "git" (lists all when omitted)
        #[arg(conflicts_with_all = ["search", "category", "difficulty", "tip"])]
        command: Vec<String>,
        /// List commands whose name or description contains this text
        #[arg(long, conflicts_with_all = ["category", "difficulty", "tip"])]
        search: Option<String>,
        /// List commands in a category
        #[arg(long, value_enum, conflicts_with_all = ["difficulty", "tip"])]
        category: Option<ExplainCategory>,
        /// List commands of a difficulty
        #[arg(long, value_enum, conflicts_with = "tip")]
        difficulty: Option<ExplainDifficulty>,
        /// Show one command picked at random
        #[arg(long)]
        tip: bool,
    },
}

#[derive(Subcommand)]
enum ProgressCommand {
    /// List lessons and quiz scores
    Show,
    /// Mark a lesson as completed (git-basics, branching, remote-repos, advanced-git)
    Complete { lesson: String },
    /// Record a quiz score (0-100)
    Quiz {
        lesson: String,
        score: u32,
        /// Minimum score needed to pass
        #[arg(long, default_value_t = DEFAULT_PASSING_SCORE)]
        passing: u32,
    },
    /// Forget all progress
    Reset,
}

fn load_config(cli: &Cli) -> anyhow::Result<PlaygroundConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => PlaygroundConfig::load_or_create().unwrap_or_else(|e| {
            log::warn!("Using default settings: {e}");
            PlaygroundConfig::default()
        }),
    };

    if cli.no_color {
        config.color = false;
    }
    if cli.sequential_ids {
        config.commit_ids = CommitIdStrategy::Sequential;
    }
    if let Some(policy) = cli.missing_args {
        config.missing_arguments = match policy {
            MissingArgs::Strict => MissingArgumentPolicy::Strict,
            MissingArgs::Silent => MissingArgumentPolicy::Silent,
        };
    }

    Ok(config)
}

fn load_config_file(path: &Path) -> anyhow::Result<PlaygroundConfig> {
    if !path.exists() {
        log::debug!("Config {} not found, using defaults", path.display());
        return Ok(PlaygroundConfig::default());
    }
    PlaygroundConfig::load_from(path)
        .with_context(|| format!("Cannot load settings from {}", path.display()))
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = load_config(&cli)?;
    configure_color(config.color);

    match cli.command {
        Commands::Repl => execute_repl(&config)?,
        Commands::Run {
            commands,
            state,
            strict,
        } => {
            let summary = execute_run(&config, &commands, state)?;
            if strict && !summary.all_succeeded() {
                return Ok(1);
            }
        }
        Commands::Progress { file, action } => {
            let action = match action {
                ProgressCommand::Show => ProgressAction::Show,
                ProgressCommand::Complete { lesson } => ProgressAction::Complete { lesson },
                ProgressCommand::Quiz {
                    lesson,
                    score,
                    passing,
                } => ProgressAction::Quiz {
                    lesson,
                    score,
                    passing,
                },
                ProgressCommand::Reset => ProgressAction::Reset,
            };
            execute_progress(action, file)?;
        }
        Commands::Explain {
            command,
            search,
            category,
            difficulty,
            tip,
        } => {
            let action = if let Some(query) = search {
                ExplainAction::Search(query)
            } else if let Some(category) = category {
                ExplainAction::Category(category.into())
            } else if let Some(difficulty) = difficulty {
                ExplainAction::Difficulty(difficulty.into())
            } else if tip {
                ExplainAction::Tip
            } else if command.is_empty() {
                ExplainAction::All
            } else {
                ExplainAction::Command(command.join(" "))
            };
            execute_explain(action)?;
        }
    }

    Ok(0)
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(&format!("{e:#}"));
            std::process::exit(1);
        }
    }
}
