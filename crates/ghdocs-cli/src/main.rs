// Rust guideline compliant 2026-02-06

//! ghdocs CLI Application
//!
//! Command-line interface for browsing repository documentation and issues
//! with approximate name lookup.

use clap::Parser;
use ghdocs_cli::{commands, create_formatter, AppContext};
use ghdocs_core::{Config, OutputFormat as ConfigOutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "ghdocs",
    version,
    about = "Browse repository documentation and issues with forgiving name lookup",
    long_about = "ghdocs reads Markdown documentation and issues from a GitHub repository. Category and document names may be approximate: ordering prefixes, case, separators and small typos are tolerated.",
    after_help = "Examples:\n  ghdocs resolve refrence preface reference appendix\n  ghdocs categories\n  ghdocs docs \"getting started\"\n  ghdocs show reference cli-options\n  ghdocs issues --state all --label bug --limit 10\n  ghdocs issue 1234 --comments\n  ghdocs search \"cache miss\"\n  ghdocs serve --log-file ghdocs.log\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve a name against candidate names (offline)
    Resolve {
        /// Name to resolve
        input: String,

        /// Candidate names, in priority order
        #[arg(required = true)]
        candidates: Vec<String>,

        /// Maximum edit distance for a match
        #[arg(long)]
        threshold: Option<usize>,

        /// Maximum suggestions when nothing matches
        #[arg(long)]
        max_suggestions: Option<usize>,
    },

    /// List documentation categories
    Categories,

    /// List the documents of a category
    Docs {
        /// Category name (approximate names are resolved)
        category: String,
    },

    /// Print a document
    Show {
        /// Category name (approximate names are resolved)
        category: String,

        /// Document name without extension (approximate names are resolved)
        document: String,
    },

    /// List issues
    Issues {
        /// Filter by state: open, closed or all
        #[arg(long)]
        state: Option<String>,

        /// Filter by label
        #[arg(long, value_delimiter = ',')]
        label: Vec<String>,

        /// Maximum number of issues (1-100)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show an issue
    Issue {
        /// Issue number
        number: u64,

        /// Include comments
        #[arg(long)]
        comments: bool,
    },

    /// Search issues by text
    Search {
        /// Search text
        query: String,

        /// Filter by state: open, closed or all
        #[arg(long)]
        state: Option<String>,

        /// Filter by label
        #[arg(long, value_delimiter = ',')]
        label: Vec<String>,

        /// Maximum number of issues (1-100)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Serve the MCP tools over stdio
    Serve {
        /// Log level: error, warn, info or debug
        #[arg(long, default_value = "info")]
        log_level: String,

        /// Write logs to a file instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // Explicit flags win over the configured format
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => match config.output_format {
            ConfigOutputFormat::Json => "json",
            ConfigOutputFormat::Table => "table",
            ConfigOutputFormat::Plain => "plain",
        },
    };
    let formatter = create_formatter(format);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return ExitCode::SUCCESS;
    };

    match run(command, config, cli.config, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Commands,
    config: Config,
    config_path: Option<PathBuf>,
    formatter: &dyn ghdocs_cli::OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Commands::Resolve {
            input,
            candidates,
            threshold,
            max_suggestions,
        } => commands::resolve::execute(
            input,
            candidates,
            threshold,
            max_suggestions,
            &config.resolver,
            formatter,
        ),
        Commands::Serve {
            log_level,
            log_file,
        } => commands::serve::execute(config_path, log_level, log_file),
        Commands::Categories => {
            let ctx = AppContext::new(config)?;
            commands::categories::execute(&ctx, formatter)
        }
        Commands::Docs { category } => {
            let ctx = AppContext::new(config)?;
            commands::docs::execute(&ctx, category, formatter)
        }
        Commands::Show { category, document } => {
            let ctx = AppContext::new(config)?;
            commands::show::execute(&ctx, category, document, formatter)
        }
        Commands::Issues {
            state,
            label,
            limit,
        } => {
            let ctx = AppContext::new(config)?;
            commands::issues::execute(&ctx, state, label, limit, formatter)
        }
        Commands::Issue { number, comments } => {
            let ctx = AppContext::new(config)?;
            commands::issue::execute(&ctx, number, comments, formatter)
        }
        Commands::Search {
            query,
            state,
            label,
            limit,
        } => {
            let ctx = AppContext::new(config)?;
            commands::search::execute(&ctx, query, state, label, limit, formatter)
        }
    }
}
