use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vitrine_cli::{OutputFormat, commands};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for collecting product catalogs from a storefront page",
    long_about = "Vitrine drives a headless Chrome session against an e-commerce storefront, \
                  waits for the catalog to render, extracts product records from the markup, \
                  and prints them as structured output or as a fixed-format text report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products currently shown on the storefront page
    Products {
        /// Storefront URL to scrape
        #[arg(value_name = "URL")]
        url: String,

        /// Output format (pretty, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,

        /// Path to the Chrome binary (checked before platform defaults)
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// Seconds to wait for the catalog to render before treating the store as empty
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        /// JSON file overriding the catalog CSS selectors
        #[arg(long, value_name = "FILE")]
        selectors: Option<PathBuf>,

        /// Chrome remote debugging port (concurrent runs need distinct ports)
        #[arg(long, default_value_t = 9222)]
        port: u16,
    },

    /// Print the fixed-format product report
    Report {
        /// Storefront URL to scrape
        #[arg(value_name = "URL")]
        url: String,

        /// Path to the Chrome binary (checked before platform defaults)
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// Seconds to wait for the catalog to render before treating the store as empty
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        /// JSON file overriding the catalog CSS selectors
        #[arg(long, value_name = "FILE")]
        selectors: Option<PathBuf>,

        /// Chrome remote debugging port (concurrent runs need distinct ports)
        #[arg(long, default_value_t = 9222)]
        port: u16,
    },

    /// Generate shell completion scripts
    #[command(long_about = "Generate shell completion scripts for vitrine.\n\n\
        SUPPORTED SHELLS:\n    \
        bash, zsh, fish, powershell, elvish\n\n\
        INSTALLATION:\n    \
        Bash: vitrine completion --shell bash >> ~/.bashrc\n    \
        Zsh:  vitrine completion --shell zsh >> ~/.zshrc")]
    Completion {
        /// Shell to generate the completion script for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::Products {
            url,
            format,
            chrome_path,
            timeout,
            selectors,
            port,
        } => commands::products::execute(&url, format, chrome_path, timeout, selectors, port),
        Commands::Report {
            url,
            chrome_path,
            timeout,
            selectors,
            port,
        } => commands::report::execute(&url, chrome_path, timeout, selectors, port),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("vitrine_cli=debug,vitrine_core=debug,vitrine_browser=debug")
    } else {
        EnvFilter::new("vitrine_cli=info,vitrine_core=info,vitrine_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
