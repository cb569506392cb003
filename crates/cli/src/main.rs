use crate::{
    config::{DialectKind, SearchConfig},
    env::EnvManager,
    error::CliError,
};
use clap::Parser;
use commands::Commands;
use planner::{ColumnMap, SearchSql};
use search_filter::FilterRegistry;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "pkgsearch",
    version = "0.1.0",
    about = "Package search query compiler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Load settings from this env file")]
    env_file: Option<String>,

    #[arg(long, global = true, value_enum, help = "SQL dialect to render")]
    dialect: Option<DialectKind>,

    #[arg(long, global = true, help = "Maximum query length in characters")]
    max_query_length: Option<usize>,

    #[arg(long, global = true, help = "Reject queries containing invalid filters")]
    strict: bool,
}

impl Cli {
    fn load_config(&self) -> Result<SearchConfig, CliError> {
        let mut env = EnvManager::new();
        match &self.env_file {
            Some(path) => env.load_from_file(path)?,
            None => {
                if let Some(path) = EnvManager::default_file().filter(|p| p.exists()) {
                    debug!("Loading settings from {}", path.display());
                    env.load_from_file(path)?;
                }
            }
        }

        let mut config = SearchConfig::from_env(&env)?;
        if let Some(dialect) = self.dialect {
            config.dialect = dialect;
        }
        if let Some(max) = self.max_query_length {
            config.max_query_length = max;
        }
        if self.strict {
            config.strict = true;
        }
        Ok(config)
    }
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so that JSON output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let registry = FilterRegistry::standard();

    match cli.command {
        Commands::Compile { query, json } => {
            let compilation = config.compile(registry, &query.join(" "))?;
            if json {
                println!("{}", output::compilation_json(&compilation)?);
            } else {
                print!("{}", output::compilation_text(&compilation));
            }
        }
        Commands::Sql {
            query,
            columns,
            json,
        } => {
            let columns = match columns {
                Some(path) => load_columns(&path)?,
                None => ColumnMap::default(),
            };
            let compilation = config.compile(registry, &query.join(" "))?;
            let dialect = config.dialect.dialect();
            let rendered = SearchSql::render(&compilation.query, &columns, dialect)?;

            if json {
                println!(
                    "{}",
                    output::sql_json(&rendered, dialect, &compilation.issues)?
                );
            } else {
                print!("{}", output::sql_text(&rendered, &compilation.issues));
            }
        }
        Commands::Keys { json } => {
            if json {
                println!("{}", output::kinds_json(registry.kinds())?);
            } else {
                print!("{}", output::kinds_text(registry.kinds()));
            }
        }
    }

    Ok(())
}

fn load_columns(path: &str) -> Result<ColumnMap, CliError> {
    info!("Loading column map from {path}");
    let source = std::fs::read_to_string(path)?;
    serde_json::from_str(&source).map_err(CliError::ColumnsDeserialize)
}
