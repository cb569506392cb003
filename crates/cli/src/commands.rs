use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a query and show its filters, free text and issues
    Compile {
        /// Query text; multiple arguments are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(long, help = "Print the compilation as JSON")]
        json: bool,
    },
    /// Render the WHERE condition for a query
    Sql {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(
            long,
            help = "JSON file mapping filter keys to columns, replacing the built-in map"
        )]
        columns: Option<String>,

        #[arg(long, help = "Print the SQL and its parameters as JSON")]
        json: bool,
    },
    /// List the supported filter keys
    Keys {
        #[arg(long, help = "Print the filter kinds as JSON")]
        json: bool,
    },
}
