use crate::demo::{run_catalog, run_demo, run_status_lookup, DemoArgs, StatusLookupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use permit_portal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Municipal Permit Portal",
    about = "Run and demonstrate the land-use document submission portal from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the permit categories and their required documents
    Catalog,
    /// Check the review status of a prior submission
    Status {
        #[command(subcommand)]
        command: StatusCommand,
    },
    /// Run an end-to-end demo of the commercial submission workflow
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum StatusCommand {
    /// Resolve a submission ID against the status directory
    Lookup(StatusLookupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog => run_catalog(),
        Command::Status {
            command: StatusCommand::Lookup(args),
        } => run_status_lookup(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
