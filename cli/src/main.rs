//! Command-line client for the notehub API.
//!
//! This CLI tool provides commands for all note operations:
//! - register: Create an account
//! - login: Obtain a bearer token
//! - list: List your notes
//! - create: Create a new note
//! - read: Retrieve a note by id
//! - update: Update a note's title or content
//! - delete: Delete a note
//! - share: Share a note with another user
//! - search: Search notes by keyword
//!
//! Configuration via environment:
//! - NOTEHUB_URL: Base URL of the notehub server (default: http://localhost:3000)
//! - NOTEHUB_TOKEN: API token for authentication

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, list::ListArgs, login::LoginArgs, read::ReadArgs,
    register::RegisterArgs, search::SearchArgs, share::ShareArgs, update::UpdateArgs,
};

/// Notehub CLI
///
/// Interact with a notehub server from the command line. JSON output by
/// default, `--human` for formatted output.
#[derive(Parser)]
#[command(name = "notehub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notehub server URL
    #[arg(
        long,
        env = "NOTEHUB_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    /// API token for authentication
    #[arg(long, env = "NOTEHUB_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register(RegisterArgs),

    /// Log in and obtain a bearer token
    Login(LoginArgs),

    /// List your notes
    List(ListArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Read a note by id
    Read(ReadArgs),

    /// Update a note's title or content
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Share a note with another user
    Share(ShareArgs),

    /// Search notes by keyword
    Search(SearchArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let token = cli.token.as_deref();
    let result = match cli.command {
        Commands::Register(args) => commands::register::execute(&cli.url, cli.human, args).await,
        Commands::Login(args) => commands::login::execute(&cli.url, cli.human, args).await,
        Commands::List(args) => commands::list::execute(&cli.url, token, cli.human, args).await,
        Commands::Create(args) => commands::create::execute(&cli.url, token, cli.human, args).await,
        Commands::Read(args) => commands::read::execute(&cli.url, token, cli.human, args).await,
        Commands::Update(args) => commands::update::execute(&cli.url, token, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&cli.url, token, cli.human, args).await,
        Commands::Share(args) => commands::share::execute(&cli.url, token, cli.human, args).await,
        Commands::Search(args) => commands::search::execute(&cli.url, token, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
