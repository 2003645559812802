//! SEARCH command - Search notes by keyword.

use anyhow::Result;
use clap::Args;

use super::{NoteResponse, make_request, output, with_token};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search terms
    pub query: String,
}

/// Execute the search command.
pub async fn execute(base_url: &str, token: Option<&str>, human: bool, args: SearchArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/search");
    let request = client.get(&url).query(&[("q", &args.query)]);

    let response: Vec<NoteResponse> = make_request(with_token(request, token)?).await?;
    output(&response, human)
}
