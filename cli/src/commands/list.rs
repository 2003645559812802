//! LIST command - List your notes.

use anyhow::Result;
use clap::Args;

use super::{NoteResponse, make_request, output, with_token};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {}

/// Execute the list command.
pub async fn execute(base_url: &str, token: Option<&str>, human: bool, _args: ListArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/notes");
    let response: Vec<NoteResponse> = make_request(with_token(client.get(&url), token)?).await?;
    output(&response, human)
}
