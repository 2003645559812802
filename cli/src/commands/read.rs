//! READ command - Retrieve a note by id.

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use super::{NoteResponse, make_request, output, with_token};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Note ID
    pub id: Uuid,
}

/// Execute the read command.
pub async fn execute(base_url: &str, token: Option<&str>, human: bool, args: ReadArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/notes/{}", args.id);
    let response: NoteResponse = make_request(with_token(client.get(&url), token)?).await?;
    output(&response, human)
}
