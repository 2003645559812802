//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{NoteResponse, make_request, output, with_token};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Title of the note (must not be blank)
    pub title: String,

    /// Note content
    #[arg(long, default_value = "")]
    pub content: String,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest<'a> {
    title: &'a str,
    content: &'a str,
}

/// Execute the create command.
pub async fn execute(base_url: &str, token: Option<&str>, human: bool, args: CreateArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/notes");
    let request_body = CreateNoteRequest {
        title: &args.title,
        content: &args.content,
    };

    let response: NoteResponse =
        make_request(with_token(client.post(&url).json(&request_body), token)?).await?;
    output(&response, human)
}
