//! UPDATE command - Update a note's title or content.

use anyhow::{Result, bail};
use clap::Args;
use serde::Serialize;
use uuid::Uuid;

use super::{NoteResponse, make_request, output, with_token};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID
    pub id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(long)]
    pub content: Option<String>,
}

/// Request body for updating a note. Absent fields are left unchanged.
#[derive(Serialize)]
struct UpdateNoteRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// Execute the update command.
pub async fn execute(base_url: &str, token: Option<&str>, human: bool, args: UpdateArgs) -> Result<()> {
    if args.title.is_none() && args.content.is_none() {
        bail!("nothing to update: pass --title and/or --content");
    }

    let client = reqwest::Client::new();

    let url = format!("{base_url}/notes/{}", args.id);
    let request_body = UpdateNoteRequest {
        title: args.title.as_deref(),
        content: args.content.as_deref(),
    };

    let response: NoteResponse =
        make_request(with_token(client.put(&url).json(&request_body), token)?).await?;
    output(&response, human)
}
