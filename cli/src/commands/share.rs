//! SHARE command - Share a note with another user.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output, with_token};

/// Arguments for the share command.
#[derive(Args)]
pub struct ShareArgs {
    /// Note ID to share
    pub id: Uuid,

    /// ID of the user to share with
    pub user_id: Uuid,
}

/// Request body for sharing a note.
#[derive(Serialize)]
struct ShareNoteRequest {
    user_to_share_with: Uuid,
}

/// Response from sharing a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShareNoteResponse {
    pub detail: String,
}

impl HumanReadable for ShareNoteResponse {
    fn print_human(&self) {
        println!("{}", self.detail.green().bold());
    }
}

/// Execute the share command.
pub async fn execute(base_url: &str, token: Option<&str>, human: bool, args: ShareArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/notes/{}/share", args.id);
    let request_body = ShareNoteRequest {
        user_to_share_with: args.user_id,
    };

    let response: ShareNoteResponse =
        make_request(with_token(client.post(&url).json(&request_body), token)?).await?;
    output(&response, human)
}
