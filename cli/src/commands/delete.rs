//! DELETE command - Delete a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use uuid::Uuid;

use super::{HumanReadable, make_request_no_content, output, with_token};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID
    pub id: Uuid,
}

/// Confirmation printed after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: Uuid,
    pub deleted: bool,
}

impl HumanReadable for DeleteResponse {
    fn print_human(&self) {
        println!("{}", "Note deleted.".green().bold());
        println!();
        println!("  {} {}", "Id:".cyan(), self.id);
    }
}

/// Execute the delete command.
pub async fn execute(base_url: &str, token: Option<&str>, human: bool, args: DeleteArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/notes/{}", args.id);
    make_request_no_content(with_token(client.delete(&url), token)?).await?;

    let response = DeleteResponse {
        id: args.id,
        deleted: true,
    };
    output(&response, human)
}
