//! Command implementations and shared helpers.

pub mod create;
pub mod delete;
pub mod list;
pub mod login;
pub mod read;
pub mod register;
pub mod search;
pub mod share;
pub mod update;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// A note as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub owner: Uuid,
    pub shared_with: Vec<Uuid>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Error body returned by the server on failure.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// Types that can render themselves for `--human` output.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Print a response as pretty JSON or human-readable text.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Format a timestamp for human output.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Attach the bearer token to a request, failing if none is configured.
pub fn with_token(
    builder: reqwest::RequestBuilder,
    token: Option<&str>,
) -> Result<reqwest::RequestBuilder> {
    let token =
        token.context("authentication required: pass --token or set NOTEHUB_TOKEN")?;
    Ok(builder.header(reqwest::header::AUTHORIZATION, format!("Token {token}")))
}

/// Send a request and decode the JSON response, surfacing server errors.
pub async fn make_request<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T> {
    let response = builder.send().await.context("request failed")?;
    let status = response.status();

    if !status.is_success() {
        let detail = response
            .json::<ErrorDetail>()
            .await
            .map(|e| e.detail)
            .unwrap_or_else(|_| "unknown error".to_string());
        bail!("{status}: {detail}");
    }

    response.json::<T>().await.context("invalid response body")
}

/// Send a request that returns no body on success (204).
pub async fn make_request_no_content(builder: reqwest::RequestBuilder) -> Result<()> {
    let response = builder.send().await.context("request failed")?;
    let status = response.status();

    if !status.is_success() {
        let detail = response
            .json::<ErrorDetail>()
            .await
            .map(|e| e.detail)
            .unwrap_or_else(|_| "unknown error".to_string());
        bail!("{status}: {detail}");
    }

    Ok(())
}

impl HumanReadable for NoteResponse {
    fn print_human(&self) {
        println!("{}", self.title.green().bold());
        println!("  {} {}", "Id:".cyan(), self.id);
        println!("  {} {}", "Owner:".cyan(), self.owner);
        if !self.shared_with.is_empty() {
            let shared: Vec<String> = self.shared_with.iter().map(|u| u.to_string()).collect();
            println!("  {} {}", "Shared with:".cyan(), shared.join(", "));
        }
        println!("  {} {}", "Updated:".cyan(), format_timestamp(&self.updated));
        println!();
        if self.content.is_empty() {
            println!("  {}", "(empty)".dimmed());
        } else {
            println!("{}", self.content);
        }
    }
}

impl HumanReadable for Vec<NoteResponse> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        println!(
            "  {:<38} {:<18} {}",
            "Id".cyan(),
            "Updated".cyan(),
            "Title".cyan()
        );
        println!("  {}", "-".repeat(70));

        for note in self {
            println!(
                "  {:<38} {:<18} {}",
                note.id,
                format_timestamp(&note.updated),
                note.title
            );
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.len());
    }
}
