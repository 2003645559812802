//! REGISTER command - Create a new account.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Username for the new account
    pub username: String,

    /// Email address
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

/// Request body for registration.
#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Response from registration.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl HumanReadable for RegisterResponse {
    fn print_human(&self) {
        println!("{}", "Account created!".green().bold());
        println!();
        println!("  {} {}", "Id:".cyan(), self.id);
        println!("  {} {}", "Username:".cyan(), self.username);
        println!("  {} {}", "Email:".cyan(), self.email);
        println!();
        println!("  Log in with: notehub login {} --password <password>", self.username);
    }
}

/// Execute the register command.
pub async fn execute(base_url: &str, human: bool, args: RegisterArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/auth/register");
    let request_body = RegisterRequest {
        username: &args.username,
        email: &args.email,
        password: &args.password,
    };

    let response: RegisterResponse =
        make_request(client.post(&url).json(&request_body)).await?;
    output(&response, human)
}
