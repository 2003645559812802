//! LOGIN command - Obtain a bearer token.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Username
    pub username: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

/// Request body for login.
#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response from login.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
}

impl HumanReadable for LoginResponse {
    fn print_human(&self) {
        println!("{}", "Logged in!".green().bold());
        println!();
        println!("  {} {}", "User:".cyan(), self.username);
        println!("  {} {}", "Token:".cyan(), self.token);
        println!();
        println!("  export NOTEHUB_TOKEN={}", self.token);
    }
}

/// Execute the login command.
pub async fn execute(base_url: &str, human: bool, args: LoginArgs) -> Result<()> {
    let client = reqwest::Client::new();

    let url = format!("{base_url}/auth/login");
    let request_body = LoginRequest {
        username: &args.username,
        password: &args.password,
    };

    let response: LoginResponse = make_request(client.post(&url).json(&request_body)).await?;
    output(&response, human)
}
