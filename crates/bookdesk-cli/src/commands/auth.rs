//! Sign-in and password recovery CLI commands.

use clap::{Args, Subcommand};

use bookdesk_core::config::AppConfig;
use bookdesk_core::error::AppError;
use bookdesk_service::{AuthService, RecoveryFlow, ResetOutcome, ResetPage};

use crate::output::{self, OutputFormat};

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and print the session token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show the account of the configured token
    Whoami,
    /// Email a password reset link
    ForgotPassword {
        /// Account email
        email: String,
    },
    /// Set a new password using the token from a reset link
    ResetPassword {
        /// Reset token
        #[arg(short, long)]
        token: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute auth commands
pub async fn execute(
    args: &AuthArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::api_client(config)?;

    match &args.command {
        AuthCommand::Login { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let session = AuthService::new(client.clone()).login(email, &password).await?;
            match format {
                OutputFormat::Json => output::print_json(&session),
                OutputFormat::Table => {
                    output::print_success(&format!(
                        "Signed in as {} ({})",
                        session.user.name,
                        session.role().label()
                    ));
                    output::print_kv("Token", &session.token);
                    println!();
                    println!("Export it for later commands:");
                    println!("  export BOOKDESK_API__TOKEN={}", session.token);
                }
            }
        }
        AuthCommand::Whoami => {
            let session = super::require_session(&client).await?;
            match format {
                OutputFormat::Json => output::print_json(&session.user),
                OutputFormat::Table => {
                    output::print_kv("Name", &session.user.name);
                    output::print_kv("Email", &session.user.email);
                    output::print_kv("Role", session.role().label());
                    let permissions: Vec<String> = super::role_gate()
                        .policies()
                        .permissions_for(session.role())
                        .iter()
                        .map(|p| p.to_string())
                        .collect();
                    output::print_kv("Permissions", &permissions.join(", "));
                }
            }
        }
        AuthCommand::ForgotPassword { email } => {
            let message = RecoveryFlow::new(client.clone()).request_reset(email).await?;
            output::print_success(&message);
        }
        AuthCommand::ResetPassword { token, password } => {
            let flow = RecoveryFlow::new(client.clone());
            let ResetPage::Form { token } = flow.open_reset(Some(token.as_str())) else {
                return Err(invalid_link());
            };

            let (password, confirm) = match password {
                Some(p) => (p.clone(), p.clone()),
                None => {
                    let first = prompt_password("New password")?;
                    let second = prompt_password("Confirm new password")?;
                    (first, second)
                }
            };

            match flow.submit_reset(&token, &password, &confirm).await? {
                ResetOutcome::Completed => {
                    output::print_success("Password updated. You can now sign in.")
                }
                ResetOutcome::Redirect(_) => return Err(invalid_link()),
            }
        }
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

fn invalid_link() -> AppError {
    AppError::validation(
        "This reset link is invalid or has expired. Request a new one with `bookdesk auth forgot-password`",
    )
}
