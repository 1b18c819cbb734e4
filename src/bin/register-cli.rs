use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use register_form::config::{ApiConfig, DEFAULT_API_URL};
use register_form::state::SubmissionState;
use register_form::{validation, RegistrationClient, SubmissionController};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Register a user account against the registration backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the backend
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Login to register (3-32 chars, letters/numbers/._-)
    #[arg(long, env = "REGISTER_LOGIN")]
    login: String,

    /// Password for the new account
    #[arg(long, env = "REGISTER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Send the request even if the local field checks fail
    #[arg(long)]
    skip_checks: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "register_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let args = Args::parse();

    if !args.skip_checks {
        if let Err(violation) = validation::check(&args.login, &args.password) {
            eprintln!("{violation}");
            return Ok(ExitCode::from(2));
        }
    }

    let client = RegistrationClient::new(ApiConfig::from_optional(Some(&args.api_url)));
    tracing::debug!("Using backend at {}", client.config().base_url);

    let mut controller = SubmissionController::new(client);
    controller.set_login(args.login);
    controller.set_password(args.password);
    controller.submit().await;

    Ok(match controller.state() {
        SubmissionState::Succeeded(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        SubmissionState::Failed(text) => {
            eprintln!("{text}");
            ExitCode::FAILURE
        }
        state => {
            tracing::error!(?state, "Submission did not complete");
            ExitCode::FAILURE
        }
    })
}
