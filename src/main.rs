//! Telegram Crawler - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use telegram_crawler::{
    api::TelegramClient,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_global_stats, print_info,
        print_warning,
    },
    prompt::Prompter,
    session::CredentialStore,
    workflow::{Outcome, Workflow},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Authentication(_) | Error::Api(_) | Error::ConversationNotFound(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                Error::Input(_) => ExitCode::from(exit_codes::ABORT as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    let session_dir = config.session_directory();
    print_config_summary(
        &config.output_directory().display().to_string(),
        &session_dir.display().to_string(),
        &config.options.text_location.to_string(),
    );

    let mut prompter = Prompter::stdio();

    // Resolve API credentials
    let store = CredentialStore::new(session_dir);
    let credentials = store.resolve(
        &mut prompter,
        config.telegram.api_id,
        config.telegram.api_hash.clone(),
    )?;

    // Connect and sign in
    print_info("Connecting to Telegram...");
    let mut client = TelegramClient::connect(&credentials, &store.session_path()).await?;
    client
        .sign_in(&mut prompter, config.telegram.phone.as_deref())
        .await?;

    let outcome = Workflow::new(&mut client, &mut prompter, &config)
        .run()
        .await?;

    if let Outcome::Completed(stats) = outcome {
        print_global_stats(&stats);
    }

    Ok(())
}
