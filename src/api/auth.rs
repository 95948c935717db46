//! Interactive sign-in for a Telegram session.

use std::io::{BufRead, Write};

use grammers_client::{Client, SignInError};

use crate::config::validate_phone;
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// Make sure the client is signed in, asking for phone, login code and
/// two-factor password as needed.
///
/// Returns `true` when a new sign-in happened and the session should be saved.
pub async fn ensure_authorized<R: BufRead, W: Write>(
    client: &Client,
    prompter: &mut Prompter<R, W>,
    phone: Option<&str>,
) -> Result<bool> {
    let authorized = client
        .is_authorized()
        .await
        .map_err(|e| Error::Authentication(format!("Failed to check session: {}", e)))?;

    if authorized {
        tracing::debug!("Session is already authorized");
        return Ok(false);
    }

    let phone = match phone {
        Some(phone) => validate_phone(phone)?,
        None => prompter.ask_valid(
            "Enter your phone number (international format): ",
            validate_phone,
        )?,
    };

    let token = client
        .request_login_code(&phone)
        .await
        .map_err(|e| Error::Authentication(format!("Failed to request login code: {}", e)))?;

    let code = prompter.ask("Enter the code you received: ")?;

    match client.sign_in(&token, code.trim()).await {
        Ok(_) => {}
        Err(SignInError::PasswordRequired(password_token)) => {
            let hint = password_token.hint().unwrap_or("none").to_string();
            let password = prompter.ask(&format!(
                "Enter your two-step verification password (hint: {}): ",
                hint
            ))?;

            client
                .check_password(password_token, password.trim())
                .await
                .map_err(|e| Error::Authentication(format!("Wrong password: {}", e)))?;
        }
        Err(e) => return Err(Error::Authentication(e.to_string())),
    }

    tracing::info!("Signed in successfully");
    Ok(true)
}
