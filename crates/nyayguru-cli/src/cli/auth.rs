//! Authentication commands: login, register, logout, whoami.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password};
use secrecy::{ExposeSecret, SecretString};

use nyayguru_core::auth::AuthSession;
use nyayguru_core::client::AuthApi;
use nyayguru_types::auth::{RegisterRequest, UserProfile};

use crate::state::AppState;

/// Log in with email + password, or a Google ID token.
///
/// # Examples
///
/// ```bash
/// # Interactive prompt
/// nyay login
///
/// # Script/automation mode
/// nyay login --email neha@example.com
/// nyay login --google-token eyJhbGci...
/// ```
pub async fn login(
    state: &AppState,
    email: Option<&str>,
    google_token: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut session = AuthSession::new(state.client.clone());

    let outcome = match google_token {
        Some(id_token) => session.login_with_google(id_token).await,
        None => {
            let email = match email {
                Some(e) => e.to_string(),
                None => Input::new().with_prompt("Email").interact_text()?,
            };
            let password = Password::new().with_prompt("Password").interact()?;
            session.login(&email, &password).await
        }
    };

    if let Err(err) = outcome {
        return Err(anyhow::anyhow!(err.login_message()));
    }

    let token = session.token().expect("logged in");
    state.token_store.save(token).await?;
    // Clones of the client share state; the token is visible everywhere.
    state
        .client
        .set_token(SecretString::from(token.expose_secret().to_owned()));

    let user = match session.user() {
        Some(user) => user.clone(),
        // Google login responses may omit the profile.
        None => session
            .fetch_profile()
            .await
            .map_err(|err| anyhow::anyhow!(err.user_message()))?,
    };

    if json {
        println!(
            "{}",
            serde_json::json!({"logged_in": true, "user": serde_json::to_value(&user)?})
        );
    } else {
        println!(
            "  {} Logged in as {} ({})",
            style("✓").green().bold(),
            style(&user.username).cyan().bold(),
            user.email
        );
    }

    Ok(())
}

/// Register a new account and log in with the returned token.
pub async fn register(state: &AppState, json: bool) -> Result<()> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let full_name: String = Input::new()
        .with_prompt("Full name (optional)")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords don't match")
        .interact()?;

    let request = RegisterRequest {
        username,
        email,
        password,
        full_name: if full_name.trim().is_empty() {
            None
        } else {
            Some(full_name.trim().to_string())
        },
    };

    let mut session = AuthSession::new(state.client.clone());
    session
        .register(&request)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;

    let token = session.token().expect("registered");
    state.token_store.save(token).await?;
    state
        .client
        .set_token(SecretString::from(token.expose_secret().to_owned()));

    if json {
        println!(
            "{}",
            serde_json::json!({"registered": true, "username": request.username})
        );
    } else {
        println!(
            "  {} Account '{}' created. You are now logged in.",
            style("✓").green().bold(),
            style(&request.username).cyan().bold()
        );
    }

    Ok(())
}

/// Forget the saved token.
pub async fn logout(state: &AppState, json: bool) -> Result<()> {
    state.token_store.clear().await?;
    state.client.clear_token();

    if json {
        println!("{}", serde_json::json!({"logged_out": true}));
    } else {
        println!("  {} Logged out", style("✓").green().bold());
    }

    Ok(())
}

/// Show the logged-in user's profile.
pub async fn whoami(state: &AppState, json: bool) -> Result<()> {
    let profile = state
        .client
        .me()
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }

    Ok(())
}

fn print_profile(profile: &UserProfile) {
    println!();
    println!(
        "  {} {}",
        style("👤").bold(),
        style(&profile.username).cyan().bold()
    );
    println!("  Email: {}", profile.email);
    if let Some(full_name) = &profile.full_name {
        println!("  Name:  {full_name}");
    }
    if let Some(last_login) = &profile.last_login {
        println!(
            "  Last login: {}",
            style(last_login.format("%Y-%m-%d %H:%M UTC")).dim()
        );
    }
    println!();
}
