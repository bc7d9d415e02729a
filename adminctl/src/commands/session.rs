use super::Context;
use anyhow::{bail, Context as _, Result};
use clap::Args;
use session_store::{redact_value, StoreError, TOKEN_ENV_VAR, TOKEN_KEY};
use tracing::info;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Bearer token issued by the backend
    #[arg(long)]
    pub token: String,
}

pub fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    let token = args.token.trim();
    if token.is_empty() {
        bail!("Token must not be empty");
    }

    let store = ctx.store();
    store
        .set(TOKEN_KEY, token)
        .context("Failed to save session")?;
    info!("Session written to {}", store.path().display());
    println!("Logged in. Session saved to {}", store.path().display());
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    let store = ctx.store();
    if store
        .remove(TOKEN_KEY)
        .context("Failed to update session")?
    {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

pub fn status(ctx: &Context) -> Result<()> {
    let store = ctx.store();
    println!("API URL:      {}", ctx.config.api_base_url);
    println!("Session file: {}", store.path().display());

    match store.get(TOKEN_KEY) {
        Ok(token) => println!("Token:        {}", redact_value(&token)),
        Err(StoreError::KeyNotFound { .. }) => println!("Token:        (not logged in)"),
        Err(e) => return Err(e).context("Failed to read session"),
    }
    if std::env::var(TOKEN_ENV_VAR).is_ok() {
        println!("Note: {} is set and takes precedence", TOKEN_ENV_VAR);
    }
    Ok(())
}
