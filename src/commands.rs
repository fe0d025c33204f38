//! Command handlers for the shell.
//!
//! Each command builds its use case from [`AppDeps`] and renders a short
//! human readable result. Output is returned rather than printed so callers
//! decide where it goes.

use anyhow::Context;
use serde::Serialize;
use tracing::{info_span, warn, Instrument};

use ks_app::usecases::BootstrapOutcome;
use ks_app::{AppDeps, UseCases};
use ks_core::auth::Credentials;
use ks_core::navigation::Route;
use ks_core::preferences::Preferences;
use ks_core::session::keys;
use ks_core::SessionFlags;

use crate::cli::Command;

#[derive(Debug, Serialize)]
struct StatusReport {
    session: SessionFlags,
    user_email: Option<String>,
    landing_route: Route,
    preferences: Preferences,
}

pub async fn execute(deps: &AppDeps, command: Command) -> anyhow::Result<String> {
    let use_cases = UseCases::new(deps);
    let span = info_span!("command.execute", command = command.name());

    async move {
        match command {
            Command::Boot => {
                let outcome = use_cases.bootstrap().spawn().join().await?;
                Ok(match outcome {
                    BootstrapOutcome::Navigated(transition) => {
                        format!("landed on {}", transition.target)
                    }
                    BootstrapOutcome::Cancelled | BootstrapOutcome::AlreadyStarted => {
                        "bootstrap ended without navigating".to_string()
                    }
                })
            }
            Command::Login { email, password } => {
                let transition = use_cases
                    .login()
                    .execute(Credentials::new(email, password))
                    .await?;
                Ok(format!("signed in, now on {}", transition.target))
            }
            Command::Logout => {
                let transition = use_cases.logout().execute().await?;
                Ok(format!("signed out, now on {}", transition.target))
            }
            Command::CompleteOnboarding => {
                let transition = use_cases.complete_onboarding().execute().await?;
                Ok(format!("onboarding complete, now on {}", transition.target))
            }
            Command::ResetStorage => {
                use_cases
                    .reset_storage()
                    .execute()
                    .await
                    .context("Failed to clear store")?;
                Ok("storage cleared".to_string())
            }
            Command::Theme { theme } => {
                let current = use_cases.load_preferences().execute().await;
                let updated = use_cases.apply_theme().execute(current, theme).await?;
                Ok(format!("theme: {}", updated.theme.as_str()))
            }
            Command::Currency { currency } => {
                let current = use_cases.load_preferences().execute().await;
                let updated = use_cases
                    .apply_currency()
                    .execute(current, currency)
                    .await?;
                Ok(format!("currency: {}", updated.currency))
            }
            Command::Status { json } => {
                let report = status(deps, &use_cases).await;
                if json {
                    return Ok(serde_json::to_string_pretty(&report)?);
                }
                Ok(format!(
                    "onboarding seen: {}\nsigned in: {}\nuser email: {}\nlanding route: {}\ntheme: {}\ncurrency: {}",
                    report.session.has_seen_onboarding,
                    report.session.is_authenticated(),
                    report.user_email.as_deref().unwrap_or("-"),
                    report.landing_route,
                    report.preferences.theme.as_str(),
                    report.preferences.currency,
                ))
            }
        }
    }
    .instrument(span)
    .await
}

async fn status(deps: &AppDeps, use_cases: &UseCases<'_>) -> StatusReport {
    let session = use_cases.resolve_session().execute().await;
    let preferences = use_cases.load_preferences().execute().await;
    let user_email = deps.store.get(keys::USER_EMAIL).await.unwrap_or_else(|err| {
        warn!(error = %err, "read user email failed");
        None
    });

    StatusReport {
        landing_route: session.initial_route(),
        session,
        user_email,
        preferences,
    }
}
