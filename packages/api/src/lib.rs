//! Shared data, portfolio logic and server functions for the Asseni site.
use dioxus::prelude::*;

pub mod catalog;
pub mod config;
pub mod portfolio;
pub mod types;

#[cfg(feature = "server")]
pub mod leads;

#[cfg(feature = "server")]
pub mod state;


use types::{LeadForm, LeadOutcome, LeadSource};

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Detailed health check
#[get("/api/health/detailed")]
pub async fn detailed_health_check() -> Result<serde_json::Value, ServerFnError> {
    use serde_json::json;

    #[cfg(feature = "server")]
    tracing::debug!("detailed_health_check");

    #[cfg(feature = "server")]
    let leads = match &state::AppState::global().config.leads {
        config::LeadRelayConfig::Web3Forms {
            access_key: Some(_),
            ..
        } => "web3forms",
        config::LeadRelayConfig::Web3Forms { access_key: None, .. } => "unconfigured",
        config::LeadRelayConfig::Console => "console",
    };
    #[cfg(not(feature = "server"))]
    let leads = "unknown";

    Ok(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "leads": leads,
            "catalog": catalog::projects().len(),
        }
    }))
}

/// Forward a visitor's contact request to the company mailbox.
///
/// Expected failures come back as [`LeadOutcome`] values; an `Err` means the
/// request itself was malformed or never reached the server.
#[post("/api/leads")]
pub async fn submit_lead(source: LeadSource, form: LeadForm) -> Result<LeadOutcome, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (source, form);
        Err(ServerFnError::new("submit_lead is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::info!(
            "leads.submit: source={} phone={} email={}",
            source.as_str(),
            leads::phone_label(&form.phone),
            leads::email_label(&form.email)
        );
        if let Some(field) = form.missing_field(source) {
            tracing::info!("leads.submit: missing field={}", field.as_str());
            return Err(ServerFnError::new(format!(
                "missing required field: {}",
                field.as_str()
            )));
        }

        let outcome = state::AppState::global().leads.relay(source, form).await;
        tracing::info!("leads.submit: outcome={outcome:?}");
        Ok(outcome)
    }
}
