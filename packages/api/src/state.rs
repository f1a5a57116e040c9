use crate::config::{AppConfig, AppMode, LeadRelayConfig};
use crate::leads::{ConsoleLeadRelay, LeadRelay, Web3FormsRelay};
use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

const RELAY_TIMEOUT: Duration = Duration::from_secs(15);

/// Global server state: the configured lead relay.
pub struct AppState {
    pub leads: Arc<dyn LeadRelay>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let leads: Arc<dyn LeadRelay> = match &config.leads {
            LeadRelayConfig::Web3Forms {
                endpoint,
                access_key,
            } => {
                if access_key.is_none() {
                    tracing::warn!("   Leads: Web3Forms without WEB3FORMS_KEY, submissions will be refused");
                } else {
                    tracing::info!("   Leads: Web3Forms ({})", endpoint);
                }
                let client = reqwest::Client::builder()
                    .timeout(RELAY_TIMEOUT)
                    .build()
                    .context("failed to build relay http client")?;
                Arc::new(Web3FormsRelay::new(
                    client,
                    endpoint.clone(),
                    access_key.clone(),
                ))
            }
            LeadRelayConfig::Console => {
                tracing::info!("   Leads: Console (not sending)");
                Arc::new(ConsoleLeadRelay)
            }
        };

        Ok(Self { leads, config })
    }

    pub fn set_global(state: Arc<AppState>) {
        let _ = GLOBAL.set(state);
    }

    /// Falls back to a state built from the environment when the binary did
    /// not install one (tests, alternative launchers).
    pub fn global() -> Arc<AppState> {
        GLOBAL
            .get_or_init(|| {
                let state = AppConfig::from_env()
                    .map_err(anyhow::Error::from)
                    .and_then(AppState::from_config)
                    .unwrap_or_else(|e| {
                        tracing::error!("state.global: falling back to console relay: {e:#}");
                        AppState {
                            leads: Arc::new(ConsoleLeadRelay),
                            config: AppConfig {
                                mode: AppMode::Local,
                                leads: LeadRelayConfig::Console,
                            },
                        }
                    });
                Arc::new(state)
            })
            .clone()
    }
}

static GLOBAL: OnceLock<Arc<AppState>> = OnceLock::new();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LeadForm, LeadOutcome, LeadSource};

    #[tokio::test]
    async fn console_config_builds_console_relay() {
        let state = AppState::from_config(AppConfig {
            mode: AppMode::Local,
            leads: LeadRelayConfig::Console,
        })
        .unwrap();
        let outcome = state
            .leads
            .relay(LeadSource::Landing, LeadForm::default())
            .await;
        assert_eq!(outcome, LeadOutcome::Sent);
    }

    #[tokio::test]
    async fn keyless_web3forms_refuses_leads() {
        let state = AppState::from_config(AppConfig {
            mode: AppMode::Production,
            leads: LeadRelayConfig::Web3Forms {
                endpoint: crate::config::DEFAULT_WEB3FORMS_ENDPOINT.to_string(),
                access_key: None,
            },
        })
        .unwrap();
        let outcome = state
            .leads
            .relay(LeadSource::Contact, LeadForm::default())
            .await;
        assert_eq!(outcome, LeadOutcome::NotConfigured);
    }
}
