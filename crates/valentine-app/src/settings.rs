//! Process-wide settings handed from `main` to the root component.

use std::sync::OnceLock;

use valentine_core::ProposalConfig;

/// Config resolved from the command line, set once before launch.
static PROPOSAL_CONFIG: OnceLock<ProposalConfig> = OnceLock::new();

/// Store the config for the root component. Later calls are ignored.
pub fn install(config: ProposalConfig) {
    if PROPOSAL_CONFIG.set(config).is_err() {
        tracing::warn!("proposal config already installed; keeping the first one");
    }
}

/// The installed config, or the defaults when nothing was installed.
pub fn proposal_config() -> ProposalConfig {
    PROPOSAL_CONFIG.get().cloned().unwrap_or_default()
}
