use thiserror::Error;

use crate::config::KubeConfig;

/// Why two configs could not be combined. A rejected merge is ordinary
/// usage, not a fault: callers are expected to report it and keep running
/// with their primary config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("cannot merge configs with different versions: {main} and {extra}")]
    ApiVersionMismatch { main: String, extra: String },
    #[error("cannot merge kind: {main} and kind: {extra}")]
    KindMismatch { main: String, extra: String },
}

/// Combines two configs into a new one. Entry lists are concatenated, main
/// config first, without deduplication; `current-context` and `preferences`
/// are taken from the main config. The inputs are borrowed, so a failed
/// merge leaves the caller's configs exactly as they were.
pub fn merge(main: &KubeConfig, extra: &KubeConfig) -> Result<KubeConfig, MergeError> {
    if main.api_version != extra.api_version {
        return Err(MergeError::ApiVersionMismatch {
            main: main.api_version.clone(),
            extra: extra.api_version.clone(),
        });
    }

    if main.kind != extra.kind {
        return Err(MergeError::KindMismatch {
            main: main.kind.clone(),
            extra: extra.kind.clone(),
        });
    }

    let mut clusters = main.clusters.clone();
    clusters.extend(extra.clusters.iter().cloned());

    let mut contexts = main.contexts.clone();
    contexts.extend(extra.contexts.iter().cloned());

    let mut users = main.users.clone();
    users.extend(extra.users.iter().cloned());

    Ok(KubeConfig {
        api_version: main.api_version.clone(),
        kind: main.kind.clone(),
        clusters,
        contexts,
        current_context: main.current_context.clone(),
        users,
        preferences: main.preferences.clone(),
    })
}
