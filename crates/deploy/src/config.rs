//! The deployment config file. It holds the constants of a deployment: the
//! token contract the Validator is bound to and the deployment profile.

use {
    crate::profile::Profile,
    alloy_primitives::Address,
    anyhow::{Context, Result},
    serde::Deserialize,
    std::path::Path,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Address of the external token contract passed to the Validator (and,
    /// with the `linked` profile, to the Aggregator).
    pub token: Address,

    #[serde(default)]
    pub profile: Profile,
}

/// Loads the deployment config from a TOML file.
pub async fn load(path: &Path) -> Result<Config> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    toml::de::from_str(&data).with_context(|| format!("invalid deployment config {path:?}"))
}
