use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

// region: Cluster
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterSpec {
    #[serde(default)]
    pub server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority: Option<String>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cluster {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cluster: ClusterSpec,
}
// endregion

// region: Context
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContextSpec {
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub user: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Context {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub context: ContextSpec,
}
// endregion

// region: User
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct UserSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user: UserSpec,
}
// endregion

// region: Extension
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ExtensionSpec {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_update: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Extension {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extension: ExtensionSpec,
}
// endregion

// region: KubeConfig
/// A kubectl config file. Decoding is a best-effort projection: keys the
/// model doesn't carry (`auth-provider`, `namespace`, ...) are dropped, and
/// missing keys decode to empty values the way kubectl itself tolerates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct KubeConfig {
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub contexts: Vec<Context>,
    #[serde(default)]
    pub current_context: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default = "null_value", skip_serializing_if = "YamlValue::is_null")]
    pub preferences: YamlValue,
}

fn null_value() -> YamlValue {
    YamlValue::Null
}

impl KubeConfig {
    pub fn from_yaml(raw: &[u8]) -> anyhow::Result<KubeConfig> {
        serde_yaml::from_slice(raw).context("Parsing kube config")
    }

    pub fn to_yaml(&self) -> anyhow::Result<Vec<u8>> {
        serde_yaml::to_vec(self).context("Serializing kube config")
    }

    pub fn read_from(path: impl AsRef<Path>) -> anyhow::Result<KubeConfig> {
        let file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .context("Opening kube config")?;
        serde_yaml::from_reader(file).context("Parsing kube config")
    }

    /// Writes the config to `path`, replacing whatever was there. Merging
    /// back into the active config overwrites it in place, so this must not
    /// refuse an existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .context("Opening output config")?;
        serde_yaml::to_writer(file, self).context("Writing kube config")
    }
}
// endregion
