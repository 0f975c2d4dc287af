use crate::ExtpmError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk JSON manifest declaring required packages.
///
/// The schema is owned by the delegated engine; fields this crate does not
/// model round-trip through `extra` untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    #[serde(default)]
    pub require: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RepositoryEntry>,

    #[serde(
        rename = "minimum-stability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_stability: Option<String>,

    #[serde(rename = "prefer-stable", default, skip_serializing_if = "Option::is_none")]
    pub prefer_stable: Option<bool>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provide: BTreeMap<String, String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Manifest {
    /// Initial manifest written when none exists yet: no requirements, the
    /// package registry as the sole repository, and a `provide` entry so the
    /// resolver sees the host platform.
    pub fn skeleton(registry_url: &str, provide_name: &str, provide_version: &str) -> Self {
        Self {
            require: BTreeMap::new(),
            repositories: vec![RepositoryEntry {
                kind: "composer".to_string(),
                url: registry_url.to_string(),
            }],
            minimum_stability: Some("dev".to_string()),
            prefer_stable: Some(true),
            provide: BTreeMap::from([(provide_name.to_string(), provide_version.to_string())]),
            extra: serde_json::Map::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ExtpmError> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| ExtpmError::DeserializationError(format!("{}: {e}", path.display())))
    }

    pub fn store(&self, path: &Path) -> Result<(), ExtpmError> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| ExtpmError::SerializationError(e.to_string()))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn requires(&self, package: &str) -> bool {
        self.require.contains_key(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_registry_and_provide_entry() {
        let manifest = Manifest::skeleton("https://market.example.org/", "example/core", "3.0.0");
        assert!(manifest.require.is_empty());
        assert_eq!(manifest.repositories.len(), 1);
        assert_eq!(manifest.repositories[0].kind, "composer");
        assert_eq!(manifest.provide.get("example/core").map(String::as_str), Some("3.0.0"));
        assert_eq!(manifest.minimum_stability.as_deref(), Some("dev"));
    }

    #[test]
    fn unknown_fields_round_trip() {
        let raw = r#"{
            "require": {"acme/widget": "^1.2"},
            "scripts": {"post-install-cmd": "echo done"}
        }"#;
        let manifest: Manifest = serde_json::from_str(raw).unwrap();
        assert!(manifest.requires("acme/widget"));
        assert!(manifest.extra.contains_key("scripts"));

        let out = serde_json::to_value(&manifest).unwrap();
        assert_eq!(out["scripts"]["post-install-cmd"], "echo done");
    }

    #[test]
    fn load_and_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("composer.json");
        let manifest = Manifest::skeleton("https://market.example.org/", "example/core", "3.0.0");
        manifest.store(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
    }
}
