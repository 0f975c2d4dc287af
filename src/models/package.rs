use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Package metadata as reported by the delegated engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPackage {
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Flattened display view of a package. Ephemeral, never persisted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub title: Option<String>,
    pub version: String,
    pub authors: Vec<Author>,
    pub kind: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub readme: Option<String>,
    pub config: Option<String>,
}

impl PackageRecord {
    /// Placeholder record for a manifest requirement that is not installed
    /// yet. The engine has no metadata for it, so everything but the name
    /// and constraint is synthetic.
    pub fn pending(name: &str, constraint: &str) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            version: constraint.to_string(),
            authors: Vec::new(),
            kind: "unknown".to_string(),
            description: Some("This package is not yet installed.".to_string()),
            keywords: Vec::new(),
            readme: None,
            config: None,
        }
    }
}

/// One entry in a `show` result: the package plus its known versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEntry {
    pub package: RawPackage,
    pub versions: Vec<String>,
}

pub type ShowResult = BTreeMap<String, ShowEntry>;

/// Which package set a `show` call introspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTarget {
    Installed,
    Available,
    Name,
}

impl std::fmt::Display for ShowTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Installed => write!(f, "installed"),
            Self::Available => write!(f, "available"),
            Self::Name => write!(f, "name"),
        }
    }
}

/// A registry search hit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// The three package sets presented to the UI layer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AllPackages {
    pub installed: Vec<PackageRecord>,
    pub pending: Vec<PackageRecord>,
    pub local: Vec<PackageRecord>,
}
