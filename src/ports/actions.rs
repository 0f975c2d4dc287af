//! Ports onto the delegated package-manager engine, one per operation.
//!
//! Resolution, downloading, and autoload generation all happen behind these
//! traits. Mutating operations report the engine's exit status unchanged;
//! zero means success and any other value is the engine's to define.

use crate::{CheckResult, ExtpmError, Manifest, Options, SearchHit, ShowResult, ShowTarget};
use async_trait::async_trait;

#[async_trait]
pub trait CheckAction: Send + Sync {
    /// Detects packages needing an install or an update.
    async fn check(&self, options: &Options) -> Result<CheckResult, ExtpmError>;
}

#[async_trait]
pub trait InstallAction: Send + Sync {
    /// Installs every package the manifest declares.
    async fn install(&self, options: &Options) -> Result<i32, ExtpmError>;
}

#[async_trait]
pub trait RemoveAction: Send + Sync {
    /// Removes the named packages from the manifest and uninstalls them.
    async fn remove(&self, options: &Options, names: &[String]) -> Result<i32, ExtpmError>;
}

#[async_trait]
pub trait RequireAction: Send + Sync {
    /// Adds name/constraint pairs to the manifest and resolves + installs.
    async fn require(
        &self,
        options: &Options,
        packages: &[(String, String)],
    ) -> Result<i32, ExtpmError>;
}

#[async_trait]
pub trait UpdateAction: Send + Sync {
    /// Updates the named packages, or everything when `names` is empty.
    async fn update(&self, options: &Options, names: &[String]) -> Result<i32, ExtpmError>;
}

#[async_trait]
pub trait SearchAction: Send + Sync {
    async fn search(&self, options: &Options, names: &[String])
    -> Result<Vec<SearchHit>, ExtpmError>;
}

#[async_trait]
pub trait ShowAction: Send + Sync {
    async fn show(
        &self,
        options: &Options,
        target: ShowTarget,
        name: Option<&str>,
        version: Option<&str>,
        root_only: bool,
    ) -> Result<ShowResult, ExtpmError>;
}

#[async_trait]
pub trait JsonAction: Send + Sync {
    /// Normalizes the manifest file in place and returns the parsed result.
    async fn rewrite(&self, options: &Options) -> Result<Manifest, ExtpmError>;
}

#[async_trait]
pub trait AutoloadAction: Send + Sync {
    /// Regenerates the autoload map.
    async fn dump_autoload(&self, options: &Options) -> Result<i32, ExtpmError>;
}

/// The full set of delegated actions, injected at construction instead of
/// looked up in an ambient registry.
pub struct ActionSet {
    pub check: Box<dyn CheckAction>,
    pub install: Box<dyn InstallAction>,
    pub remove: Box<dyn RemoveAction>,
    pub require: Box<dyn RequireAction>,
    pub update: Box<dyn UpdateAction>,
    pub search: Box<dyn SearchAction>,
    pub show: Box<dyn ShowAction>,
    pub json: Box<dyn JsonAction>,
    pub autoload: Box<dyn AutoloadAction>,
}
