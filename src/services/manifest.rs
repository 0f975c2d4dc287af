use crate::{ExtpmError, Manifest, Options, paths::ResourcePaths, ports::JsonAction};
use std::sync::Arc;
use tracing::debug;

/// Ensures the on-disk manifest exists and is current before the delegated
/// engine is handed a session over it.
pub struct ManifestBootstrapper<P: ResourcePaths> {
    paths: Arc<P>,
}

impl<P: ResourcePaths> ManifestBootstrapper<P> {
    pub fn new(paths: Arc<P>) -> Self {
        Self { paths }
    }

    /// Whether the extensions directory exists (creating it if needed) and
    /// accepts writes. A `false` here puts the whole manager offline.
    pub fn extensions_writable(&self) -> bool {
        let dir = self.paths.extensions_dir();
        if std::fs::create_dir_all(&dir).is_err() {
            return false;
        }
        std::fs::metadata(&dir)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false)
    }

    /// Writes the skeleton manifest when none exists, then lets the engine's
    /// json action normalize the file, and returns the parsed contents.
    pub async fn ensure_manifest(
        &self,
        json: &dyn JsonAction,
        options: &Options,
    ) -> Result<Manifest, ExtpmError> {
        let path = self.paths.manifest_path();
        if !path.exists() {
            let (provide_name, provide_version) = self.paths.platform_provide();
            let skeleton =
                Manifest::skeleton(&self.paths.site_url(), &provide_name, &provide_version);
            skeleton.store(&path)?;
            debug!(path = %path.display(), "wrote manifest skeleton");
        }

        json.rewrite(options).await
    }
}
