use std::path::PathBuf;

/// Resolves the logical path keys the manager needs into concrete
/// filesystem paths and web URLs.
///
/// Implementors provide the base locations; the derived methods lay out
/// everything else relative to them.
pub trait ResourcePaths: Send + Sync {
    /// Base directory holding managed extensions.
    fn extensions_dir(&self) -> PathBuf;

    /// Directory holding per-extension configuration files.
    fn config_dir(&self) -> PathBuf;

    /// Web URL corresponding to `extensions_dir`, trailing slash included.
    fn extensions_url(&self) -> String;

    /// Package registry base URL, trailing slash included.
    fn site_url(&self) -> String;

    /// Human-readable site name, sent along with diagnostic pings.
    fn site_name(&self) -> String;

    /// Source location of the helper installer script.
    fn installer_source(&self) -> PathBuf;

    /// Name and version this host platform provides to the resolver.
    fn platform_provide(&self) -> (String, String);

    fn composer_cache_dir(&self) -> PathBuf {
        self.extensions_dir().join("cache").join("composer")
    }

    fn manifest_path(&self) -> PathBuf {
        self.extensions_dir().join("composer.json")
    }

    fn log_path(&self) -> PathBuf {
        self.extensions_dir().join("composer.log")
    }

    /// Install directory of a managed package, e.g. `vendor/acme/widget`.
    fn vendor_dir(&self, package: &str) -> PathBuf {
        self.extensions_dir().join("vendor").join(package)
    }

    /// Web URL of a file inside a managed package's install directory.
    fn vendor_url(&self, package: &str, file: &str) -> String {
        format!("{}vendor/{}/{}", self.extensions_url(), package, file)
    }

    /// Web URL of a per-extension configuration file.
    fn config_url(&self, file: &str) -> String {
        format!("{}config/{}", self.extensions_url(), file)
    }

    fn ping_url(&self) -> String {
        format!("{}ping", self.site_url())
    }
}
