use crate::paths::ResourcePaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed option set consumed by every delegated operation.
///
/// Assembled once per manager instance from environment-derived paths plus
/// hardcoded policy flags, immutable afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub base_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub log_path: PathBuf,

    /// Unset by default; callers never toggle this at runtime.
    pub dry_run: Option<bool>,
    pub verbose: bool,
    pub no_dev: bool,
    pub no_autoloader: bool,
    pub no_scripts: bool,
    pub with_dependencies: bool,
    pub ignore_platform_reqs: bool,
    pub prefer_stable: bool,
    pub prefer_lowest: bool,
    pub sort_packages: bool,
    pub prefer_source: bool,
    pub prefer_dist: bool,
    pub update: bool,
    pub no_update: bool,
    pub update_no_dev: bool,
    pub update_with_dependencies: bool,
    pub dev: bool,
    pub only_name: bool,
    pub optimize_autoloader: bool,
}

impl Options {
    /// Builds the option set from resolved paths. Pure function of the
    /// environment, no error conditions.
    pub fn assemble<P: ResourcePaths>(paths: &P) -> Self {
        Self {
            base_dir: paths.extensions_dir(),
            manifest_path: paths.manifest_path(),
            log_path: paths.log_path(),
            dry_run: None,
            verbose: true,
            no_dev: true,
            no_autoloader: false,
            no_scripts: true,
            with_dependencies: true,
            ignore_platform_reqs: false,
            prefer_stable: true,
            prefer_lowest: false,
            sort_packages: true,
            prefer_source: false,
            prefer_dist: true,
            update: true,
            no_update: false,
            update_no_dev: true,
            update_with_dependencies: true,
            dev: false,
            only_name: true,
            optimize_autoloader: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct StubPaths;

    impl ResourcePaths for StubPaths {
        fn extensions_dir(&self) -> PathBuf {
            PathBuf::from("/tmp/extensions")
        }

        fn config_dir(&self) -> PathBuf {
            PathBuf::from("/tmp/config")
        }

        fn extensions_url(&self) -> String {
            "http://localhost/extensions/".to_string()
        }

        fn site_url(&self) -> String {
            "http://localhost/market/".to_string()
        }

        fn site_name(&self) -> String {
            "test".to_string()
        }

        fn installer_source(&self) -> PathBuf {
            PathBuf::from("/tmp/installer.php")
        }

        fn platform_provide(&self) -> (String, String) {
            ("test/core".to_string(), "1.0.0".to_string())
        }
    }

    #[test]
    fn dist_and_source_preferences_are_mutually_exclusive() {
        let options = Options::assemble(&StubPaths);
        assert!(options.prefer_dist);
        assert!(!options.prefer_source);
    }

    #[test]
    fn policy_flags_are_fixed() {
        let options = Options::assemble(&StubPaths);
        assert!(options.optimize_autoloader);
        assert!(options.sort_packages);
        assert!(options.prefer_stable);
        assert_eq!(options.dry_run, None);
        assert_eq!(options.manifest_path, PathBuf::from("/tmp/extensions/composer.json"));
    }
}
