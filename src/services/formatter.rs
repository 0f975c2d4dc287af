use crate::{
    AllPackages, ExtpmError, Manifest, Options, PackageRecord, RawPackage, ShowTarget,
    paths::ResourcePaths,
    ports::{ExtensionCollaborator, InstallKind, ShowAction},
};
use std::collections::HashSet;
use std::sync::Arc;

/// Reshapes delegated-engine package objects into flat records for the UI
/// layer, resolving per-package README and config-file links on the way.
pub struct PackageFormatter<P, E>
where
    P: ResourcePaths,
    E: ExtensionCollaborator,
{
    paths: Arc<P>,
    extensions: Arc<E>,
}

impl<P, E> PackageFormatter<P, E>
where
    P: ResourcePaths,
    E: ExtensionCollaborator,
{
    pub fn new(paths: Arc<P>, extensions: Arc<E>) -> Self {
        Self { paths, extensions }
    }

    /// Config file name for a package: namespace segments reversed and
    /// dot-joined, so `acme/widget` becomes `widget.acme.yml`.
    pub fn config_filename(package: &str) -> String {
        let mut segments: Vec<&str> = package.split('/').collect();
        segments.reverse();
        format!("{}.yml", segments.join("."))
    }

    pub fn format_packages(&self, raw: &[RawPackage]) -> Vec<PackageRecord> {
        raw.iter()
            .map(|package| PackageRecord {
                name: package.name.clone(),
                title: self.extensions.composer_title(&package.name),
                version: package.version.clone(),
                authors: package.authors.clone(),
                kind: package.kind.clone(),
                description: package.description.clone(),
                keywords: package.keywords.clone(),
                readme: self.readme_link(&package.name),
                config: self.config_link(&package.name),
            })
            .collect()
    }

    /// Everything the UI shows: installed (from the engine), pending (in the
    /// manifest but not installed), and local (unmanaged) extensions.
    pub async fn all_packages(
        &self,
        show: &dyn ShowAction,
        options: &Options,
        manifest: &Manifest,
    ) -> Result<AllPackages, ExtpmError> {
        let shown = show
            .show(options, ShowTarget::Installed, None, None, false)
            .await?;
        let raw: Vec<RawPackage> = shown.into_values().map(|entry| entry.package).collect();
        let installed = self.format_packages(&raw);

        let installed_names: HashSet<&str> =
            installed.iter().map(|record| record.name.as_str()).collect();
        let pending = manifest
            .require
            .iter()
            .filter(|(name, _)| !installed_names.contains(name.as_str()))
            .map(|(name, constraint)| PackageRecord::pending(name, constraint))
            .collect();

        let local = self
            .extensions
            .enabled()
            .into_iter()
            .filter(|ext| ext.kind == InstallKind::Local)
            .map(|ext| match ext.fragment {
                Some(fragment) => PackageRecord {
                    name: fragment.name,
                    title: Some(ext.title),
                    version: fragment.version,
                    authors: fragment.authors,
                    kind: fragment.kind,
                    description: fragment.description,
                    keywords: fragment.keywords,
                    readme: None,
                    config: None,
                },
                None => PackageRecord {
                    name: ext.name,
                    title: Some(ext.title),
                    version: String::new(),
                    authors: Vec::new(),
                    kind: "local".to_string(),
                    description: None,
                    keywords: Vec::new(),
                    readme: None,
                    config: None,
                },
            })
            .collect();

        Ok(AllPackages {
            installed,
            pending,
            local,
        })
    }

    /// `README.md` wins over `readme.md` when a package ships both.
    fn readme_link(&self, package: &str) -> Option<String> {
        let install_dir = self.paths.vendor_dir(package);
        ["README.md", "readme.md"]
            .into_iter()
            .find(|candidate| install_dir.join(candidate).is_file())
            .map(|candidate| self.paths.vendor_url(package, candidate))
    }

    /// Link present only when the derived config file exists and is readable.
    fn config_link(&self, package: &str) -> Option<String> {
        let filename = Self::config_filename(package);
        let path = self.paths.config_dir().join(&filename);
        if std::fs::File::open(&path).is_ok() {
            Some(self.paths.config_url(&filename))
        } else {
            None
        }
    }
}
