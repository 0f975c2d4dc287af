use crate::{
    AllPackages, CheckResult, ConnectivityState, ExtpmError, Manifest, Options, PackageRecord,
    RawPackage, SearchHit, ShowResult, ShowTarget,
    paths::ResourcePaths,
    ports::{ActionSet, ExtensionCollaborator, NetworkOperations},
    services::{ConnectivityProber, ManifestBootstrapper, PackageFormatter, PingDiagnostics},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Environment variable the delegated engine reads its cache directory from.
const ENGINE_HOME_VAR: &str = "COMPOSER_HOME";

/// Main application service coordinating extension package operations.
///
/// One instance is constructed per administrative request and discarded
/// afterwards. Construction assembles the option set, probes the registry,
/// and (when reachable and writable) bootstraps the manifest and opens a
/// session over the delegated actions. Every dispatch method fails with
/// [`ExtpmError::SessionUnavailable`] while offline; callers should check
/// [`PackageManager::is_online`] first.
pub struct PackageManager<P, E>
where
    P: ResourcePaths,
    E: ExtensionCollaborator,
{
    options: Options,
    connectivity: ConnectivityState,
    formatter: PackageFormatter<P, E>,
    session: Option<Session>,
}

struct Session {
    actions: ActionSet,
    manifest: Manifest,
}

impl<P, E> PackageManager<P, E>
where
    P: ResourcePaths,
    E: ExtensionCollaborator,
{
    pub async fn connect<N: NetworkOperations>(
        network: N,
        paths: Arc<P>,
        extensions: Arc<E>,
        actions: ActionSet,
    ) -> Result<Self, ExtpmError> {
        let options = Options::assemble(&*paths);
        let formatter = PackageFormatter::new(paths.clone(), extensions);
        let bootstrapper = ManifestBootstrapper::new(paths.clone());

        redirect_engine_cache(&*paths);

        if !bootstrapper.extensions_writable() {
            let reason = ExtpmError::PermissionError(paths.extensions_dir());
            warn!(dir = %paths.extensions_dir().display(), "extensions directory not writable, starting offline");
            return Ok(Self {
                options,
                connectivity: ConnectivityState::offline(reason.to_string()),
                formatter,
                session: None,
            });
        }

        let mut connectivity = copy_installer(&*paths);

        let diagnostics = PingDiagnostics {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            site_name: paths.site_name(),
            interpreter: paths.platform_provide().1,
            server: std::env::var("SERVER_SOFTWARE").ok(),
        };
        let probed = ConnectivityProber::new(network)
            .probe(&paths.ping_url(), Some(&diagnostics))
            .await;
        for message in probed.messages() {
            connectivity.record(message.clone());
        }
        if !probed.is_online() {
            connectivity.mark_offline();
            info!("package registry unreachable, starting offline");
            return Ok(Self {
                options,
                connectivity,
                formatter,
                session: None,
            });
        }

        let session = match bootstrapper
            .ensure_manifest(actions.json.as_ref(), &options)
            .await
        {
            Ok(manifest) => {
                debug!("manifest bootstrapped, session open");
                Some(Session { actions, manifest })
            }
            Err(e) => {
                warn!(error = %e, "manifest bootstrap failed, starting offline");
                connectivity.record(format!("Updating the manifest file failed: {e}"));
                connectivity.mark_offline();
                None
            }
        };

        Ok(Self {
            options,
            connectivity,
            formatter,
            session,
        })
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Diagnostic messages accumulated while starting up.
    pub fn messages(&self) -> &[String] {
        self.connectivity.messages()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The manifest as parsed during bootstrap. `None` while offline.
    pub fn manifest(&self) -> Option<&Manifest> {
        self.session.as_ref().map(|session| &session.manifest)
    }

    fn session(&self) -> Result<&Session, ExtpmError> {
        self.session.as_ref().ok_or(ExtpmError::SessionUnavailable)
    }

    /// Detects packages needing an install or an update.
    pub async fn check(&self) -> Result<CheckResult, ExtpmError> {
        let session = self.session()?;
        session.actions.check.check(&self.options).await
    }

    /// Installs every package the manifest declares.
    pub async fn install(&self) -> Result<(), ExtpmError> {
        let session = self.session()?;
        let code = session.actions.install.install(&self.options).await?;
        ExtpmError::from_status("install", code)
    }

    pub async fn remove(&self, names: &[String]) -> Result<(), ExtpmError> {
        let session = self.session()?;
        let code = session.actions.remove.remove(&self.options, names).await?;
        ExtpmError::from_status("remove", code)
    }

    /// Adds name/constraint pairs to the manifest and installs them.
    pub async fn require(&self, packages: &[(String, String)]) -> Result<(), ExtpmError> {
        let session = self.session()?;
        let code = session
            .actions
            .require
            .require(&self.options, packages)
            .await?;
        ExtpmError::from_status("require", code)
    }

    /// Updates the named packages, or everything when `names` is empty.
    pub async fn update(&self, names: &[String]) -> Result<(), ExtpmError> {
        let session = self.session()?;
        let code = session.actions.update.update(&self.options, names).await?;
        ExtpmError::from_status("update", code)
    }

    pub async fn search(&self, names: &[String]) -> Result<Vec<SearchHit>, ExtpmError> {
        let session = self.session()?;
        session.actions.search.search(&self.options, names).await
    }

    pub async fn show(
        &self,
        target: ShowTarget,
        name: Option<&str>,
        version: Option<&str>,
        root_only: bool,
    ) -> Result<ShowResult, ExtpmError> {
        let session = self.session()?;
        session
            .actions
            .show
            .show(&self.options, target, name, version, root_only)
            .await
    }

    /// Regenerates the autoload map.
    pub async fn dump_autoload(&self) -> Result<(), ExtpmError> {
        let session = self.session()?;
        let code = session
            .actions
            .autoload
            .dump_autoload(&self.options)
            .await?;
        ExtpmError::from_status("autoload", code)
    }

    pub fn format_packages(&self, raw: &[RawPackage]) -> Vec<PackageRecord> {
        self.formatter.format_packages(raw)
    }

    /// Installed, pending, and local package sets for presentation.
    pub async fn all_packages(&self) -> Result<AllPackages, ExtpmError> {
        let session = self.session()?;
        self.formatter
            .all_packages(
                session.actions.show.as_ref(),
                &self.options,
                &session.manifest,
            )
            .await
    }
}

/// Points the delegated engine's cache at our resolved directory. Process
/// wide, but every construction writes the same value, so repeats are
/// idempotent. Managers are built on the request path before any worker
/// threads touch the environment.
fn redirect_engine_cache<P: ResourcePaths>(paths: &P) {
    let cache_dir = paths.composer_cache_dir();
    unsafe {
        std::env::set_var(ENGINE_HOME_VAR, &cache_dir);
    }
    debug!(dir = %cache_dir.display(), "engine cache redirected");
}

/// Copies the helper installer script into the extensions base directory.
/// A failed copy is a diagnostic, not a startup failure.
fn copy_installer<P: ResourcePaths>(paths: &P) -> ConnectivityState {
    let source = paths.installer_source();
    let mut state = ConnectivityState::online();
    let Some(file_name) = source.file_name() else {
        state.record(format!(
            "Installer script source `{}` has no file name",
            source.display()
        ));
        return state;
    };
    let target = paths.extensions_dir().join(file_name);
    if let Err(e) = std::fs::copy(&source, &target) {
        state.record(format!(
            "Copying the installer script to `{}` failed: {e}",
            target.display()
        ));
    }
    state
}
