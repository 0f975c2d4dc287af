use crate::RawPackage;

/// How an extension got onto disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallKind {
    /// Installed through the registry and tracked by the manifest.
    Managed,
    /// Placed locally, exempt from registry version tracking.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    pub name: String,
    pub title: String,
    pub kind: InstallKind,
    /// The extension's own manifest fragment, when it ships one.
    pub fragment: Option<RawPackage>,
}

/// The host application's view of its enabled extensions.
pub trait ExtensionCollaborator: Send + Sync {
    fn enabled(&self) -> Vec<ExtensionDescriptor>;

    /// Human-readable title registered for a package name, if any.
    fn composer_title(&self, package: &str) -> Option<String>;
}
