pub mod connectivity;
pub mod formatter;
pub mod manifest;

pub use connectivity::{ConnectivityProber, PingDiagnostics, REACHABLE_STATUSES};
pub use formatter::PackageFormatter;
pub use manifest::ManifestBootstrapper;
