use crate::{ConnectivityState, ports::NetworkOperations};
use tracing::{debug, warn};
use url::Url;

/// HTTP statuses the registry ping may legitimately answer with.
///
/// Redirects and even `410 Gone` still prove the server is reachable, which
/// is all the probe needs to know.
pub const REACHABLE_STATUSES: [u16; 8] = [200, 203, 206, 300, 301, 302, 307, 410];

/// Details attached to the ping query so the registry can log who is
/// calling. Optional; the probe works without them.
#[derive(Debug, Clone, Default)]
pub struct PingDiagnostics {
    pub tool_version: String,
    pub site_name: String,
    pub interpreter: String,
    pub server: Option<String>,
}

/// Probes the package registry to decide online/offline mode.
///
/// Connectivity is advisory: transport failures are downgraded to recorded
/// messages and an offline state, never returned as errors.
pub struct ConnectivityProber<N: NetworkOperations> {
    network: N,
}

impl<N: NetworkOperations> ConnectivityProber<N> {
    pub fn new(network: N) -> Self {
        Self { network }
    }

    pub async fn probe(
        &self,
        ping_url: &str,
        diagnostics: Option<&PingDiagnostics>,
    ) -> ConnectivityState {
        let mut url = match Url::parse(ping_url) {
            Ok(url) => url,
            Err(e) => {
                return ConnectivityState::offline(format!(
                    "Invalid package server URL `{ping_url}`: {e}"
                ));
            }
        };

        if let Some(diag) = diagnostics {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("bolt_ver", &diag.tool_version)
                .append_pair("bolt_name", &diag.site_name)
                .append_pair("php", &diag.interpreter);
            if let Some(server) = &diag.server {
                pairs.append_pair("www", server);
            }
        }

        match self.network.head(&url).await {
            Ok(response) if REACHABLE_STATUSES.contains(&response.status) => {
                debug!(status = response.status, "package server reachable");
                ConnectivityState::online()
            }
            Ok(response) => {
                warn!(status = response.status, "package server returned unexpected status");
                ConnectivityState::offline(format!(
                    "Testing connection to the package server returned HTTP status {}",
                    response.status
                ))
            }
            Err(e) => {
                warn!(error = %e, "package server probe failed");
                ConnectivityState::offline(format!(
                    "Testing connection to the package server failed: {e}"
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtpmError, ports::ProbeResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockNetwork {
        outcome: Result<u16, String>,
        seen: Mutex<Option<Url>>,
    }

    impl MockNetwork {
        fn status(status: u16) -> Self {
            Self {
                outcome: Ok(status),
                seen: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl NetworkOperations for MockNetwork {
        async fn head(&self, url: &Url) -> Result<ProbeResponse, ExtpmError> {
            *self.seen.lock().unwrap() = Some(url.clone());
            match &self.outcome {
                Ok(status) => Ok(ProbeResponse { status: *status }),
                Err(message) => Err(ExtpmError::network(message.clone())),
            }
        }
    }

    const PING: &str = "https://market.example.org/ping";

    #[tokio::test]
    async fn allow_listed_statuses_are_online() {
        for status in REACHABLE_STATUSES {
            let prober = ConnectivityProber::new(MockNetwork::status(status));
            let state = prober.probe(PING, None).await;
            assert!(state.is_online(), "status {status} should be online");
            assert!(state.messages().is_empty());
        }
    }

    #[tokio::test]
    async fn other_statuses_are_offline_with_message() {
        for status in [404, 500, 503] {
            let prober = ConnectivityProber::new(MockNetwork::status(status));
            let state = prober.probe(PING, None).await;
            assert!(!state.is_online());
            assert!(state.messages()[0].contains(&status.to_string()));
        }
    }

    #[tokio::test]
    async fn transport_failure_is_offline_with_message() {
        let prober = ConnectivityProber::new(MockNetwork::failing("connection refused"));
        let state = prober.probe(PING, None).await;
        assert!(!state.is_online());
        assert!(state.messages()[0].contains("connection refused"));
    }

    #[tokio::test]
    async fn invalid_url_is_offline() {
        let prober = ConnectivityProber::new(MockNetwork::status(200));
        let state = prober.probe("not a url", None).await;
        assert!(!state.is_online());
    }

    #[tokio::test]
    async fn diagnostics_are_attached_as_query_parameters() {
        let network = MockNetwork::status(200);
        let diag = PingDiagnostics {
            tool_version: "0.1.0".to_string(),
            site_name: "Example".to_string(),
            interpreter: "1.84.0".to_string(),
            server: Some("nginx".to_string()),
        };
        let prober = ConnectivityProber::new(network);
        prober.probe(PING, Some(&diag)).await;

        let seen = prober.network.seen.lock().unwrap().clone().unwrap();
        let query: Vec<(String, String)> = seen
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("bolt_ver".to_string(), "0.1.0".to_string())));
        assert!(query.contains(&("bolt_name".to_string(), "Example".to_string())));
        assert!(query.contains(&("php".to_string(), "1.84.0".to_string())));
        assert!(query.contains(&("www".to_string(), "nginx".to_string())));
    }

    #[tokio::test]
    async fn query_is_bare_without_diagnostics() {
        let prober = ConnectivityProber::new(MockNetwork::status(200));
        prober.probe(PING, None).await;
        let seen = prober.network.seen.lock().unwrap().clone().unwrap();
        assert!(seen.query().is_none());
    }
}
