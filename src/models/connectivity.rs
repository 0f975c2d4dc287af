/// Online flag plus accumulated diagnostic messages.
///
/// Set once while the manager starts up, read-only afterwards. Lives on the
/// request-scoped manager rather than in process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityState {
    online: bool,
    messages: Vec<String>,
}

impl ConnectivityState {
    pub fn online() -> Self {
        Self {
            online: true,
            messages: Vec::new(),
        }
    }

    pub fn offline<S: Into<String>>(message: S) -> Self {
        Self {
            online: false,
            messages: vec![message.into()],
        }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn mark_offline(&mut self) {
        self.online = false;
    }

    pub fn record<S: Into<String>>(&mut self, message: S) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Packages the delegated engine reports as needing work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    /// Required but not installed.
    pub installs: Vec<String>,
    /// Installed but behind the manifest constraint.
    pub updates: Vec<String>,
}

impl CheckResult {
    pub fn is_clean(&self) -> bool {
        self.installs.is_empty() && self.updates.is_empty()
    }
}
