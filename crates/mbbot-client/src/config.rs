use std::time::Duration;

pub const DEFAULT_SERVER: &str = "https://musicbrainz.org";

/// Connection settings for a bot account
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    pub server: String,
    pub username: String,
    pub password: String,
    /// Numeric editor id, needed to count today's edits
    pub editor_id: Option<u64>,
    /// Minimum gap between two requests
    pub request_interval: Duration,
    /// Pause between release editor steps
    pub step_delay: Duration,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            username: username.into(),
            password: password.into(),
            editor_id: None,
            request_interval: Duration::from_secs(1),
            step_delay: Duration::from_secs(2),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_editor_id(mut self, editor_id: u64) -> Self {
        self.editor_id = Some(editor_id);
        self
    }

    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User agent identifying the bot account to the site admins
    pub fn user_agent(&self) -> String {
        format!(
            "musicbrainz-bot/1.0 ( {}/user/{} )",
            self.server, self.username
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("editor_id", &self.editor_id)
            .field("request_interval", &self.request_interval)
            .field("step_delay", &self.step_delay)
            .field("timeout", &self.timeout)
            .finish()
    }
}
