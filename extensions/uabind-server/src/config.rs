use crate::constants::{DEFAULT_APPLICATION_URI, FIRST_ASSIGNED_NODE_ID};
use uabind::constants::DEFAULT_LOCALE;

/// Server settings.
///
/// ```rust
/// use uabind_server::ServerConfig;
///
/// let config = ServerConfig::default()
///     .with_application_uri("urn:example:plant")
///     .with_locale("de-DE");
/// assert_eq!(config.locale, "de-DE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// URI of the application namespace (always namespace index 1).
    pub application_uri: String,
    /// Locale of the display names and descriptions the server generates.
    pub locale: String,
    /// First numeric identifier assigned to created nodes.
    pub first_node_id: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            application_uri: DEFAULT_APPLICATION_URI.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            first_node_id: FIRST_ASSIGNED_NODE_ID,
        }
    }
}

impl ServerConfig {
    pub fn with_application_uri(mut self, application_uri: impl Into<String>) -> Self {
        self.application_uri = application_uri.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_first_node_id(mut self, first_node_id: u32) -> Self {
        self.first_node_id = first_node_id;
        self
    }
}
