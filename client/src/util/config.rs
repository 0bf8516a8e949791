//! Client runtime configuration.
//!
//! The host renders the submission endpoint into a `<meta>` tag. During SSR
//! the config comes from context; after hydration it is read back from the
//! document. A missing or invalid endpoint does not break the page: the
//! dialog still opens and submissions report a connectivity error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leads::EndpointConfig;

pub const ENDPOINT_META_NAME: &str = "autolead:endpoint-url";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: Option<EndpointConfig>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(endpoint: Option<EndpointConfig>) -> Self {
        Self { endpoint }
    }

    /// Build from the `content` attribute of the endpoint meta tag.
    #[must_use]
    pub fn from_meta_content(content: Option<&str>) -> Self {
        let endpoint = content.and_then(|raw| match EndpointConfig::parse(raw) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                log::warn!("ignoring endpoint meta tag: {e}");
                None
            }
        });
        Self { endpoint }
    }

    /// Read the endpoint meta tag from the current document.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{ENDPOINT_META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            Self::from_meta_content(content.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> Option<&EndpointConfig> {
        self.endpoint.as_ref()
    }

    #[must_use]
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint.as_ref().map(|cfg| cfg.endpoint_url.as_str())
    }
}
