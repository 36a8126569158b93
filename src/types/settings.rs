// Shell settings model.
// Serialized as JSON at the platform-specific config path by the settings engine.

use serde::{Deserialize, Serialize};

/// The local resource loaded into the WebView when no config overrides it.
pub const DEFAULT_CONTENT_URL: &str = "/index.html";

/// Top-level shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    pub window: WindowSettings,
    pub webview: WebViewSettings,
}

/// Window chrome for the toolkit window shown on non-Android hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Knobs applied to the native WebView during attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebViewSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub database_enabled: bool,
    pub content_url: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            webview: WebViewSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "webshell".to_string(),
            width: 480.0,
            height: 800.0,
        }
    }
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            database_enabled: true,
            content_url: DEFAULT_CONTENT_URL.to_string(),
        }
    }
}
