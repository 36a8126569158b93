// Value objects handed to a NativeViewHost during attachment.

use crate::types::settings::WebViewSettings;

/// Android's `ViewGroup.LayoutParams.MATCH_PARENT` sentinel.
pub const MATCH_PARENT: i32 = -1;

/// Width/height pair passed to `addContentView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub width: i32,
    pub height: i32,
}

impl LayoutParams {
    /// Layout parameters requesting the view fill its parent in both dimensions.
    pub fn match_parent() -> Self {
        Self {
            width: MATCH_PARENT,
            height: MATCH_PARENT,
        }
    }
}

/// Everything a view host needs to construct, configure, and attach one WebView.
///
/// The content URL is carried through exactly as configured; no host may
/// rewrite it.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachRequest {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub database_enabled: bool,
    pub content_url: String,
    pub layout: LayoutParams,
}

impl AttachRequest {
    /// Builds an attach request from the WebView section of the shell settings.
    pub fn from_settings(settings: &WebViewSettings) -> Self {
        Self {
            javascript_enabled: settings.javascript_enabled,
            dom_storage_enabled: settings.dom_storage_enabled,
            database_enabled: settings.database_enabled,
            content_url: settings.content_url.clone(),
            layout: LayoutParams::match_parent(),
        }
    }
}
