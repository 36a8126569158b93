//! Shell core for webshell.
//!
//! Holds the detected platform, the loaded settings, and the selected view
//! host, and owns the one-shot native WebView attachment.

use crate::bridge::NativeViewHost;
use crate::platform::{self, Platform};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::BridgeError;
use crate::types::settings::ShellSettings;
use crate::types::webview::AttachRequest;

/// Central shell struct.
pub struct Shell {
    settings: ShellSettings,
    platform: Platform,
    view_host: Box<dyn NativeViewHost>,
    attached: bool,
}

impl Shell {
    /// Creates a shell from explicit parts. No I/O happens here; in
    /// particular, no native class is resolved until `attach_native_view`
    /// runs on an Android platform.
    pub fn new(
        settings: ShellSettings,
        platform: Platform,
        view_host: Box<dyn NativeViewHost>,
    ) -> Self {
        Self {
            settings,
            platform,
            view_host,
            attached: false,
        }
    }

    /// Creates a shell by detecting the platform, loading settings from the
    /// platform config path, and selecting the matching view host.
    pub fn from_environment() -> Result<Self, Box<dyn std::error::Error>> {
        let platform = platform::detect()?;
        log::info!("detected platform: {:?}", platform);

        let mut engine = SettingsEngine::new(None);
        let settings = engine.load()?;

        let view_host = platform::select_view_host(platform);
        Ok(Self::new(settings, platform, view_host))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Whether the native WebView has been attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Platform-conditional WebView attachment.
    ///
    /// On Android this constructs the attach request from settings and hands
    /// it to the view host exactly once; later calls are no-ops. On any other
    /// platform nothing happens and no error is raised — the window stays
    /// empty by design.
    pub fn attach_native_view(&mut self) -> Result<(), BridgeError> {
        if self.attached {
            return Ok(());
        }

        match self.platform {
            Platform::Android => {
                let request = AttachRequest::from_settings(&self.settings.webview);
                log::info!(
                    "attaching WebView via {} host, url={}",
                    self.view_host.name(),
                    request.content_url
                );
                self.view_host.attach_webview(&request)?;
                self.attached = true;
            }
            Platform::Host => {
                log::info!("not an Android device; leaving the shell window empty");
            }
        }

        Ok(())
    }
}
