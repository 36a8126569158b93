//! Native view host seam.
//!
//! All platform-specific view attachment hides behind `NativeViewHost`. The
//! shell selects one implementation at startup: the JNI-backed host on
//! Android, the no-op host everywhere else. Non-Android hosts leave the
//! toolkit window empty on purpose; that divergence is silent and raises no
//! error.

use crate::types::errors::BridgeError;
use crate::types::webview::AttachRequest;

/// Capability interface for attaching a configured WebView to the native
/// view hierarchy.
pub trait NativeViewHost {
    /// Constructs, configures, and attaches one WebView per the request.
    ///
    /// Called at most once per process. Failures are fatal startup failures;
    /// no retry or fallback UI exists.
    fn attach_webview(&mut self, request: &AttachRequest) -> Result<(), BridgeError>;

    /// Short host name used in log output.
    fn name(&self) -> &'static str;
}

/// View host for platforms without native WebView bridging.
///
/// `attach_webview` is never reached through the shell (the shell only
/// attaches on Android), but if called it does nothing and never fails.
pub struct NoopViewHost;

impl NativeViewHost for NoopViewHost {
    fn attach_webview(&mut self, _request: &AttachRequest) -> Result<(), BridgeError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
