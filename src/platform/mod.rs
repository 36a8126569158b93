// webshell platform layer
// Runtime Android detection, view host selection, and per-OS config paths.
//
// Detection reads the kernel command line once at startup and looks for an
// Android-specific marker. It is deliberately not configurable at runtime.

use std::path::{Path, PathBuf};

use crate::bridge::{NativeViewHost, NoopViewHost};
use crate::types::errors::PlatformError;

#[cfg(target_os = "android")]
pub mod android;

/// Fixed system file inspected for the Android marker.
pub const CMDLINE_PATH: &str = "/proc/cmdline";

/// Substring whose presence in the kernel cmdline identifies an Android boot.
pub const ANDROID_BOOT_MARKER: &str = "ANDROID_BOOTLOGO";

/// The platform the shell is running on, derived once at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// An Android device; native WebView bridging is available.
    Android,
    /// Any other host; the shell window stays empty.
    Host,
}

/// Detects the running platform.
///
/// On Linux-family kernels this inspects `/proc/cmdline` for the Android
/// marker. Other operating systems cannot be Android, so detection returns
/// `Host` without touching the filesystem.
pub fn detect() -> Result<Platform, PlatformError> {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        detect_from_file(Path::new(CMDLINE_PATH))
    }
    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    {
        Ok(Platform::Host)
    }
}

/// Detects the platform from an arbitrary cmdline file.
///
/// An unreadable file is an error: per the shell's failure policy it surfaces
/// as a fatal startup fault rather than a silent `Host` fallback.
pub fn detect_from_file(path: &Path) -> Result<Platform, PlatformError> {
    let cmdline = std::fs::read_to_string(path).map_err(|e| {
        PlatformError::CmdlineUnreadable(format!("{}: {}", path.display(), e))
    })?;

    if cmdline.contains(ANDROID_BOOT_MARKER) {
        Ok(Platform::Android)
    } else {
        Ok(Platform::Host)
    }
}

/// Selects the view host implementation for the detected platform.
///
/// This is the single seam isolating non-portable interop code: Android gets
/// the JNI-backed host, everything else gets the no-op host.
pub fn select_view_host(platform: Platform) -> Box<dyn NativeViewHost> {
    match platform {
        #[cfg(target_os = "android")]
        Platform::Android => Box::new(android::AndroidViewHost::new()),
        // Detection can report Android only on Android-family kernels; if a
        // plain Linux cmdline carries the marker anyway, there is no VM to
        // bridge to, so treat it as a host platform.
        #[cfg(not(target_os = "android"))]
        Platform::Android => Box::new(NoopViewHost),
        Platform::Host => Box::new(NoopViewHost),
    }
}

/// Returns the platform-specific configuration directory for webshell.
///
/// - **Linux/Android**: `$XDG_CONFIG_HOME/webshell` or `~/.config/webshell`
/// - **macOS**: `~/Library/Application Support/webshell`
/// - **Windows**: `%APPDATA%/webshell`
pub fn config_dir() -> PathBuf {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("webshell")
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("webshell")
        }
    }
    #[cfg(target_os = "macos")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("webshell")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
        PathBuf::from(appdata).join("webshell")
    }
}
