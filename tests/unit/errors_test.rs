//! Unit tests for the error types: Display formatting and std::error::Error
//! conformance.

use webshell::types::errors::{BridgeError, PlatformError, SettingsError};

fn assert_is_error<E: std::error::Error>(_e: &E) {}

#[test]
fn test_platform_error_display() {
    let err = PlatformError::CmdlineUnreadable("/proc/cmdline: permission denied".to_string());
    assert_eq!(
        err.to_string(),
        "Cannot read kernel cmdline: /proc/cmdline: permission denied"
    );
    assert_is_error(&err);
}

#[test]
fn test_bridge_error_display() {
    let cases = [
        (
            BridgeError::VmUnavailable("no context".to_string()),
            "Java VM unavailable: no context",
        ),
        (
            BridgeError::ClassResolution("android/webkit/WebView".to_string()),
            "Failed to resolve native class: android/webkit/WebView",
        ),
        (
            BridgeError::Construction("WebView ctor threw".to_string()),
            "Native object construction failed: WebView ctor threw",
        ),
        (
            BridgeError::MethodCall("addContentView: threw".to_string()),
            "Native method call failed: addContentView: threw",
        ),
    ];

    for (err, expected) in &cases {
        assert_eq!(&err.to_string(), expected);
        assert_is_error(err);
    }
}

#[test]
fn test_settings_error_display() {
    let io = SettingsError::IoError("disk full".to_string());
    assert_eq!(io.to_string(), "Settings I/O error: disk full");
    assert_is_error(&io);

    let ser = SettingsError::SerializationError("bad json".to_string());
    assert_eq!(ser.to_string(), "Settings serialization error: bad json");
    assert_is_error(&ser);
}
