use std::fmt;

// === PlatformError ===

/// Errors related to runtime platform detection.
#[derive(Debug)]
pub enum PlatformError {
    /// The kernel command-line file could not be read.
    CmdlineUnreadable(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::CmdlineUnreadable(msg) => {
                write!(f, "Cannot read kernel cmdline: {}", msg)
            }
        }
    }
}

impl std::error::Error for PlatformError {}

// === BridgeError ===

/// Errors related to the native view bridge.
#[derive(Debug)]
pub enum BridgeError {
    /// The host Java VM could not be obtained or attached to.
    VmUnavailable(String),
    /// A fixed fully-qualified native class could not be resolved.
    ClassResolution(String),
    /// Constructing a native object failed.
    Construction(String),
    /// A call against a native object failed.
    MethodCall(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::VmUnavailable(msg) => write!(f, "Java VM unavailable: {}", msg),
            BridgeError::ClassResolution(name) => {
                write!(f, "Failed to resolve native class: {}", name)
            }
            BridgeError::Construction(msg) => {
                write!(f, "Native object construction failed: {}", msg)
            }
            BridgeError::MethodCall(msg) => write!(f, "Native method call failed: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

// === SettingsError ===

/// Errors related to shell settings persistence.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing the settings file.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
