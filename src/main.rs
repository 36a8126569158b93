//! webshell — a minimal mobile WebView application shell.
//!
//! Entry point: starts the toolkit event loop and, on Android devices,
//! attaches a native WebView over the toolkit window. When built without the
//! `gui` feature, runs a headless dry run of detection and attachment.

#[cfg(feature = "gui")]
fn main() {
    env_logger::init();
    webshell::ui::shell_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    use webshell::app::Shell;
    use webshell::platform;

    env_logger::init();

    println!();
    println!("webshell v{} — headless dry run", env!("CARGO_PKG_VERSION"));
    println!();

    let platform = platform::detect().expect("Failed to detect platform");
    println!("  Detected platform: {:?}", platform);

    let mut shell = Shell::from_environment().expect("Failed to initialize webshell");
    let webview = &shell.settings().webview;
    println!("  Content URL:  {}", webview.content_url);
    println!("  JavaScript:   {}", webview.javascript_enabled);
    println!("  DOM storage:  {}", webview.dom_storage_enabled);
    println!("  Database:     {}", webview.database_enabled);

    shell
        .attach_native_view()
        .expect("Failed to attach native WebView");
    println!("  WebView attached: {}", shell.is_attached());

    println!();
    println!("  ✓ Shell dry run OK");
}
