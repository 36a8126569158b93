//! Toolkit shell built on `tao`.
//!
//! The event loop is the only scheduler here. On the first iteration the
//! loop posts a one-shot user event through its proxy, so native WebView
//! attachment runs on the next cycle — after the toolkit has finished its
//! own initial window setup, avoiding ordering races with window creation.

use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::{Window, WindowBuilder};

use crate::app::Shell;
use crate::types::settings::WindowSettings;

#[derive(Debug)]
pub(crate) enum UserEvent {
    AttachNativeView,
}

/// Builds the root window from settings. Called exactly once by `run`.
pub(crate) fn build_window(
    event_loop: &EventLoop<UserEvent>,
    settings: &WindowSettings,
) -> Window {
    WindowBuilder::new()
        .with_title(settings.title.as_str())
        .with_inner_size(tao::dpi::LogicalSize::new(settings.width, settings.height))
        .build(event_loop)
        .expect("Failed to create window")
}

/// Starts the shell: builds the window, schedules the deferred attach, and
/// blocks until the application is closed by the user or the platform.
pub fn run() {
    let mut shell = Shell::from_environment().expect("Failed to initialize webshell");

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();
    let window = build_window(&event_loop, &shell.settings().window);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            // First iteration: post the one-shot attach for the next cycle.
            Event::NewEvents(StartCause::Init) => {
                log::debug!("event loop started, window {:?}", window.id());
                let _ = proxy.send_event(UserEvent::AttachNativeView);
            }

            Event::UserEvent(UserEvent::AttachNativeView) => {
                // Any bridge failure is a fatal startup failure; there is no
                // retry and no fallback UI.
                shell
                    .attach_native_view()
                    .expect("Failed to attach native WebView");
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            _ => {}
        }
    });
}
