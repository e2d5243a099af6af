use std::path::PathBuf;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use shell_core::{ContentSource, HostError, WindowHost, WindowRequest};

/// Injected into every window before page content executes.
const BRIDGE_SCRIPT: &str = include_str!("bridge.js");

/// `WindowHost` backed by a Tauri app handle. Tauri owns the window set;
/// this type only issues creation requests and reads the set's size.
pub struct TauriHost {
    handle: AppHandle,
    created: u32,
    exit_requested: bool,
}

impl TauriHost {
    pub fn new(handle: AppHandle) -> Self {
        Self {
            handle,
            created: 0,
            exit_requested: false,
        }
    }

    /// Whether `request_exit` was called since the last check. Consumed by
    /// the run-loop adapter to decide between exiting and staying resident.
    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    fn next_label(&mut self) -> String {
        let label = window_label(self.created);
        self.created += 1;
        label
    }
}

/// Tauri requires webview labels to be unique for the process lifetime, so
/// windows opened after a reactivation get a numbered suffix.
fn window_label(n: u32) -> String {
    if n == 0 {
        "main".to_string()
    } else {
        format!("main-{n}")
    }
}

impl WindowHost for TauriHost {
    fn create_window(&mut self, request: &WindowRequest) -> Result<(), HostError> {
        let url = match &request.content {
            ContentSource::DevServer(url) => WebviewUrl::External(
                url.parse::<tauri::Url>()
                    .map_err(|e| HostError::InvalidUrl(url.clone(), e.to_string()))?,
            ),
            ContentSource::Bundled(path) => WebviewUrl::App(PathBuf::from(path)),
        };

        let label = self.next_label();
        let window = WebviewWindowBuilder::new(&self.handle, label.as_str(), url)
            .title("Lantern")
            .inner_size(f64::from(request.width), f64::from(request.height))
            .initialization_script(BRIDGE_SCRIPT)
            .build()
            .map_err(|e| HostError::WindowCreation(e.to_string()))?;

        tracing::info!("[desktop] opened window `{label}` ({:?})", request.content);

        if request.open_devtools {
            open_devtools(&window);
        }
        Ok(())
    }

    fn open_windows(&self) -> usize {
        self.handle.webview_windows().len()
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}

#[cfg(any(debug_assertions, feature = "devtools"))]
fn open_devtools(window: &tauri::WebviewWindow) {
    window.open_devtools();
}

#[cfg(not(any(debug_assertions, feature = "devtools")))]
fn open_devtools(_window: &tauri::WebviewWindow) {
    tracing::warn!(
        "[desktop] devtools requested but not compiled in; rebuild with --features devtools"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_labels_never_collide() {
        assert_eq!(window_label(0), "main");
        assert_eq!(window_label(1), "main-1");
        assert_eq!(window_label(7), "main-7");
    }
}
