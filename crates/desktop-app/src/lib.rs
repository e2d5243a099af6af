use tauri::RunEvent;

use shell_core::{LifecycleEvent, ShellConfig, ShellController};

mod host;

pub use host::TauriHost;

/// Build the Tauri app and drive the shell controller from its event loop.
/// Blocks until the process exits.
pub fn run() {
    // Load .env from the current working directory (or wherever the user
    // runs from), then init tracing before anything can log.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ShellConfig::from_env();
    tracing::info!(
        "[desktop] starting Lantern in {:?} mode on {:?}",
        config.mode,
        config.platform
    );

    let app = tauri::Builder::default()
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    let mut controller = ShellController::new(config, TauriHost::new(app.handle().clone()));

    app.run(move |_app, event| match event {
        RunEvent::Ready => {
            if let Err(e) = controller.handle(LifecycleEvent::Ready) {
                tracing::error!("[desktop] {e}");
            }
        }
        // macOS dock activation; never delivered on other platforms.
        RunEvent::Reopen { .. } => {
            if let Err(e) = controller.handle(LifecycleEvent::Reactivated) {
                tracing::error!("[desktop] {e}");
            }
        }
        // Tauri reports the last window closing as an exit request with no
        // code. Let it proceed only when the controller decided to exit;
        // otherwise stay resident awaiting a Reopen.
        RunEvent::ExitRequested { code: None, api, .. } => {
            if let Err(e) = controller.handle(LifecycleEvent::AllWindowsClosed) {
                tracing::error!("[desktop] {e}");
            }
            if !controller.host_mut().take_exit_request() {
                api.prevent_exit();
            }
        }
        RunEvent::Exit => {
            tracing::info!("[desktop] shutting down");
        }
        _ => {}
    });
}
