use crate::config::ShellConfig;
use crate::error::HostError;
use crate::host::{WindowHost, WindowRequest};

/// Lifecycle events delivered by the host toolkit, in the order the
/// toolkit's event loop observes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The toolkit finished initializing; windows may be created.
    Ready,
    /// The platform asked the app to present itself (e.g. dock click).
    Reactivated,
    /// The last open window was closed.
    AllWindowsClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotReady,
    Ready,
}

/// Application shell controller: reacts to lifecycle events by requesting
/// window creation or process exit from the host. All handlers complete
/// synchronously; the host owns the event loop and the window set.
pub struct ShellController<H: WindowHost> {
    config: ShellConfig,
    host: H,
    phase: Phase,
}

impl<H: WindowHost> ShellController<H> {
    pub fn new(config: ShellConfig, host: H) -> Self {
        Self {
            config,
            host,
            phase: Phase::NotReady,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Dispatch one lifecycle event. Window-creation failures propagate to
    /// the caller; the controller itself never retries.
    pub fn handle(&mut self, event: LifecycleEvent) -> Result<(), HostError> {
        match event {
            LifecycleEvent::Ready => {
                // The readiness transition fires once; later Ready signals
                // are ignored.
                if self.phase == Phase::NotReady {
                    self.phase = Phase::Ready;
                    tracing::debug!("[shell] ready, opening initial window");
                    self.create_window()?;
                }
            }
            LifecycleEvent::Reactivated => {
                // Reactivation is only observable after startup completed.
                if self.phase == Phase::Ready && self.host.open_windows() == 0 {
                    tracing::debug!("[shell] reactivated with no windows, reopening");
                    self.create_window()?;
                }
            }
            LifecycleEvent::AllWindowsClosed => {
                if self.config.platform.stays_resident_without_windows() {
                    tracing::debug!("[shell] all windows closed, staying resident");
                } else {
                    tracing::debug!("[shell] all windows closed, requesting exit");
                    self.host.request_exit();
                }
            }
        }
        Ok(())
    }

    fn create_window(&mut self) -> Result<(), HostError> {
        self.host.create_window(&WindowRequest::for_mode(self.config.mode))
    }
}
