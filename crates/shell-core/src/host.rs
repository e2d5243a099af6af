use serde::{Deserialize, Serialize};

use crate::config::{
    Mode, BUNDLED_INDEX, DEV_SERVER_URL, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::error::HostError;

/// Where a window's content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSource {
    /// A live dev server, assumed to already be running at this URL.
    DevServer(String),
    /// A document bundled with the app, path relative to the content root.
    Bundled(String),
}

/// One window-creation request, fully specified up front so hosts never
/// consult ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRequest {
    pub width: u32,
    pub height: u32,
    pub content: ContentSource,
    pub open_devtools: bool,
}

impl WindowRequest {
    /// The request the shell issues for a given mode: always 800×600,
    /// dev server + devtools in development, bundled document otherwise.
    pub fn for_mode(mode: Mode) -> Self {
        let (content, open_devtools) = match mode {
            Mode::Development => (ContentSource::DevServer(DEV_SERVER_URL.to_string()), true),
            Mode::Production => (ContentSource::Bundled(BUNDLED_INDEX.to_string()), false),
        };
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            content,
            open_devtools,
        }
    }
}

/// Seam between the lifecycle controller and the GUI toolkit. The toolkit
/// owns the window set; the controller only requests mutations and reads
/// its size.
pub trait WindowHost {
    /// Issue exactly one window-creation request. The window loads the
    /// bridge script before content executes.
    fn create_window(&mut self, request: &WindowRequest) -> Result<(), HostError>;

    /// Number of currently open top-level windows.
    fn open_windows(&self) -> usize;

    /// Ask the host process to terminate.
    fn request_exit(&mut self);
}
