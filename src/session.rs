use serde::{Deserialize, Serialize};

use crate::models::ImageResult;

/// Which API call the next submit triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Generate,
    Edit,
}

/// In-memory bookkeeping for one studio session.
///
/// Holds the newest-first result history, the image on display, the
/// generate/edit mode toggle and the pending edit source. Nothing here
/// is persisted; a restart starts a fresh session.
#[derive(Debug, Default)]
pub struct StudioSession {
    history: Vec<ImageResult>,
    current: Option<ImageResult>,
    mode: Mode,
    edit_source: Option<String>,
}

impl StudioSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a generated image: it becomes current and the newest
    /// history entry.
    pub fn record(&mut self, result: ImageResult) {
        self.current = Some(result.clone());
        self.history.insert(0, result);
    }

    /// Records an edited image and returns the session to generate mode.
    pub fn record_edited(&mut self, result: ImageResult) {
        self.record(result);
        self.mode = Mode::Generate;
        self.edit_source = None;
    }

    /// Enters edit mode with the given data URL as the edit source.
    pub fn begin_edit(&mut self, source: String) {
        if let Some(image) = self.history.iter().find(|image| image.data_url == source) {
            self.current = Some(image.clone());
        }
        self.mode = Mode::Edit;
        self.edit_source = Some(source);
    }

    /// Leaves edit mode. The current image stays on display so the user
    /// can still see what they were editing.
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Generate;
        self.edit_source = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn edit_source(&self) -> Option<&str> {
        self.edit_source.as_deref()
    }

    pub fn current(&self) -> Option<&ImageResult> {
        self.current.as_ref()
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[ImageResult] {
        &self.history
    }
}
