use std::path::PathBuf;
use std::sync::Arc;

use crate::core::data::parameters::Parameters;
use crate::core::state::parameter_store::{ParameterStore, ParametersListener};

/// Widget-bound copy of the parameters.
///
/// egui widgets edit `draft` directly during a frame; `commit` then forwards
/// each field to the store, whose setters ignore values that did not change.
pub struct GuiAppState {
    pub draft: Parameters,
    store: ParameterStore,
    pub last_download: Option<Result<PathBuf, String>>,
}

impl GuiAppState {
    pub fn new(listener: Arc<dyn ParametersListener>) -> Self {
        let mut store = ParameterStore::default();
        store.subscribe(listener);

        Self {
            draft: store.parameters().clone(),
            store,
            last_download: None,
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        self.store.parameters()
    }

    pub fn commit(&mut self) {
        let range = Parameters::pixel_size_range();
        self.draft.pixel_size = self.draft.pixel_size.clamp(*range.start(), *range.end());

        let draft = &self.draft;
        self.store.set_content(draft.content.as_str());
        self.store.set_foreground(draft.foreground);
        self.store.set_background(draft.background);
        self.store.set_pixel_size(draft.pixel_size);
        self.store.set_error_correction(draft.error_correction);
    }

    #[must_use]
    pub fn download_status(&self) -> Option<String> {
        self.last_download.as_ref().map(|result| match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(message) => format!("Download failed: {message}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::core::data::colour::Colour;
    use crate::core::data::error_correction::ErrorCorrectionLevel;

    #[derive(Default)]
    struct RecordingListener {
        snapshots: Mutex<Vec<Parameters>>,
    }

    impl ParametersListener for RecordingListener {
        fn parameters_changed(&self, parameters: &Parameters) {
            self.snapshots.lock().unwrap().push(parameters.clone());
        }
    }

    fn state() -> (GuiAppState, Arc<RecordingListener>) {
        let listener = Arc::new(RecordingListener::default());
        (GuiAppState::new(listener.clone()), listener)
    }

    #[test]
    fn test_starts_from_defaults_and_notifies_once() {
        let (state, listener) = state();

        assert_eq!(state.draft, Parameters::default());
        assert_eq!(listener.snapshots.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_commit_without_edits_does_not_notify() {
        let (mut state, listener) = state();

        state.commit();
        state.commit();

        assert_eq!(listener.snapshots.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_commit_forwards_each_changed_field() {
        let (mut state, listener) = state();

        state.draft.content = "hello".to_string();
        state.draft.foreground = Colour::rgb(10, 20, 30);
        state.draft.error_correction = ErrorCorrectionLevel::Q;
        state.commit();

        let snapshots = listener.snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots.last(), Some(&state.draft));
        assert_eq!(state.parameters(), &state.draft);
    }

    #[test]
    fn test_commit_clamps_pixel_size() {
        let (mut state, _listener) = state();

        state.draft.pixel_size = 9000;
        state.commit();

        assert_eq!(state.parameters().pixel_size, 500);
        assert_eq!(state.draft.pixel_size, 500);
    }

    #[test]
    fn test_download_status_messages() {
        let (mut state, _listener) = state();
        assert_eq!(state.download_status(), None);

        state.last_download = Some(Ok(PathBuf::from("qrcode.png")));
        assert_eq!(state.download_status().as_deref(), Some("Saved qrcode.png"));

        state.last_download = Some(Err("disk full".to_string()));
        assert_eq!(
            state.download_status().as_deref(),
            Some("Download failed: disk full")
        );
    }
}
