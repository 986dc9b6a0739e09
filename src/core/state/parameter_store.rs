use std::sync::Arc;

use log::warn;
use thiserror::Error;

use crate::core::data::colour::{Colour, ColourParseError};
use crate::core::data::error_correction::ErrorCorrectionLevel;
use crate::core::data::parameters::Parameters;

/// Receives the full parameters snapshot after every change.
pub trait ParametersListener: Send + Sync {
    fn parameters_changed(&self, parameters: &Parameters);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("pixel size input {0:?} is not a number")]
    PixelSize(String),
    #[error(transparent)]
    Colour(#[from] ColourParseError),
}

/// Holds the current parameters and notifies a single listener on mutation.
///
/// Setters are plain assignments. Assigning a value equal to the current one
/// is not a change and does not notify.
#[derive(Default)]
pub struct ParameterStore {
    parameters: Parameters,
    listener: Option<Arc<dyn ParametersListener>>,
}

impl ParameterStore {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            listener: None,
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Registers `listener`, replacing any previous one, and immediately hands
    /// it the current snapshot.
    pub fn subscribe(&mut self, listener: Arc<dyn ParametersListener>) {
        self.listener = Some(listener);
        self.notify();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.assign(|p| &mut p.content, content.into());
    }

    pub fn set_foreground(&mut self, colour: Colour) {
        self.assign(|p| &mut p.foreground, colour);
    }

    pub fn set_background(&mut self, colour: Colour) {
        self.assign(|p| &mut p.background, colour);
    }

    pub fn set_pixel_size(&mut self, pixel_size: u32) {
        self.assign(|p| &mut p.pixel_size, pixel_size);
    }

    pub fn set_error_correction(&mut self, level: ErrorCorrectionLevel) {
        self.assign(|p| &mut p.error_correction, level);
    }

    pub fn set_foreground_hex(&mut self, hex: &str) -> Result<(), CoercionError> {
        self.set_foreground(Colour::from_hex(hex)?);
        Ok(())
    }

    pub fn set_background_hex(&mut self, hex: &str) -> Result<(), CoercionError> {
        self.set_background(Colour::from_hex(hex)?);
        Ok(())
    }

    /// Coerces raw slider or text input to a pixel size. Fractions are rounded.
    pub fn set_pixel_size_input(&mut self, input: &str) -> Result<(), CoercionError> {
        let value = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
            .ok_or_else(|| {
                warn!("ignoring pixel size input {input:?}");
                CoercionError::PixelSize(input.to_owned())
            })?;

        self.set_pixel_size(value.round() as u32);
        Ok(())
    }

    fn assign<T: PartialEq>(&mut self, field: impl FnOnce(&mut Parameters) -> &mut T, value: T) {
        let slot = field(&mut self.parameters);

        if *slot == value {
            return;
        }

        *slot = value;
        self.notify();
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener.parameters_changed(&self.parameters);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingListener {
        snapshots: Mutex<Vec<Parameters>>,
    }

    impl RecordingListener {
        fn snapshots(&self) -> Vec<Parameters> {
            self.snapshots.lock().unwrap().clone()
        }
    }

    impl ParametersListener for RecordingListener {
        fn parameters_changed(&self, parameters: &Parameters) {
            self.snapshots.lock().unwrap().push(parameters.clone());
        }
    }

    fn subscribed_store() -> (ParameterStore, Arc<RecordingListener>) {
        let listener = Arc::new(RecordingListener::default());
        let mut store = ParameterStore::default();
        store.subscribe(Arc::clone(&listener) as Arc<dyn ParametersListener>);
        (store, listener)
    }

    #[test]
    fn test_subscribe_delivers_initial_snapshot() {
        let (_store, listener) = subscribed_store();

        assert_eq!(listener.snapshots(), vec![Parameters::default()]);
    }

    #[test]
    fn test_each_setter_notifies_with_full_snapshot() {
        let (mut store, listener) = subscribed_store();

        store.set_content("abc");
        store.set_foreground(Colour::rgb(1, 2, 3));
        store.set_background(Colour::rgb(4, 5, 6));
        store.set_pixel_size(450);
        store.set_error_correction(ErrorCorrectionLevel::H);

        let snapshots = listener.snapshots();
        assert_eq!(snapshots.len(), 6);

        let last = snapshots.last().unwrap();
        assert_eq!(last, store.parameters());
        assert_eq!(last.content, "abc");
        assert_eq!(last.foreground, Colour::rgb(1, 2, 3));
        assert_eq!(last.background, Colour::rgb(4, 5, 6));
        assert_eq!(last.pixel_size, 450);
        assert_eq!(last.error_correction, ErrorCorrectionLevel::H);

        // Earlier snapshots are not diffs: the content change is visible in all later ones.
        assert!(snapshots[1..].iter().all(|s| s.content == "abc"));
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let (mut store, listener) = subscribed_store();

        store.set_content("https://example.com");
        store.set_pixel_size(300);
        store.set_error_correction(ErrorCorrectionLevel::M);

        assert_eq!(listener.snapshots().len(), 1);
    }

    #[test]
    fn test_identical_colours_are_accepted() {
        let (mut store, _listener) = subscribed_store();

        store.set_foreground(Colour::WHITE);

        assert_eq!(store.parameters().foreground, store.parameters().background);
    }

    #[test]
    fn test_setters_without_listener_still_assign() {
        let mut store = ParameterStore::default();

        store.set_content("");

        assert!(!store.parameters().has_content());
    }

    #[test]
    fn test_pixel_size_input_is_coerced_to_integer() {
        let (mut store, _listener) = subscribed_store();

        store.set_pixel_size_input(" 420 ").unwrap();
        assert_eq!(store.parameters().pixel_size, 420);

        store.set_pixel_size_input("150.6").unwrap();
        assert_eq!(store.parameters().pixel_size, 151);
    }

    #[test]
    fn test_invalid_pixel_size_input_is_ignored() {
        let (mut store, listener) = subscribed_store();

        let result = store.set_pixel_size_input("big");

        assert_eq!(result, Err(CoercionError::PixelSize("big".to_owned())));
        assert_eq!(store.parameters().pixel_size, 300);
        assert_eq!(listener.snapshots().len(), 1);
    }

    #[test]
    fn test_hex_setters_coerce_colour_strings() {
        let (mut store, _listener) = subscribed_store();

        store.set_foreground_hex("#ff0000").unwrap();
        store.set_background_hex("0f0").unwrap();

        assert_eq!(store.parameters().foreground, Colour::rgb(255, 0, 0));
        assert_eq!(store.parameters().background, Colour::rgb(0, 255, 0));
        assert!(matches!(
            store.set_foreground_hex("nope"),
            Err(CoercionError::Colour(_))
        ));
    }
}
