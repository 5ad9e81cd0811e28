//! The boundary towards the host graphics editor.
//!
//! Assembly never talks to an editor directly; it drives a [`HostEditor`],
//! which owns the image being built and turns each command into the
//! editor's own drawing primitives. The editor state that used to be
//! ambient in plug-in scripts (the current image, loaded data files, the
//! active selection) lives behind this trait instead.
//!
//! [`RecordingHost`] is the in-memory implementation used by tests: it
//! performs no drawing and remembers every call in order.

use cardwright_blueprint::PaletteEntry;
use cardwright_command::{
    GroupSpec, ImageSpec, ImportLayerLoadSpec, ImportLayerSpec, MaskSpec, MonochromeSpec,
    SelectSpec, TextSpec,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by a host editor.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("host does not support {operation}")]
    Unsupported { operation: &'static str },

    #[error("host operation {operation} failed: {message}")]
    Failed { operation: String, message: String },
}

/// Drawing primitives a host editor must provide.
///
/// Methods correspond one-to-one with command kinds, plus the image
/// lifecycle calls issued after a card is assembled. Implementations
/// hold the image being built; `create_image` starts a fresh one and
/// the other calls operate on it.
pub trait HostEditor {
    /// Implementation name, used in log output.
    fn name(&self) -> &'static str;

    fn create_image(&mut self, spec: &ImageSpec) -> Result<(), HostError>;

    fn fill_monochrome(&mut self, spec: &MonochromeSpec) -> Result<(), HostError>;

    /// Loads a data file so `import_layer` can copy layers out of it.
    fn load_data_image(&mut self, spec: &ImportLayerLoadSpec) -> Result<(), HostError>;

    fn import_layer(&mut self, spec: &ImportLayerSpec) -> Result<(), HostError>;

    fn create_group(&mut self, spec: &GroupSpec) -> Result<(), HostError>;

    fn draw_text(&mut self, spec: &TextSpec) -> Result<(), HostError>;

    fn select_rectangle(&mut self, spec: &SelectSpec) -> Result<(), HostError>;

    /// Turns the current selection into a layer mask.
    fn apply_mask(&mut self, spec: &MaskSpec) -> Result<(), HostError>;

    /// Registers a named palette built from harvested colors.
    fn import_palette(&mut self, name: &str, entries: &[PaletteEntry]) -> Result<(), HostError>;

    /// Shows the assembled image to the user.
    fn display_image(&mut self) -> Result<(), HostError>;

    /// Persists the assembled image.
    fn save_image(&mut self) -> Result<(), HostError>;
}

/// One call made against a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HostEvent {
    CreateImage(ImageSpec),
    FillMonochrome(MonochromeSpec),
    LoadDataImage(ImportLayerLoadSpec),
    ImportLayer(ImportLayerSpec),
    CreateGroup(GroupSpec),
    DrawText(TextSpec),
    SelectRectangle(SelectSpec),
    ApplyMask(MaskSpec),
    ImportPalette {
        name: String,
        entries: Vec<PaletteEntry>,
    },
    DisplayImage,
    SaveImage,
}

/// A host that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Drains and returns the recorded calls.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl HostEditor for RecordingHost {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn create_image(&mut self, spec: &ImageSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::CreateImage(spec.clone()));
        Ok(())
    }

    fn fill_monochrome(&mut self, spec: &MonochromeSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::FillMonochrome(spec.clone()));
        Ok(())
    }

    fn load_data_image(&mut self, spec: &ImportLayerLoadSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::LoadDataImage(spec.clone()));
        Ok(())
    }

    fn import_layer(&mut self, spec: &ImportLayerSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::ImportLayer(spec.clone()));
        Ok(())
    }

    fn create_group(&mut self, spec: &GroupSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::CreateGroup(spec.clone()));
        Ok(())
    }

    fn draw_text(&mut self, spec: &TextSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::DrawText(spec.clone()));
        Ok(())
    }

    fn select_rectangle(&mut self, spec: &SelectSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::SelectRectangle(spec.clone()));
        Ok(())
    }

    fn apply_mask(&mut self, spec: &MaskSpec) -> Result<(), HostError> {
        self.events.push(HostEvent::ApplyMask(spec.clone()));
        Ok(())
    }

    fn import_palette(&mut self, name: &str, entries: &[PaletteEntry]) -> Result<(), HostError> {
        self.events.push(HostEvent::ImportPalette {
            name: name.to_string(),
            entries: entries.to_vec(),
        });
        Ok(())
    }

    fn display_image(&mut self) -> Result<(), HostError> {
        self.events.push(HostEvent::DisplayImage);
        Ok(())
    }

    fn save_image(&mut self) -> Result<(), HostError> {
        self.events.push(HostEvent::SaveImage);
        Ok(())
    }
}
