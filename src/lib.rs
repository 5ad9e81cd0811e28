//! Cardwright assembles layered card images from XML blueprints.
//!
//! A blueprint describes every card of a board game as a tree of
//! components with prototype inheritance: a component lists the
//! templates it extends through `next` references and overrides only
//! what differs. Cardwright resolves a card branch into flat records,
//! decodes each record into a typed drawing command and replays the
//! commands against a [`HostEditor`] implementation.
//!
//! ## Example
//!
//! ```ignore
//! use cardwright::{RecordingHost, Toolbox};
//!
//! let toolbox = Toolbox::open("Blueprint.xml")?;
//! let mut host = RecordingHost::new();
//! toolbox.assemble_cards(&mut host, &["minimal example"], false)?;
//! ```

pub mod assembler;
pub mod error;
pub mod toolbox;

// --- Public API ---
pub use assembler::{assemble_into, dispatch};
pub use error::AssembleError;
pub use toolbox::Toolbox;

// Member crate surfaces, re-exported for one-stop embedding.
pub use cardwright_blueprint::{
    Blueprint, BlueprintError, COLOR_TAG, ConfigNode, Entry, Field, LoaderOptions, NEXT_TAG,
    PaletteEntry, ResolvedLayout, ResolvedRecord, Value,
};
pub use cardwright_command::{
    Command, CommandError, GroupSpec, ImageSpec, ImportLayerLoadSpec, ImportLayerSpec, MaskSpec,
    MonochromeSpec, SelectSpec, TYPE_TAG, TextSpec,
};
pub use cardwright_host::{HostEditor, HostError, HostEvent, RecordingHost};
