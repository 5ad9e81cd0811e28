//! File-level workflow: load a blueprint, assemble cards, build palettes.

use crate::assembler;
use crate::error::AssembleError;
use cardwright_blueprint::{Blueprint, LoaderOptions, ResolvedLayout};
use cardwright_host::HostEditor;
use std::fs;
use std::path::Path;

/// A loaded blueprint together with the card and palette workflows.
#[derive(Debug)]
pub struct Toolbox {
    blueprint: Blueprint,
}

impl Toolbox {
    /// Loads a blueprint file with default loader options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AssembleError> {
        Self::open_with(path, LoaderOptions::default())
    }

    /// Loads a blueprint file with explicit loader options.
    pub fn open_with(
        path: impl AsRef<Path>,
        options: LoaderOptions,
    ) -> Result<Self, AssembleError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| AssembleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let toolbox = Self::from_source_with(&source, options)?;
        log::info!("loaded blueprint '{}'", path.display());
        Ok(toolbox)
    }

    /// Builds a toolbox from in-memory blueprint XML.
    pub fn from_source(source: &str) -> Result<Self, AssembleError> {
        Self::from_source_with(source, LoaderOptions::default())
    }

    pub fn from_source_with(
        source: &str,
        options: LoaderOptions,
    ) -> Result<Self, AssembleError> {
        let blueprint = Blueprint::parse_with(source, options)?;
        Ok(Self { blueprint })
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Resolves one card into its flat layout.
    pub fn layout(&self, card_id: &str) -> Result<ResolvedLayout, AssembleError> {
        Ok(self.blueprint.generate_layout(card_id)?)
    }

    /// Assembles one card's components into the host, without touching
    /// the display or save lifecycle.
    pub fn assemble_card<H>(&self, host: &mut H, card_id: &str) -> Result<(), AssembleError>
    where
        H: HostEditor + ?Sized,
    {
        let layout = self.layout(card_id)?;
        log::info!("assembling '{}' ({} components)", card_id, layout.len());
        assembler::assemble_into(host, &layout)
    }

    /// Assembles a batch of cards. Each finished image is saved when
    /// `save` is set, otherwise shown to the user.
    pub fn assemble_cards<H>(
        &self,
        host: &mut H,
        card_ids: &[&str],
        save: bool,
    ) -> Result<(), AssembleError>
    where
        H: HostEditor + ?Sized,
    {
        if card_ids.is_empty() {
            return Err(AssembleError::NoCardIds);
        }
        for card_id in card_ids {
            self.assemble_card(host, card_id)?;
            if save {
                host.save_image()?;
            } else {
                host.display_image()?;
            }
        }
        Ok(())
    }

    /// Harvests a palette branch and registers it with the host under
    /// the given name.
    pub fn create_palette<H>(
        &self,
        host: &mut H,
        palette_id: &str,
        name: &str,
    ) -> Result<(), AssembleError>
    where
        H: HostEditor + ?Sized,
    {
        if palette_id.is_empty() {
            return Err(AssembleError::NoPaletteId);
        }
        let entries = self.blueprint.generate_palette(palette_id)?;
        log::info!("palette '{}': {} color(s)", name, entries.len());
        host.import_palette(name, &entries)?;
        Ok(())
    }

    /// Exports one card's resolved layout as pretty-printed JSON, for
    /// inspection and golden-file testing.
    pub fn layout_json(&self, card_id: &str) -> Result<String, AssembleError> {
        let layout = self.layout(card_id)?;
        Ok(serde_json::to_string_pretty(&layout)?)
    }
}
