//! Typed drawing commands.
//!
//! A resolved record is an untyped bag of fields; this crate turns it
//! into a [`Command`] up front, so every required field and field kind
//! is checked before the first host call is made. Each command variant
//! carries exactly the fields its drawing operation consumes, optional
//! ones staying optional so hosts can apply their own defaults.

use cardwright_blueprint::{Field, ResolvedRecord, Value};
use serde::Serialize;
use thiserror::Error;

/// Record field naming the component kind.
pub const TYPE_TAG: &str = "type";

/// Errors raised while decoding a resolved record into a command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("component '{component}' has no 'type' field")]
    MissingType { component: String },

    #[error("component '{component}' has unknown type '{type_tag}'")]
    UnknownType { component: String, type_tag: String },

    #[error("component '{component}' is missing required field '{field}'")]
    MissingField { component: String, field: String },

    #[error("component '{component}': field '{field}' should be {expected}, found {found}")]
    FieldType {
        component: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Creates the base image. The first command of every layout sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpec {
    pub size: (i64, i64),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A single-colour filled layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonochromeSpec {
    pub size: (i64, i64),
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(i64, i64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_to_position: Option<i64>,
}

/// Loads a data image so later commands can copy layers out of it.
///
/// The name is required because it is how `import_layer` commands refer
/// back to the loaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLayerLoadSpec {
    pub filename: String,
    pub name: String,
}

/// Copies one layer from a previously loaded data image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLayerSpec {
    pub target_file: String,
    pub target_layer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(i64, i64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_to_position: Option<i64>,
}

/// Creates a layer group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_to_position: Option<i64>,
}

/// A styled text layer.
///
/// Without a size the host lays the text out dynamically. Justification
/// values follow the host convention: left 0, right 1, center 2, fill 3.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpec {
    pub text: String,
    pub font: String,
    pub font_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<(i64, i64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(i64, i64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_to_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A rectangular selection, consumed by a following mask command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSpec {
    pub size: (i64, i64),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(i64, i64)>,
}

/// Turns the current selection into a layer mask.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskSpec {
    /// Layer to attach the mask to; the host's active layer when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
}

/// One decoded drawing command, tagged by the record's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Image(ImageSpec),
    Monochrome(MonochromeSpec),
    ImportLayerLoad(ImportLayerLoadSpec),
    ImportLayer(ImportLayerSpec),
    Group(GroupSpec),
    Text(TextSpec),
    Select(SelectSpec),
    Mask(MaskSpec),
    /// Disables an inherited component without redefining it.
    Hide,
}

impl Command {
    /// Decodes one resolved record. `component` is the record's name in
    /// the layout and is only used in diagnostics.
    pub fn from_record(component: &str, record: &ResolvedRecord) -> Result<Self, CommandError> {
        let reader = FieldReader { component, record };
        let kind = match record.get(TYPE_TAG) {
            None => {
                return Err(CommandError::MissingType {
                    component: component.to_string(),
                });
            }
            Some(Field::Value(value)) => match value.as_str() {
                Some(kind) => kind,
                None => return Err(reader.wrong_type(TYPE_TAG, "string", value.kind())),
            },
            Some(Field::Record(_)) => {
                return Err(reader.wrong_type(TYPE_TAG, "string", "node"));
            }
        };

        let command = match kind {
            "image" => Command::Image(ImageSpec {
                size: reader.require_pair("size")?,
                name: reader.opt_str("name")?,
            }),
            "monochrome" => Command::Monochrome(MonochromeSpec {
                size: reader.require_pair("size")?,
                color: reader.require_str("color")?,
                name: reader.opt_str("name")?,
                position: reader.opt_pair("position")?,
                add_to_position: reader.opt_int("addToPosition")?,
            }),
            "import_layer_load" => Command::ImportLayerLoad(ImportLayerLoadSpec {
                filename: reader.require_str("filename")?,
                name: reader.require_str("name")?,
            }),
            "import_layer" => Command::ImportLayer(ImportLayerSpec {
                target_file: reader.require_str("targetFile")?,
                target_layer: reader.require_str("targetLayer")?,
                name: reader.opt_str("name")?,
                position: reader.opt_pair("position")?,
                add_to_position: reader.opt_int("addToPosition")?,
            }),
            "group" => Command::Group(GroupSpec {
                name: reader.opt_str("name")?,
                add_to_position: reader.opt_int("addToPosition")?,
            }),
            "text" => Command::Text(TextSpec {
                text: reader.require_str("text")?,
                font: reader.require_str("font")?,
                font_size: reader.require_int("fontSize")?,
                text_scale: reader.opt_float("textScale")?,
                size: reader.opt_pair("size")?,
                color: reader.opt_str("color")?,
                line_spacing: reader.opt_float("lineSpacing")?,
                letter_spacing: reader.opt_float("letterSpacing")?,
                justification: reader.opt_int("justification")?,
                position: reader.opt_pair("position")?,
                add_to_position: reader.opt_int("addToPosition")?,
                name: reader.opt_str("name")?,
            }),
            "select" => Command::Select(SelectSpec {
                size: reader.require_pair("size")?,
                position: reader.opt_pair("position")?,
            }),
            "mask" => Command::Mask(MaskSpec {
                layer: reader.opt_str("layer")?,
            }),
            "hide" => Command::Hide,
            _ => {
                return Err(CommandError::UnknownType {
                    component: component.to_string(),
                    type_tag: kind.to_string(),
                });
            }
        };

        // Hidden components legitimately keep the fields they override,
        // so only the drawing kinds report unconsumed ones.
        if !matches!(command, Command::Hide) {
            reader.log_surplus(command.kind(), command.known_fields());
        }
        Ok(command)
    }

    /// The type tag this command was decoded from.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Image(_) => "image",
            Command::Monochrome(_) => "monochrome",
            Command::ImportLayerLoad(_) => "import_layer_load",
            Command::ImportLayer(_) => "import_layer",
            Command::Group(_) => "group",
            Command::Text(_) => "text",
            Command::Select(_) => "select",
            Command::Mask(_) => "mask",
            Command::Hide => "hide",
        }
    }

    fn known_fields(&self) -> &'static [&'static str] {
        match self {
            Command::Image(_) => &["size", "name"],
            Command::Monochrome(_) => &["size", "color", "name", "position", "addToPosition"],
            Command::ImportLayerLoad(_) => &["filename", "name"],
            Command::ImportLayer(_) => {
                &["targetFile", "targetLayer", "name", "position", "addToPosition"]
            }
            Command::Group(_) => &["name", "addToPosition"],
            Command::Text(_) => &[
                "text",
                "font",
                "fontSize",
                "textScale",
                "size",
                "color",
                "lineSpacing",
                "letterSpacing",
                "justification",
                "position",
                "addToPosition",
                "name",
            ],
            Command::Select(_) => &["size", "position"],
            Command::Mask(_) => &["layer"],
            Command::Hide => &[],
        }
    }
}

/// Shared plumbing for reading typed fields out of a record.
struct FieldReader<'a> {
    component: &'a str,
    record: &'a ResolvedRecord,
}

impl FieldReader<'_> {
    fn require_str(&self, field: &str) -> Result<String, CommandError> {
        self.opt_str(field)?.ok_or_else(|| self.missing(field))
    }

    fn require_int(&self, field: &str) -> Result<i64, CommandError> {
        self.opt_int(field)?.ok_or_else(|| self.missing(field))
    }

    fn require_pair(&self, field: &str) -> Result<(i64, i64), CommandError> {
        self.opt_pair(field)?.ok_or_else(|| self.missing(field))
    }

    fn opt_str(&self, field: &str) -> Result<Option<String>, CommandError> {
        self.read(field, "string", |value| value.as_str().map(str::to_string))
    }

    fn opt_int(&self, field: &str) -> Result<Option<i64>, CommandError> {
        self.read(field, "integer", Value::as_int)
    }

    fn opt_float(&self, field: &str) -> Result<Option<f64>, CommandError> {
        self.read(field, "number", Value::as_float)
    }

    /// Reads a two-element tuple; longer or shorter tuples are rejected.
    fn opt_pair(&self, field: &str) -> Result<Option<(i64, i64)>, CommandError> {
        self.read(field, "integer pair", |value| match value.as_tuple()? {
            &[a, b] => Some((a, b)),
            _ => None,
        })
    }

    /// Reads one field through a [`Value`] accessor. A present field the
    /// accessor rejects is a kind mismatch.
    fn read<T>(
        &self,
        field: &str,
        expected: &'static str,
        extract: impl FnOnce(&Value) -> Option<T>,
    ) -> Result<Option<T>, CommandError> {
        match self.record.get(field) {
            None => Ok(None),
            Some(Field::Value(value)) => match extract(value) {
                Some(out) => Ok(Some(out)),
                None => Err(self.wrong_type(field, expected, value.kind())),
            },
            Some(Field::Record(_)) => Err(self.wrong_type(field, expected, "node")),
        }
    }

    fn log_surplus(&self, kind: &str, known: &[&str]) {
        for (key, _) in self.record.iter() {
            if key != TYPE_TAG && !known.contains(&key) {
                log::debug!(
                    "component '{}': field '{}' is not used by '{}'",
                    self.component,
                    key,
                    kind
                );
            }
        }
    }

    fn missing(&self, field: &str) -> CommandError {
        CommandError::MissingField {
            component: self.component.to_string(),
            field: field.to_string(),
        }
    }

    fn wrong_type(
        &self,
        field: &str,
        expected: &'static str,
        found: &'static str,
    ) -> CommandError {
        CommandError::FieldType {
            component: self.component.to_string(),
            field: field.to_string(),
            expected,
            found,
        }
    }
}
