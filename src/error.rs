use cardwright_blueprint::BlueprintError;
use cardwright_command::CommandError;
use cardwright_host::HostError;
use thiserror::Error;

/// Top-level error for card assembly and palette workflows.
#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("blueprint error: {0}")]
    Blueprint(#[from] BlueprintError),

    #[error("command error: {0}")]
    Command(#[from] CommandError),

    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("layout export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no card IDs were given")]
    NoCardIds,

    #[error("no palette ID was given")]
    NoPaletteId,
}
