use thiserror::Error;

/// Errors raised while loading a blueprint or resolving layouts from it.
#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("duplicate tag <{tag}> at '{path}': only list-accumulating tags may repeat")]
    DuplicateTag { path: String, tag: String },

    #[error("cannot parse '{text}' as {target}")]
    Parse { text: String, target: String },

    #[error("path '{path}': segment '{segment}' was not found")]
    PathNotFound { path: String, segment: String },

    #[error("inheritance cycle: '{path}' is already being merged (chain: {})", .chain.join(" -> "))]
    CyclicInheritance { path: String, chain: Vec<String> },
}
