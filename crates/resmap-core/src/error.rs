use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A corpus file has a row missing a required field. Fatal at load
    /// time: no partial corpus is ever exposed.
    #[error("Malformed dataset {file} (row {row}): {reason}")]
    MalformedDataset {
        file: String,
        row: usize,
        reason: String,
    },

    /// Requested variant name is not among the loaded set. Recoverable by
    /// the caller (e.g. fall back to the default variant); never silently
    /// substituted here.
    #[error("Unknown dataset variant: {0}")]
    UnknownVariant(String),

    /// A color map derived from one variant was paired with documents from
    /// another. Programmer error, not a user-facing condition.
    #[error("Color map built for variant '{map_variant}' has no entry for label '{label}'")]
    ColorMapMismatch { map_variant: String, label: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
