use std::io;

#[derive(thiserror::Error, Debug)]
pub enum WireError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    /// Error returned by a record codec implementation.
    #[error("codec: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Only produced by the strict decode path; lenient decoding maps these to `Empty`.
    #[error("unknown wire type: {0}")]
    UnknownWireType(i32),

    #[error("unknown complication type name: {0:?}")]
    UnknownName(String),

    /// A type list frame announced more entries than the config allows.
    #[error("type list too long: {count} entries (max {max})")]
    TooManyEntries { count: u32, max: usize },
}
