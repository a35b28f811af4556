use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Section registry is empty")]
    EmptyRegistry,

    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Trace references unknown section: {0}")]
    UnknownTraceSection(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
