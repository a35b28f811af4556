use std::path::PathBuf;

use folio_core::config::FolioConfig;

/// Results posted back from file-dialog threads.
pub enum AppMessage {
    ConfigImported { path: PathBuf, config: FolioConfig },
    ConfigExported { path: PathBuf },
    Error { message: String },
}
