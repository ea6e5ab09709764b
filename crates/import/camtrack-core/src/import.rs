//! Extract-then-write pipeline.

use std::path::Path;

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::extract::{extract, extract_str};
use crate::host::HostDocument;
use crate::writer::{apply_to_document, WriteSummary};

/// Import the composite at `path` onto the configured camera of `doc`.
/// Extraction errors are returned before `doc` is modified.
pub fn import_file<D: HostDocument>(
    path: impl AsRef<Path>,
    doc: &mut D,
    config: &ImportConfig,
) -> Result<WriteSummary, ImportError> {
    let info = extract(path, config)?;
    apply_to_document(&info, doc, config)
}

pub fn import_str<D: HostDocument>(
    xml: &str,
    doc: &mut D,
    config: &ImportConfig,
) -> Result<WriteSummary, ImportError> {
    let info = extract_str(xml, config)?;
    apply_to_document(&info, doc, config)
}
