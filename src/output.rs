// 💾 JSON file output (--out)

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::model::{serialize_document, FinancialDocument};

/// Write the document as indented JSON, replacing any existing file
pub fn write_document(document: &FinancialDocument, path: &Path) -> Result<()> {
    let persistence = |source: std::io::Error| Error::Persistence {
        path: path.to_path_buf(),
        source,
    };

    let bytes = serialize_document(document).map_err(|e| persistence(e.into()))?;
    fs::write(path, bytes).map_err(persistence)?;

    info!("wrote {} account(s) to {}", document.accounts.len(), path.display());
    Ok(())
}
