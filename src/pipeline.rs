// 🔄 Pipeline - fetch → correlate → (write file) → render

use std::io::Write;

use log::warn;

use crate::client::fetch_document;
use crate::config::Settings;
use crate::correlate::correlate_errors;
use crate::error::{Error, Result};
use crate::model::FinancialDocument;
use crate::output::write_document;
use crate::table::render_table;

/// Run one invocation against `out`. Nothing is rendered if any step before
/// rendering fails. The JSON file, when requested, is written before the table.
pub fn process_accounts<W: Write>(settings: &Settings, out: &mut W) -> Result<FinancialDocument> {
    let mut document = fetch_document(&settings.client)?;

    correlate_errors(&mut document);
    for error in &document.errors {
        warn!("{}", error);
    }

    if let Some(path) = &settings.out {
        write_document(&document, path)?;
        writeln!(out, "JSON results written to: {}", path.display()).map_err(Error::Render)?;
    }

    render_table(&document.accounts, out).map_err(Error::Render)?;

    Ok(document)
}
