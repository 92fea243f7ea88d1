// SimpleFIN account summary - core library
// Decode the /accounts document, flag accounts named in error notices,
// render the grouped balance table. Used by the `sf` binary and the tests.

pub mod client;
pub mod config;
pub mod correlate;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod table;

// Re-export commonly used types
pub use client::{accounts_url, fetch_document, ClientSettings};
pub use config::{BuildInfo, Cli, Command, Settings};
pub use correlate::correlate_errors;
pub use error::{Error, Result};
pub use model::{
    decode_payload, serialize_document,
    Account, FinancialDocument, Organization, Transaction,
};
pub use output::write_document;
pub use pipeline::process_accounts;
pub use table::{render_table, WARNING_GLYPH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
