// 🔎 Error Correlator - flag accounts named by the bridge's error notices
//
// Matching is a plain, case-sensitive substring test of the organization name
// inside each error string. Short or generic names can match unrelated errors;
// that is accepted behaviour of the heuristic.

use log::debug;

use crate::model::FinancialDocument;

/// Set `possible_error` on every account whose organization name appears in
/// one of the document's errors. Flags are only ever set, never cleared.
pub fn correlate_errors(document: &mut FinancialDocument) {
    for error in &document.errors {
        let mut matched = 0;

        for account in document.accounts.iter_mut() {
            if error.contains(account.org.name.as_str()) {
                account.possible_error = true;
                matched += 1;
            }
        }

        if matched == 0 {
            debug!("error matched no account: {}", error);
        } else {
            debug!("error matched {} account(s): {}", matched, error);
        }
    }
}
