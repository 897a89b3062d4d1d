//! Translate statements and render their descriptors as JSON

use super::CliError;
use crate::output::{to_json, to_json_pretty};

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// The `;`-terminated statements to translate
    pub statements: String,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Run the pipeline and render the resulting descriptors.
pub fn execute_translate(options: &TranslateOptions) -> Result<String, CliError> {
    let translation = crate::translate_sql(&options.statements)?;

    Ok(if options.pretty {
        to_json_pretty(&translation)
    } else {
        to_json(&translation)
    })
}
