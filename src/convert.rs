//! Whole-file conversion.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Read `input`, render it, and write the HTML to `output`.
///
/// Returns [`Error::MissingInput`] without touching `output` when `input`
/// does not exist. Any other failure is [`Error::Io`]; a partially written
/// output file is left as it is.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }

    let source = fs::read_to_string(input)?;
    let html = crate::to_html(&source);
    fs::write(output, &html)?;

    debug!(
        "converted {} ({} bytes) to {} ({} bytes)",
        input.display(),
        source.len(),
        output.display(),
        html.len()
    );
    Ok(())
}
