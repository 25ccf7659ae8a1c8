//! Prompt assembly from input files

use crate::error::{ReadmeError, Result};
use crate::utils::read_file_safe;
use std::path::{Path, PathBuf};

/// Blank line placed between the contents of consecutive input files.
pub const INPUT_SEPARATOR: &str = "\n\n";

/// One input file and its decoded text.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub path: PathBuf,
    pub text: String,
}

/// Read every input in order, stopping at the first file that cannot be read.
pub fn read_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<InputFile>> {
    paths
        .iter()
        .map(|path| -> Result<InputFile> {
            let path = path.as_ref();
            let (text, _encoding) = read_file_safe(path)
                .map_err(|source| ReadmeError::FileRead { path: path.to_path_buf(), source })?;
            tracing::debug!("Read {} ({} bytes)", path.display(), text.len());
            Ok(InputFile { path: path.to_path_buf(), text })
        })
        .collect()
}

/// Join file contents with exactly one blank line between them, in order.
pub fn join_inputs(inputs: &[InputFile]) -> String {
    inputs
        .iter()
        .enumerate()
        .map(|(position, input)| {
            tracing::debug!("Prompt section {}: {}", position + 1, input.path.display());
            input.text.as_str()
        })
        .collect::<Vec<_>>()
        .join(INPUT_SEPARATOR)
}

/// Read the input files and combine them into a single prompt.
///
/// The CLI guarantees at least one path.
pub fn build_prompt<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let inputs = read_inputs(paths)?;
    Ok(join_inputs(&inputs))
}
