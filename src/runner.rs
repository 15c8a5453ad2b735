use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use tracing::info;

use crate::{config::Config, error::RunError, get_output};

static INPUT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"input-(\d{3})\.txt").expect("input name regex is valid"));

/// Derives the output path for an input file.
///
/// The input's file name must contain `input-NNN.txt`, where `NNN` is three
/// digits. The output is `output-NNN.txt` inside `output_dir`.
///
/// # Errors
/// Returns `RunError::InvalidInputName` if the file name does not match.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use stackma::runner::output_path_for;
///
/// let path = output_path_for(Path::new("programs/input-007.txt"), Path::new("output")).unwrap();
/// assert_eq!(path, Path::new("output/output-007.txt"));
///
/// assert!(output_path_for(Path::new("program.txt"), Path::new("output")).is_err());
/// ```
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf, RunError> {
    let number = input.file_name()
                      .and_then(|name| name.to_str())
                      .and_then(|name| INPUT_NAME.captures(name))
                      .and_then(|captures| captures.get(1))
                      .ok_or_else(|| RunError::InvalidInputName { path: input.to_path_buf() })?;

    Ok(output_dir.join(format!("output-{}.txt", number.as_str())))
}

/// Runs one program file and writes its final stack to the output directory.
///
/// The output directory is created if missing. Each value is written on its
/// own line, bottom of the stack first. Nothing is written when the program
/// fails.
///
/// # Parameters
/// - `input`: Path of an `input-NNN.txt` program.
/// - `output_dir`: Directory receiving `output-NNN.txt`.
/// - `config`: Limits for the run.
///
/// # Returns
/// The path of the written output file.
///
/// # Errors
/// Returns a `RunError` for a bad name or failed I/O, or the program's own
/// `TokenizeError` or `RuntimeError`.
pub fn run_file(input: &Path,
                output_dir: &Path,
                config: &Config)
                -> Result<PathBuf, Box<dyn std::error::Error>> {
    let output = output_path_for(input, output_dir)?;

    let source = fs::read_to_string(input).map_err(|source| RunError::Io { path: input.to_path_buf(),
                                                                           source })?;
    info!(input = %input.display(), "running program");

    let lines = get_output(&source, config)?;

    fs::create_dir_all(output_dir).map_err(|source| RunError::Io { path: output_dir.to_path_buf(),
                                                                   source })?;
    let contents: String = lines.iter().map(|line| format!("{line}\n")).collect();
    fs::write(&output, contents).map_err(|source| RunError::Io { path: output.clone(),
                                                                 source })?;

    info!(output = %output.display(), values = lines.len(), "wrote output");
    Ok(output)
}
