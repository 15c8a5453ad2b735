use std::path::PathBuf;

#[derive(Debug)]
/// Represents the errors raised by the file runner around the interpreter.
pub enum RunError {
    /// The input file name does not contain `input-NNN.txt`.
    InvalidInputName {
        /// The offending input path.
        path: PathBuf,
    },
    /// Reading the input, creating the output directory or writing the
    /// output failed.
    Io {
        /// The path that was being accessed.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInputName { path } => write!(f,
                                                      "Input file '{}' does not follow the 'input-NNN.txt' naming scheme.",
                                                      path.display()),
            Self::Io { path, source } => {
                write!(f, "Failed to access '{}': {source}.", path.display())
            },
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInputName { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}
