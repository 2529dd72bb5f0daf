// src/error.rs

use std::path::PathBuf;

/// Failures while locating or tokenizing the transform block in log text.
///
/// `line` is always the 0-based line index; messages show the 1-based number.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BlockError {
    #[error("line {}: transform row missing (log has too few lines)", .line + 1)]
    MissingLine { line: usize },

    #[error("line {}: expected 4 numeric tokens, found {found}", .line + 1)]
    TokenCount { line: usize, found: usize },

    #[error("line {}: '{token}' is not a number", .line + 1)]
    InvalidNumber { line: usize, token: String },
}

impl BlockError {
    /// 0-based index of the offending line.
    pub fn line(&self) -> usize {
        match self {
            BlockError::MissingLine { line }
            | BlockError::TokenCount { line, .. }
            | BlockError::InvalidNumber { line, .. } => *line,
        }
    }
}

/// Fatal errors of an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("cannot list directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read log file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed transform block in '{}', {source}", .path.display())]
    MalformedBlock {
        path: PathBuf,
        #[source]
        source: BlockError,
    },

    #[error("export to '{}' failed: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl AnalysisError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            AnalysisError::ReadDir { path, .. }
            | AnalysisError::FileRead { path, .. }
            | AnalysisError::MalformedBlock { path, .. }
            | AnalysisError::Export { path, .. } => path,
        }
    }
}


// src/error.rs
