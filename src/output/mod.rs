use crate::catalog::{PolicyDocument, PolicySet};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod file;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Cannot create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Output path {} exists and is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("Cannot write policy {name} to {}", path.display())]
    Write {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Default)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
}

/// Creates `path` and any missing ancestors. An existing directory is left
/// alone, including one created concurrently by another process.
pub fn ensure_output_directory(path: &Path) -> Result<(), EmitError> {
    debug!("Ensuring output directory {}", path.display());
    if let Err(source) = fs::create_dir_all(path) {
        if path.exists() && !path.is_dir() {
            return Err(EmitError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        return Err(EmitError::CreateDir {
            path: path.to_path_buf(),
            source,
        });
    }
    if !path.is_dir() {
        return Err(EmitError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Writes every document to `output_dir/<name>`, replacing existing files.
///
/// Stops at the first failed write; files written before it are kept.
/// `notice` is called once per document after its file is on disk.
pub fn emit_all(
    documents: &PolicySet,
    output_dir: &Path,
    mut notice: impl FnMut(&PolicyDocument),
) -> Result<EmitReport, EmitError> {
    let mut report = EmitReport::default();
    for document in documents.iter() {
        let path = output_dir.join(&document.name);
        debug!("Writing {} bytes to {}", document.body.len(), path.display());
        file::write_file(&path, document.body).map_err(|source| EmitError::Write {
            name: document.name.clone(),
            path: path.clone(),
            source,
        })?;
        notice(document);
        report.written.push(path);
    }
    Ok(report)
}
