//! Document I/O operations

use crate::types::*;
use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem for the default output name
const OUTPUT_SUFFIX: &str = "_booklet";

/// Resolve a user-supplied input path.
///
/// A path without a `.pdf` extension (any case) gets one appended. The result
/// must exist and be a regular file.
pub fn resolve_input_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let resolved = with_pdf_extension(path.as_ref());

    if !resolved.exists() {
        return Err(BookletError::FileNotFound(resolved));
    }
    if !resolved.is_file() {
        return Err(BookletError::NotAFile(resolved));
    }
    Ok(resolved)
}

/// Normalize a user-supplied output path.
///
/// Gets `.pdf` appended under the same rule as [`resolve_input_path`]; the
/// file does not need to exist.
pub fn resolve_output_path(path: impl AsRef<Path>) -> PathBuf {
    with_pdf_extension(path.as_ref())
}

fn with_pdf_extension(path: &Path) -> PathBuf {
    let has_pdf_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if has_pdf_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".pdf");
        PathBuf::from(name)
    }
}

/// `<stem>_booklet.pdf` next to the input file
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.pdf"))
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = resolve_input_path(path)?;
    log::info!("Reading {}", path.display());
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes))
        .await?
        .map_err(BookletError::MalformedInput)?;
    Ok(doc)
}

/// Save a document.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so a failed save never leaves a partial file.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    tokio::task::spawn_blocking(move || {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        write_atomically(&path, &bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok::<_, BookletError>(())
    })
    .await??;
    Ok(())
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_failure = |source: std::io::Error| BookletError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_failure)?;
    temp.write_all(bytes).map_err(write_failure)?;
    temp.as_file().sync_all().map_err(write_failure)?;
    temp.persist(path).map_err(|e| write_failure(e.error))?;
    Ok(())
}
