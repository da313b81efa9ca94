//! Cache generation: read, filter, encode, and atomically replace.

use serde::Serialize;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::cache::{file_size, max_width, CacheWriter};
use crate::fileread::read_file;
use crate::status::Status;
use crate::token::filter_lines;
use crate::{Error, Result};

/// Summary of a completed generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Bytes loaded from the input file
    pub input_bytes: usize,
    /// Raw lines after splitting on `\n`
    pub lines: usize,
    /// Lines that survived validation
    pub tokens: usize,
    /// Record body width `W`
    pub record_width: usize,
    /// Size of the written cache file
    pub output_bytes: usize,
}

impl GenerationReport {
    /// Lines dropped by validation.
    pub fn rejected(&self) -> usize {
        self.lines - self.tokens
    }
}

/// Generate a cache file from a newline-delimited wordlist.
///
/// The output is written to a temporary file beside `output` and renamed
/// over it only after every byte has been flushed, so a failed run leaves
/// any previous cache untouched.
pub fn generate_cache_file(input: &Path, output: &Path) -> Result<GenerationReport> {
    let data = read_file(input)?;

    let lines = data.iter().filter(|&&b| b == b'\n').count() + 1;
    let tokens = filter_lines(&data);

    log::debug!(
        "Split {} lines from {:?}, {} valid tokens",
        lines,
        input,
        tokens.len()
    );

    let record_width = max_width(&tokens);
    let temp = CacheWriter::new(create_temp(output)?).write(&tokens)?;
    temp.as_file().sync_all()?;
    temp.persist(output).map_err(|e| Error::Io(e.error))?;

    let report = GenerationReport {
        input_bytes: data.len(),
        lines,
        tokens: tokens.len(),
        record_width,
        output_bytes: file_size(record_width, tokens.len()),
    };

    log::info!(
        "Generated {:?}: {} records of width {} ({} rejected)",
        output,
        report.tokens,
        report.record_width,
        report.rejected()
    );

    Ok(report)
}

/// Generate a cache file and report the outcome as a status code.
///
/// `0` on success, `2` if the input does not exist, `1` for any other
/// failure.
pub fn generate_cache_file_status(input: &Path, output: &Path) -> Status {
    match generate_cache_file(input, output) {
        Ok(_) => Status::Ok,
        Err(e) => {
            log::error!("Failed to generate cache {:?} from {:?}: {}", output, input, e);
            e.status()
        }
    }
}

fn create_temp(output: &Path) -> Result<NamedTempFile> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = Builder::new().prefix(".wordcache").tempfile_in(dir)?;

    // NamedTempFile defaults to 0600.
    #[cfg(unix)]
    {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o644))?;
    }

    Ok(temp)
}
