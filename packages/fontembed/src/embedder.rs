//! Reading font files and writing the generated header.

use std::fs;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{render_literal, write_literal, EmbedError};

/// Font file picked up when no input path is given.
pub const DEFAULT_FONT_FILE: &str = "NanumGothic-Regular-subset.ttf";

/// Header file written when no output path is given.
pub const DEFAULT_HEADER_FILE: &str = "font.hpp";

/// State of an existing header compared to its font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Default font and header paths inside `asset_dir`.
pub fn default_paths(asset_dir: &Path) -> (PathBuf, PathBuf) {
    (
        asset_dir.join(DEFAULT_FONT_FILE),
        asset_dir.join(DEFAULT_HEADER_FILE),
    )
}

/// Embed the font at `input_path` as a header written to `output_path`.
///
/// The input is read completely before the output is touched, so a
/// missing or unreadable input never creates or truncates the output. An
/// existing output is truncated and replaced. Writes are not atomic: if
/// writing fails the output may be left empty or partially written.
pub fn embed(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<(), EmbedError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let font_data = read_input(input_path)?;

    debug!(
        "Writing {} bytes from {:?} to {:?}",
        font_data.len(),
        input_path,
        output_path
    );

    if let Err(source) = write_header(&font_data, output_path) {
        return Err(EmbedError::OutputUnwritable {
            path: output_path.to_path_buf(),
            source,
        });
    }

    info!("Embedded {:?} into {:?}", input_path, output_path);

    Ok(())
}

/// Compare the header at `output_path` with what [`embed`] would write for
/// `input_path`. Never writes.
pub fn check(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<Freshness, EmbedError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let font_data = read_input(input_path)?;

    let existing = match fs::read(output_path) {
        Ok(existing) => existing,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("Header {:?} does not exist", output_path);
            return Ok(Freshness::Missing);
        }
        Err(source) => {
            return Err(EmbedError::OutputUnreadable {
                path: output_path.to_path_buf(),
                source,
            });
        }
    };

    let freshness = if existing == render_literal(&font_data).as_bytes() {
        Freshness::UpToDate
    } else {
        Freshness::Stale
    };

    debug!("Header {:?} is {:?}", output_path, freshness);

    Ok(freshness)
}

fn read_input(path: &Path) -> Result<Vec<u8>, EmbedError> {
    let mut file = fs::File::open(path)
        .map_err(|err| EmbedError::from_input(path.to_path_buf(), err))?;

    let mut font_data = Vec::new();
    file.read_to_end(&mut font_data)
        .map_err(|err| EmbedError::from_input(path.to_path_buf(), err))?;

    Ok(font_data)
}

fn write_header(font_data: &[u8], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);

    write_literal(font_data, &mut writer)?;
    writer.flush()
}
