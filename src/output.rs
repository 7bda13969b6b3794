use std::io::Write;
use std::path::Path;

use crate::error::{NormalizeError, Result};
use crate::models::ArtifactDetail;

/// Serialize `details` as a JSON array, followed by a newline.
pub fn write_details<W: Write>(
    details: &[ArtifactDetail],
    mut writer: W,
    pretty: bool,
) -> std::io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, details)?;
    } else {
        serde_json::to_writer(&mut writer, details)?;
    }
    writeln!(writer)?;
    writer.flush()
}

/// Write `details` to `path`, or to stdout when `path` is `None`.
pub fn emit_details(details: &[ArtifactDetail], path: Option<&Path>, pretty: bool) -> Result<()> {
    match path {
        Some(path) => {
            let write_err = |source: std::io::Error| NormalizeError::OutputWrite {
                path: path.to_path_buf(),
                source,
            };
            let file = std::fs::File::create(path).map_err(write_err)?;
            write_details(details, std::io::BufWriter::new(file), pretty).map_err(write_err)
        }
        None => write_details(details, std::io::stdout().lock(), pretty).map_err(|source| {
            NormalizeError::OutputWrite {
                path: "<stdout>".into(),
                source,
            }
        }),
    }
}
