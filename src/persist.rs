//! On-disk form of an [`AssociationMap`].
//!
//! The map is stored as a JSON object whose keys are the decimal item ids and
//! whose values are the ranked groups as arrays of integer arrays:
//!
//! ```json
//! {"36": [[38], [38, 39]], "37": [[36]]}
//! ```

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::Result;
use crate::types::AssociationMap;

pub fn write_associations<W: Write>(writer: W, associations: &AssociationMap) -> Result<()> {
    serde_json::to_writer(writer, associations)?;
    Ok(())
}

pub fn read_associations<R: Read>(reader: R) -> Result<AssociationMap> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes through a temporary file in the target directory so a crash never
/// leaves a truncated model behind.
pub fn save_to_disk(path: &Path, associations: &AssociationMap) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write_associations(&mut writer, associations)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|err| err.error)?;

    info!(path = %path.display(), items = associations.len(), "saved associations");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<AssociationMap> {
    let file = File::open(path)?;
    let associations = read_associations(BufReader::new(file))?;
    info!(path = %path.display(), items = associations.len(), "loaded associations");
    Ok(associations)
}
