use crate::error::{Error, Result};
use crate::model::Dataset;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let dataset: Dataset =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::json(path, e))?;
    info!(
        "loaded {} users and {} pages from {}",
        dataset.users.len(),
        dataset.pages.len(),
        path.display()
    );
    Ok(dataset)
}

// Pretty-printed with a 4 space indent.
pub fn save_dataset(path: impl AsRef<Path>, dataset: &Dataset) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    dataset
        .serialize(&mut ser)
        .map_err(|e| Error::json(path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(path, e))?;
    info!("saved dataset to {}", path.display());
    Ok(())
}
