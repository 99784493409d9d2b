//! Reading and writing the `db.csv` and `query.csv` fixture files.
//!
//! Both files are headerless. `db.csv` holds one sender entry per line,
//! either `item` or `item,label`; `query.csv` holds one receiver item per
//! line.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::{
    error::{FixtureError, Result},
    generator::{Fixture, SenderEntry},
};
use log::info;
use std::path::{Path, PathBuf};

/// File name of the sender's dataset.
pub const SENDER_FILE: &str = "db.csv";
/// File name of the receiver's query set.
pub const RECEIVER_FILE: &str = "query.csv";

/// Where [`write_fixture`] put the two files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixturePaths {
    pub sender: PathBuf,
    pub receiver: PathBuf,
}

fn writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| FixtureError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| FixtureError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn finish(mut writer: csv::Writer<std::fs::File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `sender` to `path` in generation order. The label column is
/// omitted entirely when `with_labels` is false.
pub fn write_sender_file(path: &Path, sender: &[SenderEntry], with_labels: bool) -> Result<()> {
    let mut writer = writer(path)?;
    for entry in sender {
        let written = if with_labels {
            writer.write_record(&[&entry.item, &entry.label])
        } else {
            writer.write_record(&[&entry.item])
        };
        written.map_err(|source| FixtureError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    finish(writer, path)
}

/// Writes one receiver item per line to `path`.
pub fn write_receiver_file(path: &Path, receiver: &[String]) -> Result<()> {
    let mut writer = writer(path)?;
    for item in receiver {
        writer
            .write_record(&[item])
            .map_err(|source| FixtureError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
    }
    finish(writer, path)
}

/// Writes [`SENDER_FILE`] and [`RECEIVER_FILE`] into `dir`, overwriting any
/// existing files of the same name.
pub fn write_fixture(dir: &Path, fixture: &Fixture, with_labels: bool) -> Result<FixturePaths> {
    let paths = FixturePaths {
        sender: dir.join(SENDER_FILE),
        receiver: dir.join(RECEIVER_FILE),
    };

    write_sender_file(&paths.sender, &fixture.sender, with_labels)?;
    info!(
        "wrote {} sender entries to {:?}",
        fixture.sender.len(),
        paths.sender
    );
    write_receiver_file(&paths.receiver, &fixture.receiver)?;
    info!(
        "wrote {} receiver items to {:?}",
        fixture.receiver.len(),
        paths.receiver
    );

    Ok(paths)
}

/// Reads a sender file. Lines with a single field yield an empty label.
/// Whitespace around fields is ignored, so `item, label` is accepted too.
pub fn read_sender_file(path: &Path) -> Result<Vec<SenderEntry>> {
    let mut buffer = Vec::new();

    for result in reader(path)?.records() {
        let record = result.map_err(|source| FixtureError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let entry = match (record.get(0), record.get(1), record.len()) {
            (Some(item), None, 1) => SenderEntry {
                item: item.to_string(),
                label: String::new(),
            },
            (Some(item), Some(label), 2) => SenderEntry {
                item: item.to_string(),
                label: label.to_string(),
            },
            (_, _, fields) => {
                return Err(FixtureError::MalformedRecord {
                    path: path.to_path_buf(),
                    line,
                    reason: format!("expected 1 or 2 fields, found {}", fields),
                })
            }
        };
        buffer.push(entry);
    }

    Ok(buffer)
}

/// Reads a receiver file, one item per line.
pub fn read_receiver_file(path: &Path) -> Result<Vec<String>> {
    let mut buffer = Vec::new();

    for result in reader(path)?.records() {
        let record = result.map_err(|source| FixtureError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() != 1 {
            return Err(FixtureError::MalformedRecord {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                reason: format!("expected 1 field, found {}", record.len()),
            });
        }
        buffer.push(record[0].to_string());
    }

    Ok(buffer)
}
