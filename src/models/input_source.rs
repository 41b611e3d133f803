use crate::Error;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const READ_BUFFER_SIZE: usize = 128 * 1024;

/// Where the text stream comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    GzipFile(PathBuf),
}

impl InputSource {
    /// Picks a source for an optional path; `.gz` files are decompressed on the fly.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            None => InputSource::Stdin,
            Some(path) if path.extension().map_or(false, |ext| ext == "gz") => {
                InputSource::GzipFile(path.to_path_buf())
            }
            Some(path) => InputSource::File(path.to_path_buf()),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, Error> {
        match self {
            InputSource::Stdin => {
                info!("Reading from stdin...");
                Ok(Box::new(BufReader::with_capacity(
                    READ_BUFFER_SIZE,
                    io::stdin(),
                )))
            }
            InputSource::File(path) => {
                info!("Reading {:?}...", path);
                let file = File::open(path)?;
                Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
            }
            InputSource::GzipFile(path) => {
                info!("Decompressing {:?}...", path);
                let file = File::open(path)?;
                Ok(Box::new(BufReader::with_capacity(
                    READ_BUFFER_SIZE,
                    GzDecoder::new(file),
                )))
            }
        }
    }
}
