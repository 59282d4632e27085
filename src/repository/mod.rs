//! Repository layer: flat-file stores backing the catalog and the registry

pub mod books;
pub mod loans;

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};

pub use books::BookStore;
pub use loans::LoanStore;

/// A record that round-trips through one whitespace-delimited store line.
///
/// Fields must not themselves contain whitespace; the format has no
/// escaping or quoting.
pub trait TextRecord: Sized {
    /// Encode as a single store line, fields separated by single spaces.
    fn encode(&self) -> String;

    /// Decode from the whitespace-split fields of one line.
    fn decode(fields: &[&str]) -> Result<Self, String>;
}

/// Handle on one line-oriented store file.
///
/// The file is opened for reading and writing up front, so a missing or
/// unreadable store fails at open time rather than at first use. The
/// handle lives as long as the collection it backs and is only touched
/// at load and save.
#[derive(Debug)]
pub struct TextStore<R> {
    path: PathBuf,
    file: File,
    _record: PhantomData<R>,
}

impl<R: TextRecord> TextStore<R> {
    /// Open the store file read/write. The file must already exist.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let file = OpenOptions::new().read(true).write(true).open(&path)?;
        Ok(Self {
            path,
            file,
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the start of the file.
    ///
    /// A line with an empty first field terminates the load and any
    /// remaining lines are ignored; this is the store's end-of-records
    /// marker and also swallows trailing whitespace. A line with the
    /// wrong field count is a [`AppError::Malformed`] error.
    pub fn load(&mut self) -> AppResult<Vec<R>> {
        self.file.seek(SeekFrom::Start(0))?;
        let reader = BufReader::new(&self.file);

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                break;
            }
            let record = R::decode(&fields).map_err(|message| AppError::Malformed {
                line: index + 1,
                message,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Overwrite the store with the given records, one per line, in order.
    pub fn save(&mut self, records: &[R]) -> AppResult<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.set_len(0)?;

        let mut writer = BufWriter::new(&self.file);
        for record in records {
            writeln!(writer, "{}", record.encode())?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// The two stores, opened together at startup
#[derive(Debug)]
pub struct Repository {
    pub books: BookStore,
    pub loans: LoanStore,
}

impl Repository {
    /// Open both store files; fails if either cannot be opened read/write.
    pub fn open(config: &StorageConfig) -> AppResult<Self> {
        Ok(Self {
            books: BookStore::open(&config.books_path)?,
            loans: LoanStore::open(&config.loans_path)?,
        })
    }
}
