//! Grouped object collection and its save/load orchestration.
//!
//! # Header derivation
//!
//! The header is built from one representative per discriminator: the first
//! object added under it. Every representative serializes into one shared
//! accumulator record and the accumulator's sorted column names become the
//! header. Fields that only later members of a group carry are not part of
//! the header and are dropped when the file is written.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};

use crate::error::{Result, StoreError};
use crate::options::CodecOptions;
use crate::persist::Persistable;
use crate::record::Record;
use crate::registry::Registry;

/// Owner of persisted objects, grouped by discriminator.
///
/// Groups iterate in sorted discriminator order; members keep insertion
/// order within their group.
#[derive(Debug, Default)]
pub struct Store {
    groups: BTreeMap<String, Vec<Box<dyn Persistable>>>,
    options: CodecOptions,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            groups: BTreeMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Take ownership of `object`, appending it to its discriminator's group.
    pub fn add(&mut self, object: Box<dyn Persistable>) {
        self.groups
            .entry(object.class_id().to_string())
            .or_default()
            .push(object);
    }

    /// Total number of objects across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Discriminators present in the store, sorted.
    pub fn discriminators(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Members of one group in insertion order.
    pub fn group(&self, discriminator: &str) -> &[Box<dyn Persistable>] {
        self.groups.get(discriminator).map_or(&[], Vec::as_slice)
    }

    /// All objects in write order: groups sorted, members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Persistable> {
        self.groups
            .values()
            .flat_map(|group| group.iter().map(|object| &**object))
    }

    /// Columns [`Store::serialize`] writes in the header.
    pub fn header_columns(&self) -> Vec<String> {
        self.header_record().columns()
    }

    /// Serialize each group's representative into one accumulator record.
    fn header_record(&self) -> Record {
        let mut accumulator = Record::new();
        for group in self.groups.values() {
            if let Some(representative) = group.first() {
                representative.serialize(&mut accumulator);
            }
        }
        accumulator
    }

    /// Write the header line followed by one body line per object.
    pub fn serialize<W: Write>(&self, mut sink: W) -> Result<()> {
        self.options.validate()?;

        let accumulator = self.header_record();
        let columns = accumulator.columns();
        writeln!(sink, "{}", accumulator.encode_header(&self.options))?;
        debug!(
            groups = self.groups.len(),
            columns = columns.len(),
            "wrote header"
        );

        let mut rows = 0usize;
        for object in self.iter() {
            let mut record = Record::new();
            object.serialize(&mut record);
            writeln!(sink, "{}", record.encode_body(&columns, &self.options))?;
            rows += 1;
        }
        sink.flush()?;
        debug!(rows, "wrote body");
        Ok(())
    }

    /// Read objects from `source`, add them to this store, and return them
    /// in file order.
    ///
    /// The first malformed line aborts the load and leaves the store
    /// unchanged.
    pub fn deserialize<R: BufRead>(
        &mut self,
        source: R,
        registry: &Registry,
    ) -> Result<Vec<&dyn Persistable>> {
        self.options.validate()?;

        let mut lines = source.lines();
        let header = lines.next().ok_or(StoreError::EmptySource)??;
        let columns = Record::decode_header(&header, &self.options);
        debug!(columns = columns.len(), "read header");

        let mut loaded = Vec::new();
        for (index, line) in lines.enumerate() {
            // Line 1 is the header.
            let line_number = index + 2;
            let line = line?;
            let object = self
                .read_object(&columns, &line, registry)
                .inspect_err(|err| warn!(line = line_number, %err, "rejected record line"))?;
            loaded.push(object);
        }
        debug!(rows = loaded.len(), "read body");

        let mut positions = Vec::with_capacity(loaded.len());
        for object in loaded {
            let discriminator = object.class_id().to_string();
            let group = self.groups.entry(discriminator.clone()).or_default();
            positions.push((discriminator, group.len()));
            group.push(object);
        }
        Ok(positions
            .iter()
            .map(|(discriminator, index)| &*self.groups[discriminator][*index])
            .collect())
    }

    fn read_object(
        &self,
        columns: &[String],
        line: &str,
        registry: &Registry,
    ) -> Result<Box<dyn Persistable>> {
        let record = Record::decode_body(columns, line, &self.options)?;
        let mut object = registry.create(record.class_id())?;
        object.deserialize(&record);
        Ok(object)
    }

    /// Write the store to `path`, replacing any existing file.
    ///
    /// Data goes to a sibling temp file first, which is then renamed over
    /// the target. The temp file is removed when any step after its
    /// creation fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let span = info_span!("save", path = %path.display());
        let _guard = span.enter();

        self.options.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StoreError::file("create directory", parent))?;
        }

        let temp_path = temp_path_for(path);
        let written = self
            .write_temp(&temp_path)
            .and_then(|()| fs::rename(&temp_path, path).map_err(StoreError::file("rename", path)));
        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                debug!(path = %temp_path.display(), %cleanup, "temp file not removed");
            }
            return Err(err);
        }

        info!(objects = self.len(), "saved records");
        Ok(())
    }

    fn write_temp(&self, temp_path: &Path) -> Result<()> {
        let file = File::create(temp_path).map_err(StoreError::file("create", temp_path))?;
        let mut writer = BufWriter::new(file);
        self.serialize(&mut writer)?;
        let file = writer
            .into_inner()
            .map_err(|err| StoreError::file("write", temp_path)(err.into_error()))?;
        file.sync_all()
            .map_err(StoreError::file("sync", temp_path))
    }

    /// Load every object from the file at `path` into this store.
    pub fn load(&mut self, path: &Path, registry: &Registry) -> Result<Vec<&dyn Persistable>> {
        let span = info_span!("load", path = %path.display());
        let _guard = span.enter();

        let file = File::open(path).map_err(StoreError::file("open", path))?;
        let loaded = self.deserialize(BufReader::new(file), registry)?;
        info!(objects = loaded.len(), "loaded records");
        Ok(loaded)
    }
}

/// Read only the header columns of the file at `path`, in file order.
pub fn read_header(path: &Path, options: &CodecOptions) -> Result<Vec<String>> {
    let file = File::open(path).map_err(StoreError::file("open", path))?;
    let header = BufReader::new(file)
        .lines()
        .next()
        .ok_or(StoreError::EmptySource)??;
    Ok(Record::decode_header(&header, options))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
