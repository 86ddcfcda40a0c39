use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use polyrow_core::{CodecOptions, Store, read_header};
use polyrow_model::{registry, sample};

use crate::summary::{print_columns, print_objects, print_summary};

/// Save the sample staff, reload them, add one more, save, and reload again.
pub fn run_demo(path: &Path, options: CodecOptions) -> Result<()> {
    let span = info_span!("demo", path = %path.display());
    let _guard = span.enter();

    let mut store = Store::with_options(options);
    store.add(Box::new(sample::pavel()));
    store.add(Box::new(sample::karel()));
    store.add(Box::new(sample::petr()));
    info!(objects = store.len(), "created sample objects");
    store
        .save(path)
        .with_context(|| format!("save records: {}", path.display()))?;

    let mut store = Store::with_options(options);
    let loaded = store
        .load(path, registry())
        .with_context(|| format!("load records: {}", path.display()))?;
    println!("Loaded {} objects from {}", loaded.len(), path.display());
    print_objects(&loaded);

    store.add(Box::new(sample::james()));
    info!(objects = store.len(), "added new object to loaded store");
    store
        .save(path)
        .with_context(|| format!("save records: {}", path.display()))?;

    let mut store = Store::with_options(options);
    let loaded = store
        .load(path, registry())
        .with_context(|| format!("reload records: {}", path.display()))?;
    println!();
    println!("Reloaded {} objects from {}", loaded.len(), path.display());
    print_objects(&loaded);

    println!();
    print_summary(&store);
    Ok(())
}

pub fn run_show(path: &Path, options: CodecOptions) -> Result<()> {
    let mut store = Store::with_options(options);
    let loaded = store
        .load(path, registry())
        .with_context(|| format!("load records: {}", path.display()))?;
    print_objects(&loaded);
    println!();
    print_summary(&store);
    Ok(())
}

pub fn run_columns(path: &Path, options: CodecOptions) -> Result<()> {
    let columns = read_header(path, &options)
        .with_context(|| format!("read header: {}", path.display()))?;
    print_columns(&columns);
    Ok(())
}
