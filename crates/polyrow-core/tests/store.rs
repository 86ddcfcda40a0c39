//! Integration tests for saving and loading mixed record files.

use std::fmt;
use std::io::Cursor;

use polyrow_core::{
    CodecOptions, Persistable, Record, Registry, Store, StoreError, read_header, write_class_id,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Book {
    title: String,
    author: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Album {
    title: String,
    artist: String,
    year: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.artist, self.year)
    }
}

impl Persistable for Book {
    fn class_id(&self) -> &str {
        "Book"
    }

    fn serialize(&self, record: &mut Record) {
        write_class_id(self, record);
        record.set("Title", self.title.as_str());
        record.set("Author", self.author.as_str());
    }

    fn deserialize(&mut self, record: &Record) {
        self.title = record.get("Title").to_string();
        self.author = record.get("Author").to_string();
    }
}

impl Persistable for Album {
    fn class_id(&self) -> &str {
        "Album"
    }

    fn serialize(&self, record: &mut Record) {
        write_class_id(self, record);
        record.set("Title", self.title.as_str());
        record.set("Artist", self.artist.as_str());
        record.set("Year", self.year.as_str());
    }

    fn deserialize(&mut self, record: &Record) {
        self.title = record.get("Title").to_string();
        self.artist = record.get("Artist").to_string();
        self.year = record.get("Year").to_string();
    }
}

fn book(title: &str, author: &str) -> Box<dyn Persistable> {
    Box::new(Book {
        title: title.to_string(),
        author: author.to_string(),
    })
}

fn album(title: &str, artist: &str, year: &str) -> Box<dyn Persistable> {
    Box::new(Album {
        title: title.to_string(),
        artist: artist.to_string(),
        year: year.to_string(),
    })
}

fn registry() -> Registry {
    Registry::new().with::<Book>().with::<Album>()
}

fn write(store: &Store) -> String {
    let mut buffer = Vec::new();
    store.serialize(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

fn library() -> Store {
    let mut store = Store::new();
    store.add(book("Krakatit", "Capek"));
    store.add(album("Blue", "Mitchell", "1971"));
    store.add(book("Valka s mloky", "Capek"));
    store
}

#[test]
fn test_file_layout() {
    insta::assert_snapshot!(write(&library()), @r#"
    "Artist";"Author";"ClassID";"Title";"Year";
    "Mitchell";"";"Album";"Blue";"1971";
    "";"Capek";"Book";"Krakatit";"";
    "";"Capek";"Book";"Valka s mloky";"";
    "#);
}

#[test]
fn test_round_trip_restores_variants_in_file_order() {
    let text = write(&library());
    let registry = registry();

    let mut store = Store::new();
    let loaded = store.deserialize(Cursor::new(text), &registry).unwrap();

    assert_eq!(loaded.len(), 3);
    let blue = loaded[0].downcast_ref::<Album>().unwrap();
    assert_eq!(blue.year, "1971");
    let krakatit = loaded[1].downcast_ref::<Book>().unwrap();
    assert_eq!(krakatit.title, "Krakatit");
    assert_eq!(krakatit.author, "Capek");
    assert!(loaded[2].is::<Book>());

    assert_eq!(store.len(), 3);
    assert_eq!(store.group("Book").len(), 2);
}

#[test]
fn test_unknown_discriminator() {
    let text = "\"ClassID\";\"Title\";\n\"Book\";\"Krakatit\";\n\"Poster\";\"Dune\";\n";
    let mut store = Store::new();
    let err = store
        .deserialize(Cursor::new(text), &registry())
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnknownDiscriminator { ref discriminator } if discriminator == "Poster"
    ));
}

#[test]
fn test_failed_load_leaves_store_unchanged() {
    let text = "\"ClassID\";\"Title\";\n\"Book\";\"Krakatit\";\n\"Book\";\n";
    let mut store = library();
    let err = store
        .deserialize(Cursor::new(text), &registry())
        .unwrap_err();
    assert!(matches!(err, StoreError::FieldCountMismatch { .. }));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_field_count_mismatch() {
    let registry = registry();
    for line in ["\"Book\";", "\"Book\";\"Krakatit\";\"extra\";"] {
        let text = format!("\"ClassID\";\"Title\";\n{line}\n");
        let mut store = Store::new();
        let err = store.deserialize(Cursor::new(text), &registry).unwrap_err();
        assert!(
            matches!(err, StoreError::FieldCountMismatch { expected: 2, .. }),
            "unexpected error for {line}: {err}"
        );
    }
}

#[test]
fn test_empty_source() {
    let mut store = Store::new();
    let err = store
        .deserialize(Cursor::new(""), &registry())
        .unwrap_err();
    assert!(matches!(err, StoreError::EmptySource));
}

#[test]
fn test_header_only_file_loads_nothing() {
    let mut store = Store::new();
    let loaded = store
        .deserialize(Cursor::new("\"ClassID\";\"Title\";\n"), &registry())
        .unwrap();
    assert!(loaded.is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_header_comes_from_group_representatives() {
    // The second Book has no author but the header still carries one,
    // because the first Book contributed it.
    let mut store = Store::new();
    store.add(book("Krakatit", "Capek"));
    store.add(book("Anonymous", ""));
    assert_eq!(store.header_columns(), vec!["Author", "ClassID", "Title"]);
}

#[test]
fn test_merge_on_reuse() {
    let registry = registry();
    let mut store = Store::new();
    store.add(book("Krakatit", "Capek"));
    store.add(book("R.U.R.", "Capek"));
    let text = write(&store);

    let mut reused = Store::new();
    let loaded = reused.deserialize(Cursor::new(text), &registry).unwrap().len();
    reused.add(album("Blue", "Mitchell", "1971"));
    let text = write(&reused);

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("\"Artist\";\"Author\";\"ClassID\";\"Title\";\"Year\";")
    );
    assert_eq!(lines.count(), loaded + 1);
}

#[test]
fn test_custom_delimiter_round_trip() {
    let options = CodecOptions::new().with_delimiter('|');
    let mut store = Store::with_options(options);
    store.add(book("Semicolons; a history", "Anon"));
    let text = write(&store);
    assert!(text.starts_with("\"Author\"|\"ClassID\"|\"Title\"|\n"));

    let mut reloaded = Store::with_options(options);
    let loaded = reloaded
        .deserialize(Cursor::new(text), &registry())
        .unwrap();
    let restored = loaded[0].downcast_ref::<Book>().unwrap();
    assert_eq!(restored.title, "Semicolons; a history");
}

#[test]
fn test_invalid_options_rejected() {
    let store = Store::with_options(CodecOptions::new().with_delimiter('"'));
    let err = store.serialize(Vec::new()).unwrap_err();
    assert!(matches!(err, StoreError::InvalidOptions { .. }));
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("library.csv");

    library().save(&path).unwrap();
    assert!(path.exists());
    assert!(!dir.path().join("nested").join("library.csv.tmp").exists());

    let mut store = Store::new();
    let loaded = store.load(&path, &registry()).unwrap();
    assert_eq!(loaded.len(), 3);

    // Saving again replaces the file instead of appending to it.
    library().save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    let mut store = Store::new();
    let err = store.load(&path, &registry()).unwrap_err();
    match err {
        StoreError::File {
            operation,
            path: failed,
            ..
        } => {
            assert_eq!(operation, "open");
            assert_eq!(failed, path);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_read_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.csv");
    library().save(&path).unwrap();

    let columns = read_header(&path, &CodecOptions::default()).unwrap();
    assert_eq!(columns, vec!["Artist", "Author", "ClassID", "Title", "Year"]);

    std::fs::write(&path, "").unwrap();
    let err = read_header(&path, &CodecOptions::default()).unwrap_err();
    assert!(matches!(err, StoreError::EmptySource));
}

#[test]
fn test_invalid_options_save_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("library.csv");

    let mut store = Store::with_options(CodecOptions::new().with_delimiter('"'));
    store.add(book("Krakatit", "Capek"));
    let err = store.save(&path).unwrap_err();

    assert!(matches!(err, StoreError::InvalidOptions { .. }));
    assert!(!dir.path().join("nested").exists());
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.csv");
    // A non-empty directory in place of the target makes the rename fail.
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "").unwrap();

    let err = library().save(&path).unwrap_err();

    assert!(matches!(
        err,
        StoreError::File {
            operation: "rename",
            ..
        }
    ));
    assert!(!dir.path().join("library.csv.tmp").exists());
    assert!(path.join("keep").exists());
}
