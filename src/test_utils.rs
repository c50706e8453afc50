use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Once;
use zip::write::SimpleFileOptions;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A zip entry fixture: path inside the archive, content, stored timestamp.
#[derive(Clone, Copy)]
pub struct ZipFixture<'a> {
    pub name: &'a str,
    pub content: &'a [u8],
    pub modified: (u16, u8, u8, u8, u8, u8),
}

impl<'a> ZipFixture<'a> {
    pub fn new(name: &'a str, content: &'a [u8]) -> Self {
        Self {
            name,
            content,
            modified: (2021, 3, 14, 15, 9, 26),
        }
    }

    pub fn at(mut self, modified: (u16, u8, u8, u8, u8, u8)) -> Self {
        self.modified = modified;
        self
    }

    pub fn stamp(&self) -> zip::DateTime {
        let (y, mo, d, h, mi, s) = self.modified;
        zip::DateTime::from_date_and_time(y, mo, d, h, mi, s).expect("valid DOS date")
    }
}

/// Write a zip archive at `path` containing `entries`.
pub fn write_zip(path: &Path, entries: &[ZipFixture<'_>]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);

    for entry in entries {
        let options = SimpleFileOptions::default().last_modified_time(entry.stamp());
        if entry.name.ends_with('/') {
            writer.add_directory(entry.name, options).unwrap();
        } else {
            writer.start_file(entry.name, options).unwrap();
            writer.write_all(entry.content).unwrap();
        }
    }
    writer.finish().unwrap();
}

/// Read a zip file's bytes, for nesting one archive inside another.
pub fn zip_bytes(entries: &[ZipFixture<'_>]) -> Vec<u8> {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("inner.zip");
    write_zip(&path, entries);
    fs::read(path).unwrap()
}
