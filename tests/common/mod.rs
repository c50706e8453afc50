#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Once;
use zip::write::SimpleFileOptions;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn dos_stamp(y: u16, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> zip::DateTime {
    zip::DateTime::from_date_and_time(y, mo, d, h, mi, s).expect("valid DOS date")
}

/// Write a zip at `path`. Every entry gets `stamp` as its stored time.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])], stamp: zip::DateTime) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut writer = zip::ZipWriter::new(fs::File::create(path).unwrap());
    for (name, content) in entries {
        let options = SimpleFileOptions::default().last_modified_time(stamp);
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

pub fn write_roster(path: &Path, rows: &[(&str, &str, &str, &str)]) {
    let mut text = String::from("name,student_id,class,team\n");
    for (name, id, class_name, team) in rows {
        text.push_str(&format!("\"{name}\",{id},{class_name},{team}\n"));
    }
    fs::write(path, text).unwrap();
}
