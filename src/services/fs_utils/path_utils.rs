use std::ffi::{OsStr, OsString};
use std::path::{Component, Path};

/// Join the normal components of a relative path with `_`.
///
/// Used to give every backed-up archive a unique flat name:
/// `a/b/c.zip` → `a_b_c.zip`.
pub fn flatten_relative_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// `base_N.ext` for `name` = `base.ext`; the extension follows the last dot,
/// and dot-files such as `.env` have no extension.
pub fn suffixed_name(name: impl AsRef<OsStr>, counter: usize) -> OsString {
    let name = name.as_ref();
    let path = Path::new(name);

    let mut out = path.file_stem().unwrap_or(name).to_os_string();
    out.push(format!("_{counter}"));
    if let Some(ext) = path.extension() {
        out.push(".");
        out.push(ext);
    }
    out
}
