use crate::error::{Result, ToolError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find an executable named `name` (or `name.exe`) anywhere under `dir`.
pub fn find_binary(dir: &Path, name: &str) -> Option<PathBuf> {
    let exe = format!("{name}.exe");
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .find(|e| {
            let f = e.file_name().to_string_lossy();
            f == name || f.eq_ignore_ascii_case(&exe)
        })
        .map(|e| e.into_path())
}

/// Copy `src` into `dir` under its own file name; returns the file name.
pub fn copy_into(src: &Path, dir: &Path) -> Result<String> {
    let name = src
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ToolError::invalid(format!("Not a file path: {}", src.display())))?;
    fs::copy(src, dir.join(&name))?;
    Ok(name)
}

pub fn remove_dir_if_exists(p: &Path) -> Result<()> {
    if p.exists() {
        fs::remove_dir_all(p)?;
    }
    Ok(())
}
