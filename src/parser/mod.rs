pub mod types;

use anyhow::Context;
use std::path::Path;

use types::SourceFile;

pub const QML_EXTENSION: &str = "qml";

pub(crate) fn is_qml_path(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(QML_EXTENSION)
}

/// File name up to its first dot, so compound suffixes like `.ui.qml` go away
/// in one piece. A leading dot (hidden file) is part of the name.
pub fn component_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let body_start = usize::from(file_name.starts_with('.'));
    let first_dot = file_name[body_start..].find('.');
    match first_dot {
        Some(dot) => file_name[..body_start + dot].to_string(),
        None => file_name.into_owned(),
    }
}

/// Wrap a source line into an anchored ex search command, escaping the
/// delimiter and the escape character itself.
pub fn search_pattern(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len() + 8);
    for c in line.chars() {
        if c == '\\' || c == '/' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("/^{escaped}$/;\"")
}

pub(crate) fn read_source(path: &Path) -> anyhow::Result<SourceFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw_lines: Vec<String> = content.lines().map(String::from).collect();

    Ok(SourceFile {
        path: path.to_path_buf(),
        component: component_name(path),
        raw_lines,
    })
}
