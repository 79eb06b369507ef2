use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path exactly as it was handed to the run; written verbatim into tags.
    pub path: PathBuf,
    /// Base name without its (possibly compound) extension.
    pub component: String,
    pub raw_lines: Vec<String>,
}

impl SourceFile {
    pub fn is_qml(&self) -> bool {
        super::is_qml_path(&self.path)
    }
}
