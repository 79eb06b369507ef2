pub mod scanner;
pub mod watch;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::extractors::{self, class::class_tag};
use crate::parser;
use crate::types::TagSet;

/// Explicit paths win; with none, every file the config includes under `root`.
pub fn collect_paths(explicit: &[PathBuf], root: &Path, config: &Config) -> Vec<PathBuf> {
    if explicit.is_empty() {
        let found = scanner::scan(root, config);
        debug!("discovered {} files under {}", found.len(), root.display());
        found
    } else {
        explicit.to_vec()
    }
}

/// Tag every file in order. Class tags of all `.qml` files come first, then
/// each file's method and property tags. The first file without a component
/// fails the whole batch.
pub fn run(paths: &[PathBuf], config: &Config) -> Result<TagSet> {
    let child_extractors = extractors::child_extractors(config);
    let mut classes = Vec::new();
    let mut children = Vec::new();

    for path in paths {
        let source = parser::read_source(path)?;
        if source.is_qml() {
            classes.push(class_tag(&source)?);
        }
        let before = children.len();
        for extractor in &child_extractors {
            children.extend(extractor.extract(&source));
        }
        debug!(
            "{}: {} member tags",
            path.display(),
            children.len() - before
        );
    }

    classes.extend(children);
    Ok(TagSet { tags: classes })
}

/// Replace `output` with the tags of `set`.
pub fn write_tags(set: &TagSet, output: &Path) -> Result<()> {
    std::fs::write(output, set.to_tags_file())
        .with_context(|| format!("Failed to write tags to {}", output.display()))
}

/// Collect first, write after, so a failing file leaves any previous tags
/// file untouched.
pub fn generate(paths: &[PathBuf], output: &Path, config: &Config) -> Result<TagSet> {
    let set = run(paths, config)?;
    write_tags(&set, output)?;
    info!("wrote {} tags to {}", set.len(), output.display());
    Ok(set)
}
