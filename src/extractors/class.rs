use anyhow::bail;

use crate::parser::search_pattern;
use crate::parser::types::SourceFile;
use crate::types::{Tag, TagKind};

/// Tag for the component a `.qml` file defines. The first line holding an
/// opening brace is taken as the component's declaration.
///
/// A file without any brace has no component and the whole run has to stop,
/// so this returns an error rather than an empty result.
pub fn class_tag(file: &SourceFile) -> anyhow::Result<Tag> {
    let Some(line) = file.raw_lines.iter().find(|l| l.contains('{')) else {
        bail!("No main component found in {}", file.path.display());
    };

    Ok(Tag {
        name: file.component.clone(),
        file: file.path.clone(),
        pattern: search_pattern(line.trim()),
        kind: TagKind::Class,
    })
}
