use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
    Class,
    Method { parent: String },
    Variable { parent: String },
}

impl TagKind {
    /// Single-letter kind as written to the tags file.
    pub fn letter(&self) -> char {
        match self {
            TagKind::Class => 'c',
            TagKind::Method { .. } => 'm',
            TagKind::Variable { .. } => 'v',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Class => "class",
            TagKind::Method { .. } => "method",
            TagKind::Variable { .. } => "variable",
        }
    }

    pub fn parent(&self) -> Option<&str> {
        match self {
            TagKind::Class => None,
            TagKind::Method { parent } | TagKind::Variable { parent } => Some(parent),
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub file: PathBuf,
    pub pattern: String,
    pub kind: TagKind,
}

/// Tab-separated tags-file line, without the terminating newline.
impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.name,
            self.file.display(),
            self.pattern,
            self.kind.letter()
        )?;
        if let Some(parent) = self.kind.parent() {
            write!(f, "\tclass:{parent}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TagSet {
    pub tags: Vec<Tag>,
}

impl TagSet {
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn class_count(&self) -> usize {
        self.tags
            .iter()
            .filter(|t| t.kind == TagKind::Class)
            .count()
    }

    pub fn method_count(&self) -> usize {
        self.tags
            .iter()
            .filter(|t| matches!(t.kind, TagKind::Method { .. }))
            .count()
    }

    pub fn variable_count(&self) -> usize {
        self.tags
            .iter()
            .filter(|t| matches!(t.kind, TagKind::Variable { .. }))
            .count()
    }

    /// Full tags-file content: tag lines joined by `\n`, with no newline
    /// after the last one. No tags gives "".
    pub fn to_tags_file(&self) -> String {
        self.tags
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
