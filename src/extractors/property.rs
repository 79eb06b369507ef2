use regex::Regex;
use std::sync::LazyLock;

use crate::parser::types::SourceFile;
use crate::types::{Tag, TagKind};

use super::{matching_lines, ChildExtractor};

static PROPERTY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:readonly|default|required)\s+)*property\s+[\w.<>]+\s+([A-Za-z_]\w*)",
    )
    .unwrap()
});

pub struct PropertyExtractor;

impl ChildExtractor for PropertyExtractor {
    fn extract(&self, file: &SourceFile) -> Vec<Tag> {
        matching_lines(file, &PROPERTY_DECL, |parent| TagKind::Variable { parent })
    }
}
