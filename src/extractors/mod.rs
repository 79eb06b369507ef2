pub mod class;
pub mod method;
pub mod property;

use regex::Regex;

use crate::config::Config;
use crate::parser::search_pattern;
use crate::parser::types::SourceFile;
use crate::types::{Tag, TagKind};

/// Produces child tags (members of the file's component) in line order.
pub trait ChildExtractor: Send + Sync {
    fn extract(&self, file: &SourceFile) -> Vec<Tag>;
}

pub fn child_extractors(config: &Config) -> Vec<Box<dyn ChildExtractor>> {
    let mut extractors: Vec<Box<dyn ChildExtractor>> = Vec::new();

    if config.extractors.methods {
        extractors.push(Box::new(method::MethodExtractor));
    }
    if config.extractors.properties {
        extractors.push(Box::new(property::PropertyExtractor));
    }

    extractors
}

/// One tag per line matching `regex`; capture group 1 is the tag name and
/// the whole line (indentation included) becomes the pattern.
pub(crate) fn matching_lines(
    file: &SourceFile,
    regex: &Regex,
    kind: impl Fn(String) -> TagKind,
) -> Vec<Tag> {
    file.raw_lines
        .iter()
        .filter_map(|line| {
            let name = regex.captures(line)?.get(1)?.as_str();
            Some(Tag {
                name: name.to_string(),
                file: file.path.clone(),
                pattern: search_pattern(line),
                kind: kind(file.component.clone()),
            })
        })
        .collect()
}
