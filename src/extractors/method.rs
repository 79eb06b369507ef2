use regex::Regex;
use std::sync::LazyLock;

use crate::parser::types::SourceFile;
use crate::types::{Tag, TagKind};

use super::{matching_lines, ChildExtractor};

// `function name(args) {`, with an optional return type annotation. The
// parameter list runs to the last `)` so default arguments may nest parens.
static FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*function\s+([A-Za-z_$][\w$]*)\s*\(.*\)\s*(?::\s*[\w.<>]+\s*)?\{").unwrap()
});

pub struct MethodExtractor;

impl ChildExtractor for MethodExtractor {
    fn extract(&self, file: &SourceFile) -> Vec<Tag> {
        matching_lines(file, &FUNCTION_DEF, |parent| TagKind::Method { parent })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn extract(lines: &[&str]) -> Vec<Tag> {
        let file = SourceFile {
            path: PathBuf::from("test/TheWindow.qml"),
            component: "TheWindow".to_string(),
            raw_lines: lines.iter().map(|l| l.to_string()).collect(),
        };
        MethodExtractor.extract(&file)
    }

    #[test]
    fn test_function_definitions() {
        let tags = extract(&[
            "ApplicationWindow {",
            "    function doNothing() {}",
            "    function doLess(argument) {}",
            "    Rectangle {",
            "        function nested() {}",
            "    }",
            "}",
        ]);
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["doNothing", "doLess", "nested"]);
        assert_eq!(tags[2].pattern, "/^        function nested() {}$/;\"");
        assert!(tags.iter().all(|t| t.kind
            == TagKind::Method {
                parent: "TheWindow".to_string()
            }));
    }

    #[test]
    fn test_typed_function() {
        let tags = extract(&["    function area(w: real, h: real): real {"]);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "area");
    }

    #[test]
    fn test_nested_parens_in_parameters() {
        let tags = extract(&[
            "Item {",
            "    function f(a = g()) {}",
            "    function h(cb = (x) => x) {",
            "    }",
            "}",
        ]);
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["f", "h"]);
        assert_eq!(tags[1].pattern, "/^    function h(cb = (x) => x) {$/;\"");
    }

    #[test]
    fn test_non_definitions_ignored() {
        let tags = extract(&[
            "    onClicked: doNothing()",
            "    // function commented() {}",
            "    property var callback: function() {}",
            "    function",
            "    functionality: 3",
        ]);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_brace_on_next_line_not_matched() {
        let tags = extract(&["    function later(a, b)", "    {", "    }"]);
        assert!(tags.is_empty());
    }
}
