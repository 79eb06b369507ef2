pub const AVAILABLE_KINDS: &[(char, &str, &str)] = &[
    (
        'c',
        "class",
        "Component defined by a .qml file, named after the file",
    ),
    (
        'm',
        "method",
        "`function name(...) {` definition inside a component",
    ),
    (
        'v',
        "variable",
        "`property <type> name` declaration inside a component",
    ),
];

pub fn list_kinds() -> String {
    let mut out = String::from("Tag kinds:\n\n");
    for (letter, name, desc) in AVAILABLE_KINDS {
        out.push_str(&format!("  {letter}  {name:<10} {desc}\n"));
    }
    out.push_str("\nMethod and variable tags carry their component as 'class:<Name>'.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TagKind;

    #[test]
    fn test_list_kinds_contains_all() {
        let listing = list_kinds();
        for (letter, name, desc) in AVAILABLE_KINDS {
            assert!(listing.contains(&format!("{letter}  {name}")));
            assert!(listing.contains(desc), "Listing should describe {name}");
        }
    }

    #[test]
    fn test_kinds_match_tag_kinds() {
        let parent = || "X".to_string();
        let kinds = [
            TagKind::Class,
            TagKind::Method { parent: parent() },
            TagKind::Variable { parent: parent() },
        ];
        for (kind, (letter, name, _)) in kinds.iter().zip(AVAILABLE_KINDS) {
            assert_eq!(kind.letter(), *letter);
            assert_eq!(kind.name(), *name);
        }
    }
}
