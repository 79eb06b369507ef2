use owo_colors::{OwoColorize, Stream};
use std::path::Path;

use crate::types::TagSet;

pub fn render(set: &TagSet, output: &Path) {
    println!("{}", summary_line(set, output));

    if set.is_empty() {
        return;
    }
    let breakdown = format!(
        "  {} classes, {} methods, {} variables",
        set.class_count(),
        set.method_count(),
        set.variable_count()
    );
    println!(
        "{}",
        breakdown.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

fn summary_line(set: &TagSet, output: &Path) -> String {
    let count = set.len();
    format!(
        "Writing {} tags to '{}'...",
        count.if_supports_color(Stream::Stdout, |t| t.bold()),
        output.display()
    )
}
