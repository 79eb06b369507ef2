use serde::Serialize;
use std::path::Path;

use crate::types::TagSet;

#[derive(Serialize)]
struct JsonOutput {
    output: String,
    tags: usize,
    classes: usize,
    methods: usize,
    variables: usize,
}

fn build_output(set: &TagSet, output: &Path) -> JsonOutput {
    JsonOutput {
        output: output.display().to_string(),
        tags: set.len(),
        classes: set.class_count(),
        methods: set.method_count(),
        variables: set.variable_count(),
    }
}

pub fn render(set: &TagSet, output: &Path) {
    let summary = build_output(set, output);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("failed to serialize summary: {e}"),
    }
}
