use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Component, Path, PathBuf};

use crate::config::Config;

/// Files under `root` matching the config's `include` globs, minus `ignore`
/// and hidden entries, sorted. Paths keep `root` as their prefix, except a
/// bare `.` which is dropped so discovery from the working directory yields
/// `dir/File.qml`.
pub fn scan(root: &Path, config: &Config) -> Vec<PathBuf> {
    let ignore_set = build_glob_set(&config.ignore, true);
    let include_set = include_glob_set(config);
    let mut files = Vec::new();
    walk_dir(root, root, &ignore_set, &include_set, &mut files);
    files.sort();
    files
}

/// Include globs match case-sensitively: a discovered `Foo.QML` would not be
/// treated as a component file and must not be picked up either.
pub(crate) fn include_glob_set(config: &Config) -> GlobSet {
    build_glob_set(&config.include, false)
}

pub(crate) fn build_glob_set(patterns: &[String], case_insensitive: bool) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    patterns
        .iter()
        .filter_map(|p| match GlobBuilder::new(p).case_insensitive(case_insensitive).build() {
            Ok(glob) => Some(glob),
            Err(e) => {
                tracing::warn!("ignoring invalid glob '{p}': {e}");
                None
            }
        })
        .for_each(|glob| {
            builder.add(glob);
        });
    builder.build().unwrap_or_default()
}

pub(crate) fn matches_glob(path: &Path, root: &Path, set: &GlobSet) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| set.is_match(name))
        || path.strip_prefix(root).is_ok_and(|rel| set.is_match(rel))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn without_cur_dir(path: PathBuf) -> PathBuf {
    let mut components = path.components();
    if components.next() == Some(Component::CurDir) {
        components.as_path().to_path_buf()
    } else {
        path
    }
}

fn walk_dir(
    dir: &Path,
    root: &Path,
    ignore: &GlobSet,
    include: &GlobSet,
    files: &mut Vec<PathBuf>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::debug!("skipping unreadable directory {}", dir.display());
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if is_hidden(&path) || matches_glob(&path, root, ignore) {
            continue;
        }

        if path.is_dir() {
            walk_dir(&path, root, ignore, include, files);
        } else if matches_glob(&path, root, include) {
            files.push(without_cur_dir(path));
        }
    }
}
