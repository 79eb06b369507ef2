//! Regenerate the tags file whenever watched QML sources change.
//!
//! Every regeneration is a full batch run; nothing is patched incrementally.

use anyhow::{bail, Result};
use globset::GlobSet;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::types::TagSet;

use super::scanner::{include_glob_set, matches_glob};

/// What a watch session regenerates and from where.
#[derive(Debug, Clone)]
pub struct WatchTarget {
    /// Files named on the command line; empty means "discover under `root`".
    pub inputs: Vec<PathBuf>,
    pub root: PathBuf,
    pub output: PathBuf,
    /// Globs deciding which changes matter while discovering.
    include: GlobSet,
}

impl WatchTarget {
    pub fn new(inputs: Vec<PathBuf>, root: PathBuf, output: PathBuf, config: &Config) -> Self {
        Self {
            inputs,
            root,
            output,
            include: include_glob_set(config),
        }
    }

    /// Directories to register: the discovery root, or the parent of each
    /// explicit input.
    pub fn directories(&self) -> Vec<PathBuf> {
        if self.inputs.is_empty() {
            return vec![absolute(&self.root)];
        }
        let dirs: BTreeSet<PathBuf> = self
            .inputs
            .iter()
            .map(|input| match input.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => absolute(parent),
                _ => absolute(Path::new(".")),
            })
            .collect();
        dirs.into_iter().collect()
    }

    /// Whether a change to `path` calls for a new run.
    pub fn is_relevant(&self, path: &Path) -> bool {
        let path = absolute(path);
        if path == absolute(&self.output) {
            return false;
        }
        if self.inputs.is_empty() {
            matches_glob(&path, &absolute(&self.root), &self.include)
        } else {
            self.inputs.iter().any(|input| absolute(input) == path)
        }
    }

    fn event_is_relevant(&self, event: &notify::Result<Event>) -> bool {
        match event {
            Ok(event) => {
                !matches!(event.kind, EventKind::Access(_))
                    && event.paths.iter().any(|p| self.is_relevant(p))
            }
            Err(e) => {
                warn!("watch error: {e}");
                false
            }
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Block forever, re-running [`super::generate`] after each burst of
/// relevant changes and handing the result to `report`. Failures of a
/// re-run are logged; the session keeps going.
pub fn watch(
    target: &WatchTarget,
    config: &Config,
    mut report: impl FnMut(&TagSet),
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;

    let mut registered = 0;
    for dir in target.directories() {
        match watcher.watch(&dir, RecursiveMode::Recursive) {
            Ok(()) => {
                info!("watching {}", dir.display());
                registered += 1;
            }
            Err(e) => warn!("cannot watch {}: {e}", dir.display()),
        }
    }
    if registered == 0 {
        bail!("No directory could be watched");
    }

    let debounce = Duration::from_millis(config.watch.debounce_ms);
    loop {
        let Ok(first) = rx.recv() else {
            return Ok(());
        };
        let mut relevant = target.event_is_relevant(&first);
        loop {
            match rx.recv_timeout(debounce) {
                Ok(event) => relevant |= target.event_is_relevant(&event),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }
        if !relevant {
            debug!("ignoring unrelated file system events");
            continue;
        }

        let paths = super::collect_paths(&target.inputs, &target.root, config);
        match super::generate(&paths, &target.output, config) {
            Ok(set) => report(&set),
            Err(e) => warn!("tags not regenerated: {e:#}"),
        }
    }
}
