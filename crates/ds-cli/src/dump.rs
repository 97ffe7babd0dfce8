//! Streaming driver: walk, filter, parse, scan, print.
//!
//! Each file is parsed and its blocks are written and flushed before the
//! next file is opened. Read, parse and absolute-path failures end the run
//! with an error; a traversal failure is reported in the output and stops
//! the walk without failing the run.
//!
//! The exclude pattern sees walked paths lexically cleaned, so with the
//! default root `.` it is matched against `gen/g.go`, not `./gen/g.go`.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use ds_config::DumpConfig;
use ds_parser::{is_go_source, parse_go_file, scan};

use crate::walk::{build_walker, display_path, error_path, is_excluded};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpStats {
    pub files_scanned: usize,
    /// Non-directory entries matching the exclude pattern.
    pub files_excluded: usize,
    pub structs_written: usize,
    /// Set when the walk stopped on an error.
    pub walk_interrupted: bool,
}

/// Walk `config.path` and write a block for every struct found.
///
/// # Errors
/// Fails when the exclude pattern is invalid, when a Go file cannot be read,
/// parsed or made absolute, or when writing to `out` fails.
pub fn dump<W: Write>(config: &DumpConfig, out: &mut W) -> anyhow::Result<DumpStats> {
    let exclude = config.exclude_pattern()?;
    let mut stats = DumpStats::default();

    for entry in build_walker(&config.path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "stopping traversal");
                let failed = error_path(&error).unwrap_or(config.path.as_path());
                writeln!(
                    out,
                    "prevent panic by handling failure accessing a path {:?}: {error}",
                    failed.display().to_string()
                )?;
                writeln!(out, "Error walking the path: {error}")?;
                out.flush()?;
                stats.walk_interrupted = true;
                break;
            }
        };

        let path = display_path(&entry);
        let is_dir = entry.file_type().is_none_or(|ft| ft.is_dir());
        if is_excluded(exclude.as_ref(), &path) {
            tracing::debug!(path = %path.display(), "excluded");
            if !is_dir {
                stats.files_excluded += 1;
            }
            continue;
        }

        if is_dir || !is_go_source(&path) {
            continue;
        }

        stats.structs_written += dump_file(&path, out)?;
        stats.files_scanned += 1;
    }

    tracing::info!(
        files = stats.files_scanned,
        structs = stats.structs_written,
        excluded = stats.files_excluded,
        "dump finished"
    );
    Ok(stats)
}

fn dump_file<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<usize> {
    tracing::debug!(path = %path.display(), "scanning");

    let tree =
        parse_go_file(path).with_context(|| format!("failed to parse {}", path.display()))?;
    let absolute = std::path::absolute(path)
        .with_context(|| format!("failed to resolve absolute path of {}", path.display()))?;

    let decls = scan(&tree, &absolute);
    for decl in &decls {
        writeln!(out, "{decl}")?;
    }
    out.flush()?;
    Ok(decls.len())
}
