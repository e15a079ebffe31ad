//! Document formatting pipeline
//!
//! Reads a document line by line (terminators included), passes each line
//! through the [`DeclarationFormatter`] and writes the results back in order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use rayon::prelude::*;

use crate::directive::DirectiveState;
use crate::format::DeclarationFormatter;
use crate::Result;

/// Where formatted output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Overwrite the source file
    InPlace,
    /// Print to stdout and leave the file alone
    Stdout,
}

/// Counts for a single document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Lines read
    pub lines: usize,
    /// Lines the formatter actually changed
    pub rewritten: usize,
}

/// Totals for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub lines: usize,
    pub rewritten: usize,
}

/// Format a document read from `input` into `output`
///
/// Each input line produces exactly one output string, written in order.
/// Unless the formatter honours directives, every line goes through
/// [`DeclarationFormatter::format_line`].
/// Fails on I/O errors and on input that is not valid UTF-8.
pub fn format_document<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    formatter: &DeclarationFormatter,
) -> Result<DocumentStats> {
    let mut stats = DocumentStats::default();
    let mut directives = formatter.honors_directives().then(DirectiveState::new);
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        let enabled = match directives.as_mut() {
            Some(state) => state.observe(&line),
            None => true,
        };
        if !enabled {
            output.write_all(line.as_bytes())?;
            continue;
        }

        let formatted = formatter.format_line(&line);
        if formatted != line.as_str() {
            stats.rewritten += 1;
        }
        output.write_all(formatted.as_bytes())?;
    }

    Ok(stats)
}

/// Format one file and either overwrite it or print it
pub fn rewrite_file(
    path: &Path,
    formatter: &DeclarationFormatter,
    mode: OutputMode,
) -> Result<DocumentStats> {
    let file =
        File::open(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut output = Vec::new();
    let stats = format_document(BufReader::new(file), &mut output, formatter)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match mode {
        OutputMode::InPlace => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        OutputMode::Stdout => {
            io::stdout()
                .lock()
                .write_all(&output)
                .with_context(|| format!("failed to write {} to stdout", path.display()))?;
        }
    }

    log::debug!(
        "{}: {} lines, {} declarations reflowed",
        path.display(),
        stats.lines,
        stats.rewritten
    );
    Ok(stats)
}

/// Process every file, stopping at the first error
///
/// `jobs == 1` processes files strictly one after another. Any other value
/// uses a rayon pool (`0` picks the thread count automatically); the pool
/// stops handing out new files once one has failed.
pub fn run(
    files: &[PathBuf],
    formatter: &DeclarationFormatter,
    mode: OutputMode,
    jobs: usize,
) -> Result<RunSummary> {
    // Concurrent stdout writes would interleave documents
    if jobs == 1 || mode == OutputMode::Stdout {
        return run_sequential(files, formatter, mode);
    }
    run_parallel(files, formatter, mode, jobs)
}

fn run_sequential(
    files: &[PathBuf],
    formatter: &DeclarationFormatter,
    mode: OutputMode,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for path in files {
        let stats = rewrite_file(path, formatter, mode)?;
        summary.files += 1;
        summary.lines += stats.lines;
        summary.rewritten += stats.rewritten;
    }
    Ok(summary)
}

fn run_parallel(
    files: &[PathBuf],
    formatter: &DeclarationFormatter,
    mode: OutputMode,
    jobs: usize,
) -> Result<RunSummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("failed to build thread pool")?;

    let file_count = AtomicUsize::new(0);
    let line_count = AtomicUsize::new(0);
    let rewrite_count = AtomicUsize::new(0);

    pool.install(|| {
        files.par_iter().try_for_each(|path| -> Result<()> {
            let stats = rewrite_file(path, formatter, mode)?;
            file_count.fetch_add(1, Ordering::Relaxed);
            line_count.fetch_add(stats.lines, Ordering::Relaxed);
            rewrite_count.fetch_add(stats.rewritten, Ordering::Relaxed);
            Ok(())
        })
    })?;

    Ok(RunSummary {
        files: file_count.load(Ordering::Relaxed),
        lines: line_count.load(Ordering::Relaxed),
        rewritten: rewrite_count.load(Ordering::Relaxed),
    })
}
