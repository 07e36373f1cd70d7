//! Breadcrumb engine module
//!
//! This module provides the extractor that walks upward from a cursor
//! row and collects one breadcrumb per strictly decreasing indentation
//! level, approximating the nesting hierarchy of indentation-based
//! source text without parsing it.

use crate::buffer::{RopeBuffer, TextBuffer};
use crate::config::{ConfigError, Settings, TrailConfig};
use crate::indent::{is_blank, measure_indentation};
use crate::models::{Breadcrumb, TrailReport};
use crate::trim::{fair_trim, truncate_chars};
use regex::Regex;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Maximum characters of a line considered for pattern matching.
/// Bounds the per-line cost on pathological single-line files.
const MATCH_WINDOW: usize = 512;

/// Extraction errors
#[derive(Error, Debug)]
pub enum TrailError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Breadcrumb extractor for one configuration.
///
/// Construction validates and compiles the breadcrumb pattern; the
/// extraction itself is pure and re-entrant, so one extractor can serve
/// any number of queries against immutable buffer snapshots.
pub struct TrailExtractor {
    config: TrailConfig,
    pattern: Regex,
}

impl TrailExtractor {
    /// Create an extractor, validating the configuration.
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pattern = config.compile_pattern()?;
        Ok(Self { config, pattern })
    }

    /// The configuration this extractor was built from.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Collect the untrimmed breadcrumb trail for `cursor_row`,
    /// outermost ancestor first.
    ///
    /// Returns an empty trail when the row is past the buffer end (no
    /// cursor) or when a blank cursor region reaches the top of the
    /// buffer without finding non-blank content.
    pub fn collect<B: TextBuffer + ?Sized>(&self, buffer: &B, cursor_row: usize) -> Vec<Breadcrumb> {
        let line_count = buffer.line_count();
        if cursor_row >= line_count {
            return Vec::new();
        }

        let tab_size = self.config.tab_size;
        let mut row = cursor_row as isize;

        let current = buffer.line(cursor_row).unwrap_or_default();
        let mut indentation = if is_blank(&current) {
            // Walk up through the blank region to the nearest non-blank
            // line; the +1 keeps a line at the same indentation as that
            // anchor eligible as an ancestor of the blank cursor.
            while row >= 0 && buffer.line(row as usize).is_some_and(|l| is_blank(&l)) {
                row -= 1;
            }
            if row < 0 {
                return Vec::new();
            }
            let anchor = buffer.line(row as usize).unwrap_or_default();
            measure_indentation(&anchor, tab_size, None) + 1
        } else {
            let indentation = measure_indentation(&current, tab_size, None);
            row -= 1;
            indentation
        };

        let mut crumbs = Vec::new();
        while row >= 0 && indentation > 0 {
            let line = buffer.line(row as usize).unwrap_or_default();
            if !is_blank(&line) {
                // Only whether the line sits strictly left of the current
                // level matters, so the measurement can stop there.
                let line_indentation = measure_indentation(&line, tab_size, Some(indentation));
                if line_indentation < indentation {
                    indentation = line_indentation;
                    if let Some(text) = self.extract_fragment(&line) {
                        crumbs.push(Breadcrumb::new(text, row as usize, line_indentation));
                    }
                }
            }
            row -= 1;
        }

        crumbs.reverse();
        crumbs
    }

    /// Compute the trail for `cursor_row`, fair-trimming it into the
    /// total length budget when `shorten` is set.
    pub fn trail<B: TextBuffer + ?Sized>(
        &self,
        buffer: &B,
        cursor_row: usize,
        shorten: bool,
    ) -> Vec<Breadcrumb> {
        let mut crumbs = self.collect(buffer, cursor_row);
        if shorten {
            fair_trim(
                &mut crumbs,
                self.config.separator.chars().count(),
                self.config.total_length_limit,
            );
        }
        crumbs
    }

    /// Extract the breadcrumb text from one ancestor line.
    ///
    /// The pattern is searched in a bounded window starting at the first
    /// non-whitespace character; the `name` capture, truncated to the
    /// fragment limit, becomes the breadcrumb. An absent match or an
    /// empty capture yields no breadcrumb.
    fn extract_fragment(&self, line: &str) -> Option<String> {
        let start = line
            .char_indices()
            .find(|(_, ch)| !ch.is_whitespace())
            .map(|(idx, _)| idx)?;

        let rest = &line[start..];
        let window = match rest.char_indices().nth(MATCH_WINDOW) {
            Some((idx, _)) => &rest[..idx],
            None => rest,
        };

        let captures = self.pattern.captures(window)?;
        let name = captures.name("name")?.as_str();

        let mut text = name.to_string();
        truncate_chars(&mut text, self.config.fragment_length_limit);

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Compute the breadcrumb trail for a cursor row as plain strings.
///
/// Convenience wrapper over [`TrailExtractor`] for hosts that only want
/// the ordered fragments.
pub fn compute_breadcrumbs<B: TextBuffer + ?Sized>(
    buffer: &B,
    cursor_row: usize,
    config: &TrailConfig,
    shorten: bool,
) -> Result<Vec<String>, ConfigError> {
    let extractor = TrailExtractor::new(config.clone())?;
    Ok(extractor
        .trail(buffer, cursor_row, shorten)
        .into_iter()
        .map(|c| c.text)
        .collect())
}

/// Compute a trail report for a position in a file on disk.
///
/// The effective configuration is resolved fresh from `settings` for
/// the file's path.
pub fn trail_for_file(
    path: &Path,
    row: usize,
    settings: &Settings,
    shorten: bool,
) -> Result<TrailReport, TrailError> {
    let file = File::open(path)?;
    let buffer = RopeBuffer::from_reader(BufReader::new(file))?;

    let config = settings.config_for(Some(path));
    let extractor = TrailExtractor::new(config)?;
    let crumbs = extractor.trail(&buffer, row, shorten);

    Ok(TrailReport::new(
        path.to_path_buf(),
        row,
        crumbs,
        &extractor.config().separator,
    ))
}
