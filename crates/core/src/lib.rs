//! crumbline_core - Core library for indentation-based breadcrumbs
//!
//! This crate computes a breadcrumb trail for a cursor position inside
//! a text buffer: walking upward from the current line, it collects the
//! first line found at each strictly decreasing indentation level,
//! approximating the nesting hierarchy of indentation-based source text
//! (Python, YAML, ...) without a real parser.
//!
//! # Features
//!
//! - **Tab-aware indentation**: visual column measurement with tab-stop
//!   rounding, matching how the host buffer renders tabs.
//! - **Configurable extraction**: each ancestor line's breadcrumb text
//!   comes from a regex with a named `name` capture group.
//! - **Fair trimming**: the joined trail is fitted into a total
//!   character budget by spreading cuts evenly instead of chopping from
//!   one end.
//! - **Layered configuration**: global defaults plus glob-matched
//!   per-document overrides, resolved fresh per query.
//! - **Multiple output formats**: JSON, YAML, ANSI, and plain summary.
//!
//! # Example
//!
//! ```rust
//! use crumbline_core::{compute_breadcrumbs, TrailConfig};
//!
//! let lines = ["def f():", "    if x:", "        return 1"];
//! let config = TrailConfig::default().with_tab_size(4);
//!
//! let trail = compute_breadcrumbs(&lines[..], 2, &config, true).unwrap();
//! assert_eq!(trail, vec!["def f():".to_string(), "if x:".to_string()]);
//! ```

pub mod buffer;
pub mod config;
pub mod engine;
pub mod indent;
pub mod models;
pub mod output;
pub mod trim;

// Re-exports for convenience
pub use buffer::{RopeBuffer, TextBuffer};
pub use config::{ConfigError, ConfigOverride, Settings, TrailConfig, DEFAULT_PATTERN};
pub use engine::{compute_breadcrumbs, trail_for_file, TrailError, TrailExtractor};
pub use indent::{is_blank, measure_indentation};
pub use models::{Breadcrumb, TrailMetadata, TrailReport};
pub use output::{format_list, format_report, FormatError, OutputFormat};
pub use trim::fair_trim;
