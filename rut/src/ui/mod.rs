//! Terminal presentation: colors, status messages, tables and summaries.

pub mod output_format;
pub mod theme;
