//! Output templates, kept as stand-alone files and included as string constants.
//!
//! Templates are minijinja, rendered through `outstanding`. Layout math (column widths,
//! padding) happens in Rust; templates only place pre-computed cells and pick styles.
//! Line breaks are explicit in each template.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
