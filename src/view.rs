//! View name/id tables and mask derivation.
//!
//! A view is a named subset of a module's debuggable fields, identified by
//! a small integer id and selected through a bitmask. Each module declares
//! one immutable table mapping human-readable view names to ids; the engine
//! resolves command arguments against it and formats ids back into names
//! for header lines.
//!
//! Tables are process-wide read-only configuration: defined once, never
//! mutated, never torn down. Name uniqueness is a caller contract - the
//! scan is first-match-wins and no duplicate validation is performed.

/// Numeric identifier of a view.
///
/// Ids must fit the width of [`ViewMask`], i.e. 0..=31.
pub type ViewId = u8;

/// Bitmask selecting fields by view: bit `i` set means "visible under view
/// id `i`".
pub type ViewMask = u32;

/// Fallback name returned when an id has no entry in the table.
pub const VIEW_NAME_FALLBACK: &str = "unknown";

/// Derive the mask bit for a view id.
pub const fn view_bit(view: ViewId) -> ViewMask {
    1 << view
}

/// One entry of a module's view table.
///
/// # Examples
///
/// ```rust
/// use libmon::view::ViewEntry;
///
/// const VIEWS: &[ViewEntry] = &[
///     ViewEntry { name: "full", id: 0 },
///     ViewEntry { name: "state", id: 1 },
///     ViewEntry { name: "thermal", id: 2 },
/// ];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEntry {
    /// The view name as typed by the operator. Unique within a table.
    pub name: &'static str,
    /// The view id the name resolves to.
    pub id: ViewId,
}

/// Resolve a view name against a table.
///
/// Linear scan, first match wins. Returns `None` when no entry matches.
///
/// # Examples
///
/// ```rust
/// use libmon::view::{ViewEntry, parse_view_name};
///
/// const VIEWS: &[ViewEntry] = &[
///     ViewEntry { name: "full", id: 0 },
///     ViewEntry { name: "state", id: 1 },
/// ];
///
/// assert_eq!(parse_view_name("state", VIEWS), Some(1));
/// assert_eq!(parse_view_name("bogus", VIEWS), None);
/// ```
pub fn parse_view_name(arg: &str, table: &[ViewEntry]) -> Option<ViewId> {
    table
        .iter()
        .find(|entry| entry.name == arg)
        .map(|entry| entry.id)
}

/// Format a view id back into its name.
///
/// Returns [`VIEW_NAME_FALLBACK`] when the id has no entry, e.g. an id
/// produced outside the table.
pub fn view_name(view: ViewId, table: &[ViewEntry]) -> &'static str {
    table
        .iter()
        .find(|entry| entry.id == view)
        .map_or(VIEW_NAME_FALLBACK, |entry| entry.name)
}
