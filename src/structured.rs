//! Structured field engine.
//!
//! In structured mode the engine captures a full snapshot of module state
//! once per print, then walks a declarative field table that formats each
//! selected value out of that snapshot. The capture callback is the only
//! place module-specific state crosses into the engine; it is expected to
//! synchronize internally (e.g. copy under a lock), since the engine never
//! holds a lock across the snapshot's lifetime.
//!
//! Each field pairs a symbolic accessor with its view mask and printer, so
//! one generic printer set serves heterogeneous snapshot layouts without
//! per-field glue code. The snapshot is a plain value: zero-initialized via
//! `Default`, owned by the print operation, dropped after printing.

use core::fmt;

use crate::command::{print_usage, run_command};
use crate::error::Error;
use crate::field::print_header;
use crate::platform::Platform;
use crate::view::{VIEW_NAME_FALLBACK, ViewId, ViewMask, view_bit};

/// One structured-mode field descriptor.
///
/// Static, defined once per module, never mutated. The printer receives the
/// field name and the snapshot and emits one formatted line. The
/// [`snapshot_field_f32!`], [`snapshot_field_bool!`], [`snapshot_field_u8!`]
/// and [`snapshot_field_custom!`] macros build entries whose name is the
/// snapshot member itself.
///
/// [`snapshot_field_f32!`]: crate::snapshot_field_f32
/// [`snapshot_field_bool!`]: crate::snapshot_field_bool
/// [`snapshot_field_u8!`]: crate::snapshot_field_u8
/// [`snapshot_field_custom!`]: crate::snapshot_field_custom
pub struct Field<S> {
    /// Field name as printed before the `=`.
    pub name: &'static str,
    /// Views this field is visible under, one bit per view id.
    pub view_mask: ViewMask,
    /// Extracts the value from the snapshot and emits the formatted line.
    pub print: fn(&mut dyn Platform, &str, &S),
}

impl<S> Clone for Field<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Field<S> {}

impl<S> fmt::Debug for Field<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("view_mask", &self.view_mask)
            .finish_non_exhaustive()
    }
}

/// Structured-mode configuration for one module.
///
/// One instance per module, effectively immutable. `O` is the owning module
/// type, `S` the snapshot type.
pub struct Provider<O, S: 'static> {
    /// Module name printed in the header line.
    pub module_name: &'static str,
    /// View-help string shown in the usage block, e.g. `"full|state"`.
    pub view_help: &'static str,
    /// Resolves a view-name argument for this module.
    pub parse_view: fn(&str) -> Option<ViewId>,
    /// Formats a view id for the header line; the header falls back to
    /// `"unknown"` when absent.
    pub view_to_string: Option<fn(ViewId) -> &'static str>,
    /// Copies the owner's current state into the snapshot.
    pub capture: fn(&O, &mut S),
    /// Field descriptor table.
    pub fields: &'static [Field<S>],
}

impl<O, S> fmt::Debug for Provider<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("module_name", &self.module_name)
            .field("view_help", &self.view_help)
            .finish_non_exhaustive()
    }
}

/// Execute one debug-command invocation against a structured provider.
///
/// Wires [`run_command`] with the provider's callbacks and a `print_once`
/// that captures a fresh snapshot, emits the header line and prints every
/// field selected by the view under the same full-view-or-mask rule as the
/// live engine.
pub fn run_structured_command<O, S: Default>(
    io: &mut dyn Platform,
    owner: &O,
    provider: &Provider<O, S>,
    args: &[&str],
    default_view: ViewId,
) -> Result<(), Error> {
    let usage = |io: &mut dyn Platform| print_usage(io, provider.view_help);

    let print_once = |io: &mut dyn Platform, view: ViewId| {
        let mut snapshot = S::default();
        (provider.capture)(owner, &mut snapshot);

        let current_view_name = match provider.view_to_string {
            Some(view_to_string) => view_to_string(view),
            None => VIEW_NAME_FALLBACK,
        };
        print_header(io, provider.module_name, current_view_name);

        let is_full_view = view == default_view;
        let selected_mask = view_bit(view);
        for field in provider.fields {
            if !is_full_view && field.view_mask & selected_mask == 0 {
                continue;
            }
            (field.print)(&mut *io, field.name, &snapshot);
        }
    };

    run_command(
        io,
        args,
        default_view,
        provider.parse_view,
        print_once,
        usage,
    )
}

/// Build a [`Field`] printing snapshot member `$member` as an `f32` to 4
/// decimal places. The printed name is the member name.
///
/// ```rust
/// use libmon::snapshot_field_f32;
/// use libmon::structured::Field;
/// use libmon::view::view_bit;
///
/// #[derive(Default)]
/// struct Snapshot { speed_rpm: f32 }
///
/// static FIELDS: &[Field<Snapshot>] =
///     &[snapshot_field_f32!(Snapshot, speed_rpm, view_bit(1))];
/// ```
///
/// [`Field`]: crate::structured::Field
#[macro_export]
macro_rules! snapshot_field_f32 {
    ($snapshot:ty, $member:ident, $mask:expr) => {
        $crate::structured::Field::<$snapshot> {
            name: stringify!($member),
            view_mask: $mask,
            print: |io: &mut dyn $crate::platform::Platform, name: &str, snapshot: &$snapshot| {
                $crate::field::print_f32_value(io, name, snapshot.$member);
            },
        }
    };
}

/// Build a [`Field`] printing snapshot member `$member` as a `bool`. The
/// printed name is the member name.
///
/// [`Field`]: crate::structured::Field
#[macro_export]
macro_rules! snapshot_field_bool {
    ($snapshot:ty, $member:ident, $mask:expr) => {
        $crate::structured::Field::<$snapshot> {
            name: stringify!($member),
            view_mask: $mask,
            print: |io: &mut dyn $crate::platform::Platform, name: &str, snapshot: &$snapshot| {
                $crate::field::print_bool_value(io, name, snapshot.$member);
            },
        }
    };
}

/// Build a [`Field`] printing snapshot member `$member` as a `u8`. The
/// printed name is the member name.
///
/// [`Field`]: crate::structured::Field
#[macro_export]
macro_rules! snapshot_field_u8 {
    ($snapshot:ty, $member:ident, $mask:expr) => {
        $crate::structured::Field::<$snapshot> {
            name: stringify!($member),
            view_mask: $mask,
            print: |io: &mut dyn $crate::platform::Platform, name: &str, snapshot: &$snapshot| {
                $crate::field::print_u8_value(io, name, snapshot.$member);
            },
        }
    };
}

/// Build a [`Field`] for snapshot member `$member` with a custom printer
/// function. The printed name is the member name.
///
/// [`Field`]: crate::structured::Field
#[macro_export]
macro_rules! snapshot_field_custom {
    ($snapshot:ty, $member:ident, $mask:expr, $printer:expr) => {
        $crate::structured::Field::<$snapshot> {
            name: stringify!($member),
            view_mask: $mask,
            print: $printer,
        }
    };
}
