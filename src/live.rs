//! Live field engine.
//!
//! In live mode every field carries a printer callback that reads its value
//! straight from the owning module object at print time, so no offset or
//! snapshot metadata is needed. An optional lock/unlock pair brackets
//! exactly the read-and-print window; it is the only concurrency-safety
//! mechanism this mode offers, and the two calls are a caller contract -
//! the engine invokes them explicitly rather than through a scope guard.

use core::fmt;

use crate::command::{print_usage, run_command};
use crate::error::Error;
use crate::field::print_header;
use crate::platform::Platform;
use crate::view::{ViewEntry, ViewId, ViewMask, parse_view_name, view_bit, view_name};

/// One live-mode field descriptor.
///
/// Static, defined once per module, never mutated. The printer receives the
/// field name and a reference to the owning object and is responsible for
/// extracting and formatting its own value. The [`live_field_f32!`],
/// [`live_field_bool!`], [`live_field_u8!`] and [`live_field_custom!`]
/// macros build entries with the stock printers.
///
/// [`live_field_f32!`]: crate::live_field_f32
/// [`live_field_bool!`]: crate::live_field_bool
/// [`live_field_u8!`]: crate::live_field_u8
/// [`live_field_custom!`]: crate::live_field_custom
pub struct LiveField<O> {
    /// Field name as printed before the `=`.
    pub name: &'static str,
    /// Views this field is visible under, one bit per view id.
    pub view_mask: ViewMask,
    /// Reads the value from the owner and emits the formatted line.
    pub print: fn(&mut dyn Platform, &str, &O),
}

impl<O> Clone for LiveField<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for LiveField<O> {}

impl<O> fmt::Debug for LiveField<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveField")
            .field("name", &self.name)
            .field("view_mask", &self.view_mask)
            .finish_non_exhaustive()
    }
}

/// Live-mode configuration for one module.
///
/// One instance per module, effectively immutable.
pub struct LiveProvider<'a, O> {
    /// Module name printed in the header line.
    pub module_name: &'static str,
    /// View-help string shown in the usage block, e.g. `"full|state"`.
    pub view_help: &'static str,
    /// View name/id table for this module.
    pub view_table: &'a [ViewEntry],
    /// Field descriptor table.
    pub fields: &'a [LiveField<O>],
    /// Optional lock acquired before each read-and-print window.
    pub lock: Option<fn(&O)>,
    /// Optional unlock released after each read-and-print window. Callers
    /// must supply it whenever `lock` is supplied.
    pub unlock: Option<fn(&O)>,
}

impl<O> fmt::Debug for LiveProvider<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveProvider")
            .field("module_name", &self.module_name)
            .field("view_help", &self.view_help)
            .field("view_table", &self.view_table)
            .finish_non_exhaustive()
    }
}

/// Execute one debug-command invocation against a live provider.
///
/// Wires [`run_command`] with the provider's view table, usage block and a
/// `print_once` that emits the header line followed by every field selected
/// by the view: the default ("full") view prints all fields regardless of
/// mask, any other view prints a field iff its mask contains the view's
/// bit.
pub fn run_live_command<O>(
    io: &mut dyn Platform,
    owner: &O,
    provider: &LiveProvider<'_, O>,
    args: &[&str],
    default_view: ViewId,
) -> Result<(), Error> {
    let parse_view = |arg: &str| parse_view_name(arg, provider.view_table);

    let usage = |io: &mut dyn Platform| print_usage(io, provider.view_help);

    let print_once = |io: &mut dyn Platform, view: ViewId| {
        if let Some(lock) = provider.lock {
            lock(owner);
        }

        print_header(io, provider.module_name, view_name(view, provider.view_table));

        let is_full_view = view == default_view;
        let selected_mask = view_bit(view);
        for field in provider.fields {
            if !is_full_view && field.view_mask & selected_mask == 0 {
                continue;
            }
            (field.print)(&mut *io, field.name, owner);
        }

        if let Some(unlock) = provider.unlock {
            unlock(owner);
        }
    };

    run_command(io, args, default_view, parse_view, print_once, usage)
}

/// Build a [`LiveField`] printing an `f32` read by `getter` to 4 decimal
/// places.
///
/// ```rust
/// use libmon::live::LiveField;
/// use libmon::live_field_f32;
/// use libmon::view::view_bit;
///
/// struct Motor { speed_rpm: f32 }
///
/// static FIELDS: &[LiveField<Motor>] =
///     &[live_field_f32!(Motor, "speed_rpm", view_bit(1), |m: &Motor| m.speed_rpm)];
/// ```
///
/// [`LiveField`]: crate::live::LiveField
#[macro_export]
macro_rules! live_field_f32 {
    ($owner:ty, $name:expr, $mask:expr, $get:expr) => {
        $crate::live::LiveField::<$owner> {
            name: $name,
            view_mask: $mask,
            print: |io: &mut dyn $crate::platform::Platform, name: &str, owner: &$owner| {
                $crate::field::print_f32_value(io, name, ($get)(owner));
            },
        }
    };
}

/// Build a [`LiveField`] printing a `bool` read by `getter` as
/// `true`/`false`.
///
/// [`LiveField`]: crate::live::LiveField
#[macro_export]
macro_rules! live_field_bool {
    ($owner:ty, $name:expr, $mask:expr, $get:expr) => {
        $crate::live::LiveField::<$owner> {
            name: $name,
            view_mask: $mask,
            print: |io: &mut dyn $crate::platform::Platform, name: &str, owner: &$owner| {
                $crate::field::print_bool_value(io, name, ($get)(owner));
            },
        }
    };
}

/// Build a [`LiveField`] printing a `u8` read by `getter` in decimal.
///
/// [`LiveField`]: crate::live::LiveField
#[macro_export]
macro_rules! live_field_u8 {
    ($owner:ty, $name:expr, $mask:expr, $get:expr) => {
        $crate::live::LiveField::<$owner> {
            name: $name,
            view_mask: $mask,
            print: |io: &mut dyn $crate::platform::Platform, name: &str, owner: &$owner| {
                $crate::field::print_u8_value(io, name, ($get)(owner));
            },
        }
    };
}

/// Build a [`LiveField`] with a custom printer function.
///
/// [`LiveField`]: crate::live::LiveField
#[macro_export]
macro_rules! live_field_custom {
    ($owner:ty, $name:expr, $mask:expr, $printer:expr) => {
        $crate::live::LiveField::<$owner> {
            name: $name,
            view_mask: $mask,
            print: $printer,
        }
    };
}
