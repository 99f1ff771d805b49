//! Reusable field-value printers and line formatting.
//!
//! Both engines render one `"  name=value"` line per selected field through
//! the small printer set below: booleans as `true`/`false`, small unsigned
//! integers in decimal, floats to 4 decimal places. Lines are formatted
//! into a fixed-capacity buffer before reaching the platform sink, so no
//! allocation happens on the print path.

use core::fmt::{self, Write as _};

use heapless::String;

use crate::platform::Platform;

/// Maximum length of one formatted output line.
///
/// Longer lines are truncated at the buffer boundary.
pub const MAX_LINE_LEN: usize = 96;

/// Format `args` into a stack line buffer and hand it to the sink.
pub(crate) fn emit(io: &mut dyn Platform, args: fmt::Arguments<'_>) {
    let mut line: String<MAX_LINE_LEN> = String::new();
    // On overflow write_fmt stops at capacity; the truncated line is still
    // emitted.
    let _ = line.write_fmt(args);
    io.write(line.as_str());
}

/// Emit the per-print header line: `[<elapsed_ms> ms] <module> <view>`.
///
/// Shared by both engines so their headers stay byte-identical.
pub(crate) fn print_header(io: &mut dyn Platform, module_name: &str, view_name: &str) {
    let now = io.now_ms();
    emit(io, format_args!("[{} ms] {} {}\r\n", now, module_name, view_name));
}

/// Print a boolean field value as `true`/`false`.
pub fn print_bool_value(io: &mut dyn Platform, name: &str, value: bool) {
    emit(io, format_args!("  {}={}\r\n", name, value));
}

/// Print an 8-bit unsigned field value in decimal.
pub fn print_u8_value(io: &mut dyn Platform, name: &str, value: u8) {
    emit(io, format_args!("  {}={}\r\n", name, value));
}

/// Print a floating-point field value to 4 decimal places.
pub fn print_f32_value(io: &mut dyn Platform, name: &str, value: f32) {
    emit(io, format_args!("  {}={:.4}\r\n", name, value));
}
