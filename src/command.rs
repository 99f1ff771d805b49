//! Command grammar parser shared by both field engines.
//!
//! [`run_command`] is pure dispatch logic: it classifies an `argc/argv`
//! style invocation into exactly one of usage, single print, monitor loop
//! or direct-view print, and executes it through three injected behaviors.
//! It never touches module-specific state - the engines supply the
//! callbacks that do.
//!
//! # Grammar
//!
//! With `args[0]` being the module command name as passed by the host
//! shell:
//!
//! ```text
//! <module>                                  -> usage text
//! <module> monitor                          -> one immediate print
//! <module> monitor <time_ms> [interval_ms] [view]
//! <module> once [view]
//! <module> <view>                           -> one print of <view>
//! ```
//!
//! The third `monitor` argument is tried as a view name first; only if it
//! does not resolve is it parsed as the interval. A fourth argument must be
//! a view, and is rejected as ambiguous when the third already consumed the
//! view slot.

use crate::error::Error;
use crate::field::emit;
use crate::platform::Platform;

/// Default monitor print interval in milliseconds, used when the invocation
/// does not supply one.
pub const DEFAULT_INTERVAL_MS: i32 = 1000;

/// Parse and execute one debug-command invocation.
///
/// * `parse_view` resolves a view-name argument, returning `None` when the
///   text is not a view.
/// * `print_once` performs one full print of the given view.
/// * `print_usage` emits the module's usage block.
///
/// All validation happens before the first `print_once` of a monitor loop;
/// every error path emits a diagnostic line on `io` and returns the
/// corresponding [`Error`]. The monitor loop blocks the calling context via
/// [`Platform::sleep_ms`] for its whole configured duration.
///
/// Numeric arguments that fail to parse are treated as `0` and rejected by
/// the strictly-positive validation.
pub fn run_command<V, PF, OF, UF>(
    io: &mut dyn Platform,
    args: &[&str],
    default_view: V,
    mut parse_view: PF,
    mut print_once: OF,
    mut print_usage: UF,
) -> Result<(), Error>
where
    V: Copy,
    PF: FnMut(&str) -> Option<V>,
    OF: FnMut(&mut dyn Platform, V),
    UF: FnMut(&mut dyn Platform),
{
    if args.len() <= 1 {
        print_usage(&mut *io);
        return Ok(());
    }

    if args[1] == "monitor" {
        if args.len() == 2 {
            print_once(&mut *io, default_view);
            return Ok(());
        }

        if args.len() > 5 {
            io.write("Error: Too many arguments for monitor.\r\n");
            return Err(Error::TooManyArguments);
        }

        let time_ms: i32 = args[2].parse().unwrap_or(0);
        let mut interval_ms: i32 = DEFAULT_INTERVAL_MS;
        let mut view = default_view;
        let mut third_is_view = false;

        if args.len() >= 4 {
            if let Some(parsed) = parse_view(args[3]) {
                view = parsed;
                third_is_view = true;
            } else {
                interval_ms = args[3].parse().unwrap_or(0);
            }
        }

        if args.len() == 5 {
            if third_is_view {
                io.write(
                    "Error: Invalid monitor args. Use monitor <time_ms> [interval_ms] [view].\r\n",
                );
                return Err(Error::AmbiguousArguments);
            }
            match parse_view(args[4]) {
                Some(parsed) => view = parsed,
                None => {
                    emit(io, format_args!("Error: Unknown view '{}'.\r\n", args[4]));
                    return Err(Error::UnknownView);
                }
            }
        }

        if time_ms <= 0 || interval_ms <= 0 {
            io.write("Error: time_ms and interval_ms must be > 0.\r\n");
            return Err(Error::InvalidDuration);
        }

        // Tick before the elapsed check: the loop always prints
        // ceil(time_ms / interval_ms) times.
        let mut elapsed: i64 = 0;
        while elapsed < time_ms as i64 {
            print_once(&mut *io, view);
            io.sleep_ms(interval_ms as u32);
            elapsed += interval_ms as i64;
        }
        return Ok(());
    }

    if args[1] == "once" {
        if args.len() > 3 {
            io.write("Error: Too many arguments for once.\r\n");
            return Err(Error::TooManyArguments);
        }

        let mut view = default_view;
        if args.len() == 3 {
            match parse_view(args[2]) {
                Some(parsed) => view = parsed,
                None => {
                    emit(io, format_args!("Error: Unknown view '{}'.\r\n", args[2]));
                    return Err(Error::UnknownView);
                }
            }
        }

        print_once(&mut *io, view);
        return Ok(());
    }

    if args.len() == 2 {
        if let Some(view) = parse_view(args[1]) {
            print_once(&mut *io, view);
            return Ok(());
        }
    }

    emit(io, format_args!("Error: Unknown command '{}'.\r\n", args[1]));
    Err(Error::UnknownCommand)
}

/// Emit the fixed usage block, parameterized by the module's view-help
/// string (e.g. `"full|state|thermal"`).
pub fn print_usage(io: &mut dyn Platform, view_help: &str) {
    io.write("Usage:\r\n");
    io.write("  monitor\r\n");
    emit(
        io,
        format_args!("  monitor <time_ms> [interval_ms] [{}]\r\n", view_help),
    );
    emit(io, format_args!("  once [{}]\r\n", view_help));
    emit(io, format_args!("  {}\r\n", view_help));
}
