//! Common error types for command dispatch

/// A common error type for debug command dispatch.
///
/// Every variant is a caller-input error detected synchronously while the
/// command line is parsed, before any monitor loop starts. Each one maps to
/// a printed diagnostic on the platform sink plus a non-`Ok` return from the
/// dispatch call; none are fatal to the host process.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// More arguments were supplied than the command accepts.
    TooManyArguments,
    /// A view argument did not resolve against the module's view table.
    UnknownView,
    /// Two view arguments were supplied to `monitor`.
    AmbiguousArguments,
    /// A duration or interval argument was not strictly positive.
    InvalidDuration,
    /// The first argument matched neither a command keyword nor a view name.
    UnknownCommand,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::TooManyArguments => defmt::write!(f, "TooManyArguments"),
            Error::UnknownView => defmt::write!(f, "UnknownView"),
            Error::AmbiguousArguments => defmt::write!(f, "AmbiguousArguments"),
            Error::InvalidDuration => defmt::write!(f, "InvalidDuration"),
            Error::UnknownCommand => defmt::write!(f, "UnknownCommand"),
        }
    }
}
