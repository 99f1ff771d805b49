//! Platform seam between the engine and its host environment.
//!
//! The engine itself never talks to hardware. Everything it needs from the
//! outside world - a text sink for line-oriented output, a monotonic
//! millisecond clock for header lines, and a blocking sleep for the monitor
//! loop - comes in through the [`Platform`] trait. A UART console, an RTT
//! channel or a test capture buffer are all valid implementations.

/// A trait for platform-specific monitor functionality.
///
/// This trait must be implemented by the target platform to provide the
/// output and timing primitives the command engines rely on.
///
/// # Examples
///
/// ```rust
/// use libmon::platform::Platform;
///
/// struct Console;
///
/// impl Platform for Console {
///     fn write(&mut self, text: &str) {
///         // Send to UART or other output
///         print!("{}", text);
///     }
///
///     fn now_ms(&self) -> u64 {
///         0 // Read a hardware timer in a real implementation
///     }
///
///     fn sleep_ms(&mut self, _duration_ms: u32) {
///         // Block on an RTOS delay in a real implementation
///     }
/// }
/// ```
pub trait Platform {
    /// Write text to the output sink.
    ///
    /// Output is line-oriented; the engine always terminates lines with
    /// `\r\n`. Implementations should forward the text verbatim.
    fn write(&mut self, text: &str);

    /// Milliseconds elapsed since boot/start, monotonic.
    fn now_ms(&self) -> u64;

    /// Block the calling context for at least `duration_ms` milliseconds.
    ///
    /// The monitor loop calls this between prints. There is no cancellation
    /// path other than whatever preemption the host provides.
    fn sleep_ms(&mut self, duration_ms: u32);
}
