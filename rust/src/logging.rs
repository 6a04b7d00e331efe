//! Diagnostic logging macros with verbosity level control.
//!
//! Diagnostics go to stderr and never mix with the cycle narration on stdout.
//! Verbosity levels:
//! - 0: SILENT (errors only, reported by the binary)
//! - 1: EVENTS (admissions, dispatches, terminations)
//! - 2: DECISIONS (deferred arrivals, idle reasons, Bernoulli outcomes)
//! - 3: DEBUG (queue sizes and head pids every cycle)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_EVENTS: u8 = 1;
pub const VERBOSITY_DECISIONS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at EVENTS level (verbosity >= 1).
#[macro_export]
macro_rules! log_events {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_EVENTS {
            eprintln!("[sched] {}", format_args!($($arg)*));
        }
    };
}

/// Log at DECISIONS level (verbosity >= 2).
#[macro_export]
macro_rules! log_decisions {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DECISIONS {
            eprintln!("[sched]   {}", format_args!($($arg)*));
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!("[sched]     {}", format_args!($($arg)*));
        }
    };
}
