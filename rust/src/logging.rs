//! Verbosity-gated logging for the schedule passes.
//!
//! Nothing is formatted when the configured verbosity is below a macro's
//! level, so a silent engine pays for one integer comparison per call site.
//! Levels:
//! - 0: SILENT
//! - 1: PASSES (one line per pass: task counts, project finish, path found)
//! - 2: TASKS (per-task dates and skip reasons)
//! - 3: TRACE (sorter and path-walk internals)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_PASSES: u8 = 1;
pub const VERBOSITY_TASKS: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at PASSES level (verbosity >= 1).
#[macro_export]
macro_rules! log_pass {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_PASSES {
            eprintln!("[cpm] {}", format_args!($($arg)*));
        }
    };
}

/// Log at TASKS level (verbosity >= 2).
///
/// Used for: computed dates per task, completed-task preservation, ignored edges.
#[macro_export]
macro_rules! log_task {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TASKS {
            eprintln!("[cpm]   {}", format_args!($($arg)*));
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            eprintln!("[cpm]     {}", format_args!($($arg)*));
        }
    };
}
