pub mod config;
pub mod error;
pub mod stats;
pub mod util;

/// Raw fio latencies are reported in nanoseconds, plots use microseconds.
pub const NS_TO_US: f64 = 0.001;
