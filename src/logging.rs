//! Logging macros
//!
//! Library code logs through these macros so the same call sites work on
//! every target:
//! - Embedded: forwarded to `defmt`
//! - Host unit tests: printed with `println!`
//! - Host non-test: arguments are type-checked and discarded
//!
//! Format strings must stay within the subset shared by `defmt` and
//! `core::fmt` (plain `{}` placeholders).

/// Log at info level
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "embedded"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "embedded"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log at warn level
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "embedded"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "embedded"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log at debug level
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "embedded")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "embedded"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "embedded"), not(test)))]
        let _ = ::core::format_args!($($arg)*);
    }};
}
