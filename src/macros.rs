// Global macros for internal henkan usage.

//---------------------------------------------------------------------------------------------------- Logging
// Logs with `log` but only if the log feature is enabled.
//
// The arguments are still type-checked when
// the feature is disabled, they just never run.

macro_rules! error2 {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::error!($($arg)+);
        #[cfg(not(feature = "log"))]
        if false { let _ = format_args!($($arg)+); }
    }};
}
pub(crate) use error2;

macro_rules! warn2 {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::warn!($($arg)+);
        #[cfg(not(feature = "log"))]
        if false { let _ = format_args!($($arg)+); }
    }};
}
pub(crate) use warn2;

macro_rules! info2 {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::info!($($arg)+);
        #[cfg(not(feature = "log"))]
        if false { let _ = format_args!($($arg)+); }
    }};
}
pub(crate) use info2;

macro_rules! debug2 {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::debug!($($arg)+);
        #[cfg(not(feature = "log"))]
        if false { let _ = format_args!($($arg)+); }
    }};
}
pub(crate) use debug2;

macro_rules! trace2 {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::trace!($($arg)+);
        #[cfg(not(feature = "log"))]
        if false { let _ = format_args!($($arg)+); }
    }};
}
pub(crate) use trace2;
