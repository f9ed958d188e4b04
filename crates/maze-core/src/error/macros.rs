//! Error macros for maze

/// Macro for rejecting malformed maze input at a given line
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::MazeError::malformed($line, format!($($arg)+)))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::MazeError::invalid_value($context, $value))
    };
}
