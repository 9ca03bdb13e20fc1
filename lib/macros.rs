//! Helper macros for CLI help text.

/// Build an `Examples:` block for clap's `after_help`.
///
/// Each entry is a command literal and a description literal separated by `#`.
#[macro_export]
macro_rules! examples {
    ($($cmd:literal # $desc:literal),* $(,)?) => {
        concat!("Examples:", $("\n  ", $cmd, "  # ", $desc),*)
    };
}

/// Build a titled examples block, for sections after the main `Examples:` one.
#[macro_export]
macro_rules! examples_section {
    ($title:literal; $($cmd:literal # $desc:literal),* $(,)?) => {
        concat!($title, $("\n  ", $cmd, "  # ", $desc),*)
    };
}
