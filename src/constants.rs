/// Suffix that marks a file as a template for a local config file.
pub const MARKER_SUFFIX: &str = ".example";

/// Startup log level used when neither the environment nor the config says
/// otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "info";
