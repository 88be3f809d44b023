mod console_logger;

pub use console_logger::{build_filter, setup_logging};
