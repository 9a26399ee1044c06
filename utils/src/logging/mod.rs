mod tracing;

pub use self::tracing::{env_filter, start_tracing};
