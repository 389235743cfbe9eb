// Infrastructure layer modules
pub mod logging;

// Re-exports
pub use logging::init_logging;
