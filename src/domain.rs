// Domain layer modules
pub mod cors_policy;
pub mod echo_reply;
pub mod proxy;

// Re-exports
pub use cors_policy::CorsPolicy;
pub use echo_reply::EchoReply;
pub use proxy::{ProxyEvent, ProxyResponse};
