pub mod reachability;
pub mod syntax;

pub use reachability::BoundedReachabilityVerifier;
pub use syntax::SyntaxVerifier;
