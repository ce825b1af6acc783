pub mod verifier;

pub use verifier::Verifier;
