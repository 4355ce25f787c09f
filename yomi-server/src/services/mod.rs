//! Collaborator backends for the annotation core

pub mod lexicon;
pub mod verifier_client;

pub use lexicon::LexiconTokenizer;
pub use verifier_client::HttpVerifier;
