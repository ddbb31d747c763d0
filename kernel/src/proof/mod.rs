//! Proof module: canonical hashing and canonical JSON bytes.
//!
//! Nothing in `carrier` or `operators` depends on `proof`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
