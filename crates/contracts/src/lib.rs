//! Wire contracts shared between the frontend and the REST backend.
//!
//! Every request/response body exchanged with the API is a typed record in
//! this crate; the frontend never ships loose JSON maps across operations.

pub mod domain;
pub mod enums;
