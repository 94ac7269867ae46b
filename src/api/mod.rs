//! Requisition API Client
//!
//! Frontend bindings to the backend REST endpoints, organized by domain.

mod http;
mod search;
mod requests;
mod dashboard;
mod assets;

pub use search::*;
pub use requests::*;
pub use dashboard::*;
pub use assets::*;
