//! Preliminary complaint (denuncia) intake.
//!
//! Complaints are append-only: this service creates them and never updates
//! or deletes them. A PGN operator reviews them outside this system.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/complaints` | No | Submit a preliminary complaint |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::ComplaintService;
pub use store::{ComplaintStore, SqliteComplaintStore};
