//! Office locations (sedes) feature.
//!
//! The directory is a fixed table loaded at start-up and shared read-only
//! with handlers and the chat router.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/offices` | List offices, optionally filtered by `region` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::OfficeDirectory;
