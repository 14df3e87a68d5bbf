//! Keyword-based chat router.
//!
//! A free-text message is classified into an [`models::Intent`] by an ordered
//! keyword rule table, then answered by the response composer. Location
//! replies include the live office count from the shared directory.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/chat` | Classify a message and reply |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ChatService;
