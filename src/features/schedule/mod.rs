//! Office hours lookup.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/schedule` | Official PGN office hours |

pub mod handlers;
pub mod routes;
