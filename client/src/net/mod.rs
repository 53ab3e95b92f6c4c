//! Lead routing and outbound links.
//!
//! SYSTEM CONTEXT
//! ==============
//! `whatsapp` and `mailto` build outbound URLs, `api` POSTs leads over HTTP,
//! `lead_router` picks between them, and `types` defines the lead schema.

pub mod api;
pub mod lead_router;
pub mod mailto;
pub mod types;
pub mod whatsapp;
