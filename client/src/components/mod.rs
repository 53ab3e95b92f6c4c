//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections and read the site config,
//! theme signal, and theme engine from Leptos context providers.

pub mod about;
pub mod anchor_link;
pub mod awards;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod services;
pub mod skills;
pub mod stats;
pub mod testimonials;
pub mod theme_preview;
pub mod theme_toggle;
pub mod whatsapp_link;
