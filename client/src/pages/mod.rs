//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single route; `home` composes the sections from
//! `components` in page order.

pub mod home;
