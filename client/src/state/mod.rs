//! Client-side state holders.
//!
//! DESIGN
//! ======
//! Each holder is plain Rust with no Leptos dependency so it can be unit
//! tested; components wrap them in `RwSignal`/`StoredValue` and share them
//! through context.

pub mod contact;
pub mod lightbox;
pub mod theme;
