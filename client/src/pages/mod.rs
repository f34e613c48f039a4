//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `dashboard` lists the catalog; `lab` mounts exactly one panel chosen by
//! the route slug. Rendering details live in `components`.

pub mod dashboard;
pub mod lab;
