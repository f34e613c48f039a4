//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, clipboard, storage) from
//! panel logic so the panels stay testable and SSR-safe.

pub mod clipboard;
pub mod clock;
pub mod dark_mode;
pub mod markdown;
