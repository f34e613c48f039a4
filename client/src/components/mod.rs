//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `*_panel` modules are the lab widgets, one per catalog entry. Each owns
//! its signals and calls straight into `labs`; none reads another's state.
//! The remaining modules are shared chrome.

pub mod adventure_panel;
pub mod base64_panel;
pub mod blueprint_panel;
pub mod contrast_panel;
pub mod copy_button;
pub mod cron_panel;
pub mod hash_panel;
pub mod incident_panel;
pub mod jwt_panel;
pub mod lab_card;
pub mod pomodoro_panel;
pub mod portscan_panel;
pub mod sql_panel;
pub mod subnet_panel;
pub mod theme_toggle;
pub mod timestamp_panel;
pub mod uuid_panel;
pub mod xor_panel;
