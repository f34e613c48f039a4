//! Network helpers for the server's JSON API.

pub mod api;
