//! Flutter-facing FFI layer over `roster_core`.

pub mod api;
