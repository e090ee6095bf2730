//! Flutter bridge for the mental-load assessment core.

pub mod api;
