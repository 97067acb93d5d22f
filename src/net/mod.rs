//! Network layer: the request wrapper, endpoint helpers and wire types.

pub mod api;
pub mod types;
