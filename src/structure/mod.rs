//! Client-side model of everything the server stores or returns

pub mod constant;
pub mod graph;
pub mod schema;
pub mod traverser;
