// src/core/mod.rs

pub mod decode;
pub mod doc;
pub mod net;
pub mod normalize;
pub mod sanitize;

pub use doc::Query;
