//! Tells whether airing a room makes sense, by comparing the absolute
//! humidity inside and outside.

pub mod adapter;
pub mod advisor;
pub mod climate;
pub mod core;
pub mod input;
pub mod localization;
pub mod port;
pub mod report;
pub mod settings;
