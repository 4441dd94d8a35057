//! Source discovery: directory listing, extension whitelists and seed grouping.

pub mod discover;
pub mod seed;
