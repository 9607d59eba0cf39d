//! REST client for the illustration generation service.
//!
//! The service takes raw diary text, derives an image prompt from it,
//! renders an illustration, and answers with the image URL. This crate
//! wraps that HTTP contract using [`reqwest`].

pub mod api;
