//! Request handlers.

pub mod diary;
