//! # Inline Kinds
//!
//! Inline syntax types that own their markers. The parser never hardcodes
//! `**` or `](`; it asks these types.

pub mod delimiter;
pub mod media;

pub use delimiter::Delimiter;
pub use media::Media;
