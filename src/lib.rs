//! Bazi Core - Four Pillars Natal Chart Engine
//!
//! This crate converts a birth instant into a structured natal chart
//! (Four Pillars, ten gods, nayin, major periods) and a normalized
//! five-element strength assessment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
