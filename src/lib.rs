//! Persona-driven section extraction for PDF collections.
//!
//! For every collection directory holding a `challenge1b_input.json`, the
//! pipeline derives a keyword set from the persona and job description,
//! discovers candidate sections in each listed PDF (authored outline first,
//! font-size heuristics as fallback), ranks them by keyword relevance and
//! writes the top sections plus text excerpts to `challenge1b_output.json`.

pub mod collection;
pub mod config;
pub mod discover;
pub mod document;
pub mod heading;
pub mod keywords;
pub mod models;
pub mod pdf_source;
pub mod rank;
pub mod report;
pub mod score;
