//! Moodbase Website
//!
//! Front-end for the Moodbase mental-health resource directory, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Blog with per-article pages and tag filtering
//! - Map of nearby support with an adjustable search radius
//! - Desktop and mobile (drawer) navigation
//! - Shared design tokens exposed as CSS custom properties
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Content is embedded at compile time from `../content`, so no
//! page makes a network request apart from the map widget's own tiles.

pub mod app;
pub mod components;
pub mod content;
pub mod design_tokens;
pub mod pages;
pub mod state;

pub use app::App;
