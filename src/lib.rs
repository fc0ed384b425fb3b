//! # iv
//!
//! A terminal image viewer for iTerm2-compatible terminals. One path shows a
//! single image, resized to fit the terminal; several paths are combined into
//! one labeled contact sheet.
//!
//! # Architecture
//!
//! ```text
//! CLI ─┬─ 1 path ──► load ─────────────────────────────────────► encode ─► display
//!      └─ N paths ─► grid ─► load_all ─► plan ─► compose sheet ─► encode ─► display
//! ```
//!
//! Loading and layout are interleaved: the grid (columns and tile width) is
//! decided from the viewport before anything is decoded, every image is then
//! decoded in parallel and shrunk to the tile width, and only then are row
//! heights and the canvas size known.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `SheetConfig`: spacing, caption and encoding constants passed to the core |
//! | [`imaging`] | Decode, fit-to-box resize, parallel batch load, encode (`image` + `rayon`) |
//! | [`layout`] | Contact-sheet layout engine: grid, row heights, canvas size, placements |
//! | [`font`] | Caption font resolution with a builtin bitmap fallback |
//! | [`compose`] | Pastes tiles and captions onto the sheet canvas |
//! | [`display`] | Terminal size and the iTerm2 inline-image protocol |
//! | [`view`] | The single-image and contact-sheet pipelines |
//!
//! # Design Decisions
//!
//! ## Explicit Configuration
//!
//! Every constant the layout depends on (minimum tile width, spacings, pixels
//! per terminal line, caption size) lives in [`config::SheetConfig`] and is
//! passed in explicitly, so the core can be exercised with other values.
//!
//! ## Injected Collaborators
//!
//! The codec ([`imaging::ImageBackend`]), the caption font
//! ([`font::CaptionFont`]) and the terminal ([`display::InlineImageDisplay`])
//! are traits. The binary wires in the real implementations; tests use
//! recording fakes.
//!
//! ## All or Nothing
//!
//! Nothing is retried and nothing is downgraded to a warning. A single image
//! that fails to decode aborts the whole contact sheet before the terminal
//! sees any output.

pub mod compose;
pub mod config;
pub mod display;
pub mod font;
pub mod imaging;
pub mod layout;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
