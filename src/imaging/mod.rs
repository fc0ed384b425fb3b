//! Image loading and encoding — pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Load** | `image::ImageReader` + Lanczos3 `resize_exact` |
//! | **Batch load** | rayon `par_iter`, order-preserving `collect` |
//! | **Encode** | `JpegEncoder` for sheets, source format for single images |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing encode operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, SourceImage};
pub use calculations::{display_lines, fit_within, single_image_size};
pub use operations::{encode_image, load_all, load_image};
pub use params::{EncodeParams, Quality};
pub use rust_backend::RustBackend;
