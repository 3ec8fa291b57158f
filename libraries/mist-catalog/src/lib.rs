//! Catalog access
//!
//! HTTP implementations of the [`CatalogService`](mist_core::CatalogService)
//! and [`Downloader`](mist_core::Downloader) seams: ranking lists, search,
//! lazy song-detail resolution, and streaming media download. The loose
//! upstream wire formats stay private to this crate; callers only ever see
//! [`mist_core`] types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod download;
pub mod error;
mod wire;

pub use client::{CatalogClient, CatalogConfig};
pub use download::{DownloadProgress, HttpDownloader};
pub use error::{CatalogError, Result};
