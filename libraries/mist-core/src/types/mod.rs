//! Domain types for Mist Player

mod catalog;
mod ids;
mod playlist;
mod track;

pub use catalog::{Rankings, RawSongRef};
pub use ids::{PlaylistId, TrackId};
pub use playlist::{LibraryCollections, Playlist};
pub use track::{LyricLine, Track};
