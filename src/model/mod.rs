//! Exported entities: [`Artist`], [`Album`], [`Track`] and [`Playlist`].
//!
//! Entities are immutable value objects. Equality and hashing use only the
//! `id`; ordering for lexical export sorting is provided separately by
//! [`NaturalOrder`]. Each entity round-trips through a [`Mapping`] via
//! [`Record`], omitting absent optional fields.

mod album;
mod artist;
pub mod opt;
pub mod order;
mod playlist;
pub mod record;
mod track;

pub use album::Album;
pub use artist::Artist;
pub use opt::MustOpt;
pub use order::NaturalOrder;
pub use playlist::{Cover, Playlist};
pub use record::{Mapping, Record};
pub use track::Track;
