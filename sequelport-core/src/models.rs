//! Core data models for `SequelPort`
//!
//! This module defines the source-side favorites tree read from Sequel Pro /
//! Sequel Ace and the destination-side records written for TablePlus.

mod connection;
mod favorite;
mod group;

pub use connection::{
    TablePlusConnection, DEFAULT_DATABASE_PORT, DEFAULT_DRIVER, DEFAULT_SSH_PORT,
};
pub use favorite::{FavoriteNode, FavoriteRecord, FlattenedEntry};
pub use group::ConnectionGroup;
