//! Export module for converting favorites into TablePlus records.

pub mod tableplus;

pub use tableplus::{
    map_entries, map_entry, map_favorite, status_color, MappedConnections, STATUS_COLORS,
};
