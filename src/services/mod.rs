//! External service clients.

pub mod epg;
