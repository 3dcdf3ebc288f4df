//! HTTP Handlers

mod auth;
mod book;
mod ping;
mod review;

pub use auth::*;
pub use book::*;
pub use ping::*;
pub use review::*;
