//! User settings for music-builder.
//!
//! Sections map onto `[audio]`, `[ui]`, `[controls]`, `[library]`,
//! `[tracks]` and `[logging]` in `config.toml`; every key has a default and
//! can be overridden through `MUSIC_BUILDER__<SECTION>__<KEY>`.

mod load;
mod schema;

pub use schema::*;
