//! # m3u-rs
//! A library for parsing and generating `#EXTM3U` playlist files
//!
//! # Example
//! ```rust
//! use m3u_rs::format::{M3uPlaylist, M3uRecord};
//!
//! // 1. Parse
//! let playlist = M3uPlaylist::read_from(
//!     r#"#EXTM3U
//! #EXTINF:5 tvg-id="1" tvg-name="Foo",Bar
//! http://example.com/bar.m3u8
//! "#
//!     .as_bytes(),
//! )
//! .unwrap();
//! assert_eq!(playlist.records()[0].title, "Bar");
//!
//! // 2. Generate
//! let mut playlist = M3uPlaylist::new();
//! playlist.add(M3uRecord::new().with_duration(12.6).with_title("A").with_url("http://a"));
//!
//! let mut output = Vec::new();
//! playlist.write_to(&mut output).unwrap();
//! assert_eq!(output, b"#EXTM3U\n#EXTINF:13,A\nhttp://a\n");
//! ```

mod builder;
mod errors;
pub mod format;
mod parser;
pub use errors::*;
pub use parser::*;
