mod attributes;
mod playlist;
mod record;
pub use attributes::*;
pub use playlist::*;
pub use record::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";
    pub const EXTINF_LEN: usize = EXTINF.len();
}
