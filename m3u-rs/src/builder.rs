use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use log::{debug, warn};

use crate::format::{M3uPlaylist, M3uRecord, directives};

impl M3uPlaylist {
    /// Writes the playlist as `#EXTM3U` text.
    ///
    /// Stops at the first failed write. Whatever was written before stays in the
    /// sink.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        writer.write_all(format!("{}\n", directives::EXTM3U).as_bytes())?;
        for it in self.iter() {
            // one write per line
            writer.write_all(extinf_line(it).as_bytes())?;
            writer.write_all(format!("{}\n", it.url).as_bytes())?;
        }

        debug!("Wrote {} records", self.len());
        Ok(())
    }
}

// #EXTINF:duration attributes...,title
fn extinf_line(record: &M3uRecord) -> String {
    let mut line = format!("{}:{:.0}", directives::EXTINF, record.duration);
    for (key, value) in record.attributes.iter() {
        if value.contains('"') {
            warn!("Attribute {} contains a double quote, output is not valid m3u", key);
        }
        line.push_str(&format!(" {}=\"{}\"", key, value));
    }

    line.push(',');
    line.push_str(&record.title);
    line.push('\n');
    line
}

impl Display for M3uPlaylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", directives::EXTM3U)?;
        for it in self.iter() {
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for M3uRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", extinf_line(self))?;
        writeln!(f, "{}", self.url)
    }
}
