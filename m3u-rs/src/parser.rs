use std::{
    io::{self, BufRead},
    mem::take,
    str::FromStr,
};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use smol_str::SmolStr;

use crate::{
    errors::ParseError,
    format::{M3uAttributes, M3uPlaylist, M3uRecord, directives},
};

lazy_static! {
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"^([^"]+)="([^"]*)"$"#).expect("Regular expression error");
}

/// Line-by-line reader of `#EXTM3U` playlists.
pub struct Parser<T: BufRead> {
    reader: T,
    buffer: String,
}

impl<T: BufRead> Parser<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Next line without its terminator, `None` at the end of the stream
    fn next_line(&mut self) -> Result<Option<&str>, io::Error> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }

        let line = self.buffer.strip_suffix('\n').unwrap_or(&self.buffer);
        Ok(Some(line.strip_suffix('\r').unwrap_or(line)))
    }

    /// Reads the whole stream into a playlist. Any malformed line aborts the
    /// parse and nothing read so far is returned.
    pub fn parse(mut self) -> Result<M3uPlaylist, ParseError> {
        let mut playlist = M3uPlaylist::new();
        // filled by #EXTINF, committed by the location line
        let mut pending = M3uRecord::new();
        let mut has_pending_info = false;

        while let Some(line) = self.next_line()? {
            if line.is_empty() {
                continue;
            }

            if line == directives::EXTM3U {
                trace!("Skipping header");
            } else if line.starts_with(directives::EXTINF) {
                if has_pending_info {
                    debug!("Discarding #EXTINF without location: {}", pending.title);
                }
                pending = parse_media_info(line)?;
                has_pending_info = true;
            } else if line.starts_with('#') {
                return Err(ParseError::UnknownDirective {
                    line: line.to_owned(),
                });
            } else {
                pending.url = SmolStr::new(line);
                trace!("Record {}: {}", playlist.len(), pending.url);
                playlist.add(take(&mut pending));
                has_pending_info = false;
            }
        }

        if has_pending_info {
            debug!("Dropping trailing #EXTINF without location: {}", pending.title);
        }
        debug!("Read {} records", playlist.len());

        Ok(playlist)
    }
}

impl M3uPlaylist {
    /// Parses a playlist from a buffered stream
    pub fn read_from(reader: impl BufRead) -> Result<Self, ParseError> {
        Parser::new(reader).parse()
    }
}

impl FromStr for M3uPlaylist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read_from(s.as_bytes())
    }
}

/// Parses `#EXTINF:<duration>[ key="value" ...],<title>` into a record without location
fn parse_media_info(line: &str) -> Result<M3uRecord, ParseError> {
    let format_error = || ParseError::Format {
        line: line.to_owned(),
    };

    let value = line[directives::EXTINF_LEN..]
        .strip_prefix(':')
        .ok_or_else(format_error)?;

    // duration runs until the first whitespace or comma
    let duration_end = value
        .find(|x: char| x.is_whitespace() || x == ',')
        .unwrap_or(value.len());
    let (duration, rest) = value.split_at(duration_end);
    if duration.is_empty() {
        return Err(format_error());
    }

    // unbalanced quotes fall back to the first comma, the attribute check reports the token
    let title_start = find_title_delimiter(rest)
        .or_else(|| rest.find(','))
        .ok_or_else(format_error)?;
    let (attributes, title) = (&rest[..title_start], &rest[title_start + 1..]);

    let duration = duration
        .parse::<f64>()
        .map_err(|source| ParseError::NumberFormat {
            value: duration.to_owned(),
            line: line.to_owned(),
            source,
        })?;

    Ok(M3uRecord {
        duration,
        attributes: parse_attributes(attributes, line)?,
        title: SmolStr::new(title),
        url: SmolStr::default(),
    })
}

/// Position of the first comma outside of a quoted value
fn find_title_delimiter(input: &str) -> Option<usize> {
    let mut quoted = false;
    for (index, x) in input.char_indices() {
        match x {
            '"' => quoted = !quoted,
            ',' if !quoted => return Some(index),
            _ => {}
        }
    }

    None
}

/// Splits on whitespace that is not inside a quoted value
fn split_attributes(input: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut quoted = false;
    let mut start = 0;
    for (index, x) in input.char_indices() {
        if x == '"' {
            quoted = !quoted;
        } else if x.is_whitespace() && !quoted {
            result.push(&input[start..index]);
            start = index + x.len_utf8();
        }
    }
    result.push(&input[start..]);

    result.retain(|x| !x.is_empty());
    result
}

fn parse_attributes(input: &str, line: &str) -> Result<M3uAttributes, ParseError> {
    let mut result = M3uAttributes::new();
    for attribute in split_attributes(input) {
        let (_, [key, value]) = ATTRIBUTE_REGEX
            .captures(attribute)
            .ok_or_else(|| ParseError::AttributeFormat {
                attribute: attribute.to_owned(),
                line: line.to_owned(),
            })?
            .extract();
        result.insert(key, value);
    }

    Ok(result)
}
