use crate::format::M3uRecord;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct M3uPlaylist {
    /// Records of this playlist, in file order
    records: Vec<M3uRecord>,
}

impl M3uPlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the playlist
    pub fn add(&mut self, record: M3uRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[M3uRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [M3uRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M3uRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Human readable listing of the records, one block per record:
    ///
    /// ```text
    /// - title: A, duration: 10, attrs: {tvg-id: 1}
    ///   http://example.com/a
    /// ```
    pub fn summary(&self) -> String {
        let mut result = String::new();
        for it in self.records.iter() {
            let attributes = it
                .attributes
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join(", ");

            result.push_str(&format!(
                "- title: {}, duration: {:.0}, attrs: {{{}}}\n  {}\n",
                it.title, it.duration, attributes, it.url
            ));
        }
        result
    }
}

impl From<Vec<M3uRecord>> for M3uPlaylist {
    fn from(records: Vec<M3uRecord>) -> Self {
        Self { records }
    }
}

impl Extend<M3uRecord> for M3uPlaylist {
    fn extend<T: IntoIterator<Item = M3uRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<M3uRecord> for M3uPlaylist {
    fn from_iter<T: IntoIterator<Item = M3uRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for M3uPlaylist {
    type Item = M3uRecord;
    type IntoIter = std::vec::IntoIter<M3uRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a M3uPlaylist {
    type Item = &'a M3uRecord;
    type IntoIter = std::slice::Iter<'a, M3uRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
