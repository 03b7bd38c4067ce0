//! Raw lap table representation.

/// The input file exactly as read: header names plus text rows.
///
/// The normalizer produces typed records from this; until then every cell
/// stays text, which is what lets mixed numeric/string columns survive the
/// trip from disk.
#[derive(Debug, Clone, Default)]
pub struct RawLapTable {
    /// Column names, from the header row of the input file
    pub headers: Vec<String>,

    /// Each data row, one text cell per column
    pub rows: Vec<Vec<String>>,
}

impl RawLapTable {
    /// Look up a column by exact, case-sensitive name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup_is_case_sensitive() {
        let table = RawLapTable {
            headers: vec!["Lap Time".to_string(), "compound".to_string()],
            rows: vec![],
        };

        assert_eq!(table.column_index("Lap Time"), Some(0));
        assert_eq!(table.column_index("lap time"), None);
        assert!(table.has_column("compound"));
        assert!(!table.has_column("Compound"));
    }
}
