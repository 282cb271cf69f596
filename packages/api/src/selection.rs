//! Client-side rules for choosing the file to upload.
//!
//! Only the file name is checked. The content is never sniffed; the backend is
//! the authority on whether a `.csv` actually parses.

use thiserror::Error;

/// Required suffix of an uploadable file name.
pub const CSV_SUFFIX: &str = ".csv";

/// Content type sent with the multipart file part.
pub const CSV_MIME: &str = "text/csv";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Only CSV files are allowed")]
    NotCsv,

    #[error("Please select a single CSV file")]
    MultipleFiles,

    #[error("Could not read {0}")]
    Unreadable(String),
}

/// A selected file, held in memory until the upload settles.
#[derive(Clone, PartialEq)]
pub struct CsvFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl CsvFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub(crate) fn len(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl std::fmt::Debug for CsvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Whether `name` carries the `.csv` suffix. Case-sensitive.
pub fn is_csv_name(name: &str) -> bool {
    name.ends_with(CSV_SUFFIX)
}

/// Pick the file to upload from a drop or picker selection.
///
/// An empty selection is not an error, there is simply nothing to do. More than
/// one file rejects the whole drop rather than silently taking the first.
pub fn select_csv(names: &[String]) -> Result<Option<&str>, SelectionError> {
    match names {
        [] => Ok(None),
        [name] if is_csv_name(name) => Ok(Some(name.as_str())),
        [_] => Err(SelectionError::NotCsv),
        _ => Err(SelectionError::MultipleFiles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_csv_is_accepted() {
        let selection = names(&["leads.csv"]);
        assert_eq!(select_csv(&selection), Ok(Some("leads.csv")));
    }

    #[test]
    fn test_wrong_suffix_is_rejected_regardless_of_content() {
        for name in ["leads.xlsx", "leads.csv.txt", "csv", "leads.CSV", "leadscsv"] {
            let selection = names(&[name]);
            assert_eq!(select_csv(&selection), Err(SelectionError::NotCsv), "{name}");
        }
    }

    #[test]
    fn test_two_files_are_rejected_entirely() {
        let selection = names(&["a.csv", "b.csv"]);
        assert_eq!(select_csv(&selection), Err(SelectionError::MultipleFiles));
    }

    #[test]
    fn test_empty_selection_is_a_noop() {
        assert_eq!(select_csv(&[]), Ok(None));
    }

    #[test]
    fn test_debug_omits_contents() {
        let file = CsvFile::new("leads.csv", b"Company\nAcme\n".to_vec());
        let debug = format!("{file:?}");
        assert!(debug.contains("leads.csv"));
        assert!(!debug.contains("Acme"));
        assert_eq!(file.len(), 13);
    }
}
