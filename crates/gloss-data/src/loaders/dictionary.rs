use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use gloss_core::DictionaryStore;
use serde::{Deserialize, Serialize};

use super::{content_lines, dictcc, ding};
use crate::error::LoadError;

/// Line format of a dictionary file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    /// `Hund {m} | Hunde {pl} :: dog | dogs`
    Ding,
    /// `source<TAB>target[<TAB>word type]`
    DictCc,
}

impl DictionaryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryFormat::Ding => "ding",
            DictionaryFormat::DictCc => "dictcc",
        }
    }

    fn parse_line(&self, dict: &mut DictionaryStore, line: &str) -> bool {
        match self {
            DictionaryFormat::Ding => ding::parse_line(dict, line),
            DictionaryFormat::DictCc => dictcc::parse_line(dict, line),
        }
    }
}

impl fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse every content line of `reader` into `dict`. Returns the number of
/// lines read; lines that yield no single-word headword are skipped.
pub fn read_dictionary<R: BufRead>(
    reader: R,
    format: DictionaryFormat,
    dict: &mut DictionaryStore,
) -> Result<usize, LoadError> {
    let mut count = 0;
    let mut skipped = 0;

    for line in content_lines(reader) {
        let (_, line) = line?;
        if !format.parse_line(dict, &line) {
            skipped += 1;
        }
        count += 1;
    }

    if skipped > 0 {
        tracing::debug!("{} dictionary lines had no single-word headword", skipped);
    }
    Ok(count)
}

/// Load a dictionary file. A missing file is an error.
pub fn load_dictionary(
    path: &Path,
    format: DictionaryFormat,
    source_lang: &str,
    target_lang: &str,
) -> Result<DictionaryStore, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    tracing::info!("Reading {} dictionary: {}", format, path.display());
    let start = Instant::now();

    let mut dict = DictionaryStore::new(source_lang, target_lang);
    let lines = read_dictionary(BufReader::new(File::open(path)?), format, &mut dict)?;

    tracing::info!(
        "Loaded {} dictionary entries from {} lines in {:?}",
        dict.len(),
        lines,
        start.elapsed()
    );
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_tab_separated() {
        let data = "# dict.cc export\n\nHund\tdog\tnoun\nin Ordnung\tall right\tadj\nlaut\tloud\n";
        let mut dict = DictionaryStore::new("de", "en");

        let lines = read_dictionary(Cursor::new(data), DictionaryFormat::DictCc, &mut dict).unwrap();

        assert_eq!(lines, 3);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lookup("Hund")[0].word_type, "noun");
        assert_eq!(dict.lookup("laut")[0].word_type, "");
    }

    #[test]
    fn reads_ding() {
        let data = "Haus {n} | Häuser {pl} :: house | houses\n";
        let mut dict = DictionaryStore::new("de", "en");

        read_dictionary(Cursor::new(data), DictionaryFormat::Ding, &mut dict).unwrap();

        assert!(dict.contains("Haus"));
        assert!(dict.contains("Häuser"));
    }

    #[test]
    fn missing_file() {
        let err = load_dictionary(
            Path::new("/nonexistent/de-en.txt"),
            DictionaryFormat::Ding,
            "de",
            "en",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }
}
