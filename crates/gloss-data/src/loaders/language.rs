use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use gloss_core::{LanguageProfile, LanguageRules};
use regex::Regex;

use super::content_lines;
use crate::error::LoadError;

// "der 5311231" or just "der"
static FREQUENCY_RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*([0-9]*)$").expect("Invalid frequency record pattern"));

/// File names inside a language directory
#[derive(Debug, Clone)]
pub struct LanguageFiles {
    pub frequency: String,
    pub variant_patterns: String,
    pub separable_prefixes: String,
    pub explicit_variants: String,
}

impl Default for LanguageFiles {
    fn default() -> Self {
        Self {
            frequency: "frequency.txt".to_string(),
            variant_patterns: "variant-patterns.txt".to_string(),
            separable_prefixes: "separable-prefixes.txt".to_string(),
            explicit_variants: "explicit-variants.txt".to_string(),
        }
    }
}

/// Build the profile for `code` from `dir`. The frequency list is required,
/// the other files are optional.
pub fn load_language(
    dir: &Path,
    code: &str,
    rules: Box<dyn LanguageRules>,
    files: &LanguageFiles,
) -> Result<LanguageProfile, LoadError> {
    tracing::info!("Loading language: {}", code);
    let mut profile = LanguageProfile::with_rules(code, rules);

    if let Some(reader) = open_optional(&dir.join(&files.variant_patterns))? {
        let count = read_variant_patterns(reader, &mut profile)?;
        tracing::info!("Read {} variant patterns for {}", count, code);
    }

    if let Some(reader) = open_optional(&dir.join(&files.explicit_variants))? {
        let count = read_explicit_variants(reader, &mut profile)?;
        tracing::info!("Read {} irregular forms for {}", count, code);
    }

    if let Some(reader) = open_optional(&dir.join(&files.separable_prefixes))? {
        let count = read_separable_prefixes(reader, &mut profile)?;
        tracing::info!("Read {} separable prefixes for {}", count, code);
    }

    let path = dir.join(&files.frequency);
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path));
    }
    let start = Instant::now();
    let records = read_frequency_list(BufReader::new(File::open(&path)?))?;
    let count = records.len();
    profile.add_frequency_records(records);
    tracing::info!("Loaded {} frequent words in {:?}", count, start.elapsed());

    Ok(profile)
}

fn open_optional(path: &Path) -> Result<Option<BufReader<File>>, LoadError> {
    if !path.is_file() {
        tracing::warn!("Skipping missing file: {}", path.display());
        return Ok(None);
    }
    Ok(Some(BufReader::new(File::open(path)?)))
}

/// One word per line with an optional trailing occurrence count
pub fn read_frequency_list<R: BufRead>(reader: R) -> Result<Vec<(String, Option<u64>)>, LoadError> {
    let mut records = Vec::new();
    for line in content_lines(reader) {
        let (_, line) = line?;
        if let Some(record) = parse_frequency_record(&line) {
            records.push(record);
        }
    }
    Ok(records)
}

fn parse_frequency_record(line: &str) -> Option<(String, Option<u64>)> {
    let caps = FREQUENCY_RECORD.captures(line)?;
    let word = caps.get(1)?.as_str();
    if word.is_empty() {
        return None;
    }
    let count = caps.get(2).and_then(|m| m.as_str().parse().ok());
    Some((word.to_string(), count))
}

/// `variantRegex,canonicalReplacement[,lastResort]`
pub fn read_variant_patterns<R: BufRead>(
    reader: R,
    profile: &mut LanguageProfile,
) -> Result<usize, LoadError> {
    let mut count = 0;
    for line in content_lines(reader) {
        let (number, line) = line?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            tracing::warn!("Ignoring variant pattern on line {}: {}", number, line);
            continue;
        }

        let last_resort = fields
            .get(2)
            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("true"));
        profile
            .add_variant_pattern(fields[0], fields[1], last_resort)
            .map_err(|source| LoadError::InvalidPattern { line: number, source })?;
        count += 1;
    }
    Ok(count)
}

/// `variant,canonical`
pub fn read_explicit_variants<R: BufRead>(
    reader: R,
    profile: &mut LanguageProfile,
) -> Result<usize, LoadError> {
    let mut count = 0;
    for line in content_lines(reader) {
        let (number, line) = line?;
        match line.split_once(',') {
            Some((variant, canonical)) if !variant.trim().is_empty() && !canonical.trim().is_empty() => {
                profile.add_explicit_variant(canonical.trim(), variant.trim());
                count += 1;
            }
            _ => tracing::warn!("Ignoring irregular form on line {}: {}", number, line),
        }
    }
    Ok(count)
}

pub fn read_separable_prefixes<R: BufRead>(
    reader: R,
    profile: &mut LanguageProfile,
) -> Result<usize, LoadError> {
    let mut count = 0;
    for line in content_lines(reader) {
        let (_, prefix) = line?;
        profile.add_separable_prefix(&prefix);
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use gloss_core::{DefaultRules, RARE};

    use super::*;

    #[test]
    fn frequency_records() {
        let data = "# word count\nder 5000\ndie\t4000\n\nund\n1234\n";
        let records = read_frequency_list(Cursor::new(data)).unwrap();

        assert_eq!(
            records,
            vec![
                ("der".to_string(), Some(5000)),
                ("die".to_string(), Some(4000)),
                ("und".to_string(), None),
            ]
        );
    }

    #[test]
    fn variant_patterns() {
        let data = "st$,en\nt$,en,TRUE\n# comment\nbroken\n";
        let mut profile = LanguageProfile::new("de");

        let count = read_variant_patterns(Cursor::new(data), &mut profile).unwrap();

        assert_eq!(count, 2);
        assert!(!profile.variant_patterns()[0].last_resort);
        assert!(profile.variant_patterns()[1].last_resort);
    }

    #[test]
    fn invalid_pattern_reports_line() {
        let data = "st$,en\n(open,x\n";
        let mut profile = LanguageProfile::new("de");

        let err = read_variant_patterns(Cursor::new(data), &mut profile).unwrap_err();
        assert!(matches!(err, LoadError::InvalidPattern { line: 2, .. }));
    }

    #[test]
    fn explicit_variants_and_prefixes() {
        let mut profile = LanguageProfile::new("de");

        let variants = read_explicit_variants(Cursor::new("rannte,rennen\nkaputt\n"), &mut profile).unwrap();
        let prefixes = read_separable_prefixes(Cursor::new("an\nauf\n"), &mut profile).unwrap();

        assert_eq!(variants, 1);
        assert_eq!(profile.canonicals("rannte", false), vec!["rennen"]);
        assert_eq!(prefixes, 2);
        assert!(profile.is_separable_prefix("auf"));
    }

    #[test]
    fn missing_frequency_list_is_fatal() {
        let result = load_language(
            Path::new("/nonexistent/lang/de"),
            "de",
            Box::new(DefaultRules),
            &LanguageFiles::default(),
        );
        match result {
            Err(LoadError::FileNotFound(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("loaded without a frequency list"),
        }
    }

    #[test]
    fn ranks_follow_file_order() {
        let mut profile = LanguageProfile::new("de");
        let records = read_frequency_list(Cursor::new("der\ndie\nund\n")).unwrap();
        profile.add_frequency_records(records);

        assert_eq!(profile.frequency_rank("die"), 2);
        assert_eq!(profile.frequency_rank("Haus"), RARE);
    }
}
