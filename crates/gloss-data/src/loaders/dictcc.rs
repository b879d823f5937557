use gloss_core::DictionaryStore;

/// `source<TAB>target[<TAB>word type]`, further columns ignored
pub fn parse_line(dict: &mut DictionaryStore, line: &str) -> bool {
    let mut fields = line.split('\t');
    let (Some(source), Some(target)) = (fields.next(), fields.next()) else {
        return false;
    };
    let word_type = fields.next().unwrap_or_default();

    dict.add_entry(source.trim(), target.trim(), word_type.trim())
}
