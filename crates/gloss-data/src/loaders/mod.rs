pub mod dictcc;
pub mod dictionary;
pub mod ding;
pub mod language;

use std::io::BufRead;

use crate::error::LoadError;

/// Trimmed lines of a reference file, without blank lines and `#` comments.
/// Items are `(line number, line)`.
pub(crate) fn content_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<(usize, String), LoadError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(Ok((index + 1, line.to_string())))
                }
            }
            Err(e) => Some(Err(LoadError::from(e))),
        })
}
