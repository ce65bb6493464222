use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;
use wordtrie_engine::Dict;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedStats {
    pub new_words: usize,
    pub repeats: usize,
    pub skipped: usize,
}

/// Seeds the dictionary from a word-per-line file.
///
/// Blank lines and `#` comments are ignored; repeated words accumulate
/// frequency. Lines with out-of-alphabet symbols abort in strict mode
/// and are logged and skipped otherwise.
pub fn load_into(dict: &mut Dict, path: &Path, strict: bool) -> Result<SeedStats> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;
    seed_words(dict, raw.lines(), strict)
        .with_context(|| format!("failed to seed dictionary from {}", path.display()))
}

pub fn seed_words<'a, I>(dict: &mut Dict, lines: I, strict: bool) -> Result<SeedStats>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stats = SeedStats::default();
    for (line_no, line) in lines.into_iter().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        match dict.insert(word) {
            Ok(true) => stats.new_words += 1,
            Ok(false) => stats.repeats += 1,
            Err(err) if strict => bail!("line {}: {err}", line_no + 1),
            Err(err) => {
                warn!(line = line_no + 1, "skipping wordlist entry: {err}");
                stats.skipped += 1;
            }
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_and_counts() {
        let mut dict = Dict::new();
        let lines = ["park", "", "# comment", "park", "cart"];
        let stats = seed_words(&mut dict, lines, false).unwrap();

        assert_eq!(
            stats,
            SeedStats {
                new_words: 2,
                repeats: 1,
                skipped: 0
            }
        );
        let park = dict.lookup("park").unwrap().unwrap();
        assert_eq!(dict.frequency(park), 2);
    }

    #[test]
    fn lenient_mode_skips_bad_lines() {
        let mut dict = Dict::new();
        let lines = ["park", "Bad!", "cart"];
        let stats = seed_words(&mut dict, lines, false).unwrap();

        assert_eq!(stats.new_words, 2);
        assert_eq!(stats.skipped, 1);
        assert!(dict.lookup("cart").unwrap().is_some());
    }

    #[test]
    fn strict_mode_aborts_on_bad_line() {
        let mut dict = Dict::new();
        let lines = ["park", "Bad!", "cart"];
        let err = seed_words(&mut dict, lines, true).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
