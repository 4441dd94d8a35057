use std::collections::{BTreeMap, BTreeSet};

/// Seed key to the file names that carry it.
pub type SeedGroups = BTreeMap<String, BTreeSet<String>>;

/// Key of the single group used when seed grouping is off.
pub const UNGROUPED_KEY: &str = "0";

/// Extract `<seed>` from a `<number>-<seed>.<ext>` file name.
///
/// The name must contain exactly one `-`, and the part after it exactly one `.`.
pub fn parse_seed(filename: &str) -> Option<&str> {
    let (_number, rest) = split_exactly_once(filename, '-')?;
    let (seed, _ext) = split_exactly_once(rest, '.')?;
    Some(seed)
}

fn split_exactly_once(s: &str, sep: char) -> Option<(&str, &str)> {
    let (head, tail) = s.split_once(sep)?;
    if tail.contains(sep) {
        return None;
    }
    Some((head, tail))
}

/// Bucket file names by seed; names that do not follow the pattern join no group.
pub fn group_by_seed<I, S>(filenames: I) -> SeedGroups
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups = SeedGroups::new();
    for name in filenames {
        let name = name.as_ref();
        match parse_seed(name) {
            Some(seed) => {
                groups
                    .entry(seed.to_owned())
                    .or_default()
                    .insert(name.to_owned());
            }
            None => tracing::debug!(file = name, "file name carries no seed, excluded"),
        }
    }
    groups
}

/// Every file name in one group under [`UNGROUPED_KEY`], without any pattern check.
pub fn single_group<I, S>(filenames: I) -> SeedGroups
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let all = filenames
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect::<BTreeSet<_>>();
    SeedGroups::from([(UNGROUPED_KEY.to_owned(), all)])
}

#[cfg(test)]
#[path = "../../tests/unit/assets/seed.rs"]
mod tests;
