//! Reading `git diff --name-only` output
//!
//! - `DiffFilter`: the change statuses passed to `--diff-filter`
//! - `change_set`: the parsed list of changed paths
//! - `quoted_path`: decoding of git's C-style quoted paths

pub mod change_set;
pub mod quoted_path;

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 1 << 0;
        const COPIED = 1 << 1;
        const DELETED = 1 << 2;
        const MODIFIED = 1 << 3;
        const RENAMED = 1 << 4;
        const TYPE_CHANGED = 1 << 5;
        const UNMERGED = 1 << 6;
        const UNKNOWN = 1 << 7;
        const BROKEN = 1 << 8;
    }
}

const STATUS_LETTERS: [(DiffFilter, char); 9] = [
    (DiffFilter::ADDED, 'A'),
    (DiffFilter::COPIED, 'C'),
    (DiffFilter::DELETED, 'D'),
    (DiffFilter::MODIFIED, 'M'),
    (DiffFilter::RENAMED, 'R'),
    (DiffFilter::TYPE_CHANGED, 'T'),
    (DiffFilter::UNMERGED, 'U'),
    (DiffFilter::UNKNOWN, 'X'),
    (DiffFilter::BROKEN, 'B'),
];

impl DiffFilter {
    /// Every status whose path still exists in the newer revision.
    pub fn existing_files() -> Self {
        Self::all().difference(Self::DELETED)
    }

    /// Renders the value of `--diff-filter`.
    ///
    /// git accepts lowercase letters as exclusions, so whichever of the
    /// included or excluded set is shorter gets written out.
    pub fn to_arg(&self) -> String {
        let excluded = self.complement();

        if !excluded.is_empty() && excluded.bits().count_ones() < self.bits().count_ones() {
            Self::letters(excluded)
                .map(|letter| letter.to_ascii_lowercase())
                .collect()
        } else {
            Self::letters(*self).collect()
        }
    }

    fn letters(filter: DiffFilter) -> impl Iterator<Item = char> {
        STATUS_LETTERS
            .into_iter()
            .filter(move |(status, _)| filter.contains(*status))
            .map(|(_, letter)| letter)
    }
}
