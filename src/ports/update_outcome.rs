//! Result of a conditional store mutation.

/// How many records a conditional mutation matched and changed.
///
/// `matched == 0` means the match conditions no longer held (the record
/// is gone or was changed concurrently). `modified` may be zero even when
/// `matched` is one if the patch was already in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl UpdateOutcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn matched(modified: bool) -> Self {
        Self {
            matched: 1,
            modified: u64::from(modified),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched > 0
    }
}
