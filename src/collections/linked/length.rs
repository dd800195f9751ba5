use std::num::NonZero;

/// The length of a non-empty list. Empty lists are represented by their state instead, so the
/// length of a list with contents can never be zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Adds `other`, saturating at [`usize::MAX`]. A list can't hold that many nodes in memory
    /// anyway.
    pub const fn saturating_add(self, other: usize) -> Length {
        Length(self.0.saturating_add(other))
    }

    /// Subtracts `other`, returning [`None`] if the result would be zero (or less).
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => match NonZero::new(res) {
                Some(len) => Some(Length(len)),
                None => None,
            },
            None => None,
        }
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
