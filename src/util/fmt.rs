use std::fmt::{self, Debug, Formatter};

/// Debug formats as the contained string, without quotes. Used to nest the [`Display`] output of
/// a collection inside its [`Debug`] output.
///
/// [`Display`]: std::fmt::Display
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
