use std::{
    fmt::{Display, Formatter},
    sync::atomic::{fence, Ordering},
};

/// The memory ordering discipline applied around the timed loop.
///
/// The choice never affects the counter invariant. The increment itself is a
/// single atomic read-modify-write either way; what changes is whether the
/// fence points surrounding the loop take part in a single global order
/// visible to all threads, which is exactly the cost difference being
/// measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemoryModel {
    SeqCst,
    #[default]
    Relaxed,
}

impl MemoryModel {
    /// Parses the label printed by the benchmark header. Anything else is
    /// rejected so a typo cannot silently select the wrong discipline.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "seq_cst" => Some(Self::SeqCst),
            "relaxed" => Some(Self::Relaxed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SeqCst => "seq_cst",
            Self::Relaxed => "relaxed",
        }
    }

    /// The ordering handed to the counter operations inside the timed loop.
    #[inline]
    pub fn update_ordering(self) -> Ordering {
        match self {
            Self::SeqCst => Ordering::SeqCst,
            Self::Relaxed => Ordering::Relaxed,
        }
    }

    /// Issues a full fence in `SeqCst` mode. In `Relaxed` mode nothing is
    /// emitted; the only guarantee left is the atomicity of each increment.
    #[inline]
    pub fn fence(self) {
        if self == Self::SeqCst {
            fence(Ordering::SeqCst);
        }
    }
}

impl Display for MemoryModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use {super::MemoryModel, std::sync::atomic::Ordering};

    #[test]
    fn labels_match_the_selection() {
        assert_eq!(MemoryModel::SeqCst.label(), "seq_cst");
        assert_eq!(MemoryModel::Relaxed.label(), "relaxed");
        assert_eq!(MemoryModel::SeqCst.to_string(), "seq_cst");
    }

    #[test]
    fn parse_round_trips_and_rejects_garbage() {
        assert_eq!(MemoryModel::parse("seq_cst"), Some(MemoryModel::SeqCst));
        assert_eq!(MemoryModel::parse("relaxed"), Some(MemoryModel::Relaxed));
        assert_eq!(MemoryModel::parse("seqcst"), None);
        assert_eq!(MemoryModel::parse(""), None);
    }

    #[test]
    fn default_is_relaxed() {
        assert_eq!(MemoryModel::default(), MemoryModel::Relaxed);
    }

    #[test]
    fn update_ordering_matches_the_mode() {
        assert_eq!(MemoryModel::SeqCst.update_ordering(), Ordering::SeqCst);
        assert_eq!(MemoryModel::Relaxed.update_ordering(), Ordering::Relaxed);
    }
}
