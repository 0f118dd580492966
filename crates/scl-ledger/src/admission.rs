use crate::error::LedgerError;

/// Outcome of passing a remote record through the admission gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Accepted into the local record set. `replaced` is `true` when a
    /// record with the same id was already present.
    Admitted { id: String, replaced: bool },
    /// Discarded. Carries `ValidationFailure` or `MalformedInput`.
    Rejected(LedgerError),
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_admitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        let ok = Admission::Admitted {
            id: "r1".into(),
            replaced: false,
        };
        assert!(ok.is_admitted());
        assert!(!ok.is_rejected());

        let bad = Admission::Rejected(LedgerError::MalformedInput("no id".into()));
        assert!(bad.is_rejected());
    }
}
