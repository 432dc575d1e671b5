#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
}

impl Severity {
    /// One-letter code, as printed by console log viewers (`D/Tag: ...`).
    pub fn code(self) -> char {
        match self {
            Severity::Debug => 'D',
            Severity::Info => 'I',
        }
    }
}
