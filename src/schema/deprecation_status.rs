/// Whether a field or enum value has been deprecated, and why.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeprecationStatus {
    #[default]
    Current,
    Deprecated(Option<String>),
}

impl DeprecationStatus {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, DeprecationStatus::Deprecated(_))
    }

    /// The deprecation reason, when one was given.
    pub fn reason(&self) -> Option<&str> {
        match self {
            DeprecationStatus::Current => None,
            DeprecationStatus::Deprecated(reason) => reason.as_deref(),
        }
    }
}
