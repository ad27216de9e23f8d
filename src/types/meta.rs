/// Facts about one mapping run, shared read-only by every output transformer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Meta {
    /// `true` iff a registered mapping recognized the raw error.
    pub is_known: bool,
}

impl Meta {
    #[inline]
    pub const fn known() -> Self {
        Self { is_known: true }
    }

    #[inline]
    pub const fn unknown() -> Self {
        Self { is_known: false }
    }
}
