/// Minimum number of fields a data row needs to carry a cost.
pub const MIN_FIELDS: usize = 10;

/// What happens to rows with fewer than [`MIN_FIELDS`] fields.
///
/// Short rows are dropped under every policy; the policy only decides whether
/// anybody hears about it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SkipPolicy {
    #[default]
    Silent,
    Warn,
}

/// What happens when the cost field is not a number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Abort the whole load on the first bad cost.
    #[default]
    Strict,
    /// Drop the offending row and keep going.
    Lenient,
}
