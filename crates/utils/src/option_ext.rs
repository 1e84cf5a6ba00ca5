use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Either the value contained within `Some()` or "none"
    ///
    /// For example, a cell with no multiplier bin:
    ///
    /// ```rust
    /// # use mctools_utils::OptionExt;
    /// let multiplier: Option<usize> = Some(2);
    /// assert_eq!(multiplier.display(), "2");
    ///
    /// let multiplier: Option<usize> = None;
    /// assert_eq!(multiplier.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        self.as_ref()
            .map(|value| f!("{value}"))
            .unwrap_or_else(|| "none".into())
    }
}
