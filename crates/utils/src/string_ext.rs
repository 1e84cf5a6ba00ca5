/// Extends string types with useful functions
pub trait StringExt {
    /// Capitalises the first letter in a string
    ///
    /// ```rust
    /// # use mctools_utils::StringExt;
    /// assert_eq!("neutron, photon".capitalise(), "Neutron, photon");
    /// assert_eq!("".capitalise(), "");
    /// ```
    fn capitalise(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut chars = self.as_ref().chars();
        chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default()
    }
}
