//! Macros for generating per-scheme predicates.

/// Generates one `is_*` predicate per scheme on a type with a `scheme`
/// field.
///
/// # Example
///
/// ```ignore
/// impl IdentificationNumber {
///     scheme_predicates! {
///         /// Returns true for T-numbers.
///         is_t_number => TNumber,
///     }
/// }
/// ```
macro_rules! scheme_predicates {
    ($($(#[$meta:meta])* $name:ident => $scheme:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name(&self) -> bool {
                self.scheme == $crate::Scheme::$scheme
            }
        )+
    };
}

pub(crate) use scheme_predicates;
