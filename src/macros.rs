//! Macros for ergonomic catalog construction.

/// Build a [`ComboCatalog`](crate::catalog::ComboCatalog) from literal
/// `key => trigger` pairs.
///
/// Expands to [`ComboCatalog::from_entries`](crate::catalog::ComboCatalog::from_entries),
/// so the whole definition is validated and every violation is reported.
///
/// # Example
///
/// ```
/// use comborec::combo_catalog;
///
/// let catalog = combo_catalog! {
///     "WW" => "DoubleUp",
///     "WS" => "Duck",
///     "SSS" => "Crouch3",
/// }
/// .unwrap();
///
/// assert_eq!(catalog.len(), 3);
/// ```
#[macro_export]
macro_rules! combo_catalog {
    () => {
        $crate::catalog::ComboCatalog::from_entries(::core::iter::empty::<(&str, &str)>())
    };
    ( $( $key:literal => $trigger:literal ),* $(,)? ) => {
        $crate::catalog::ComboCatalog::from_entries([
            $( ($key, $trigger) ),*
        ])
    };
}
