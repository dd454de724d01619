//! Macros for declaring phase enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Variant names double as phase names. Variants listed under `final:` and
/// `error:` answer `true` to `is_final` and `is_error` respectively.
///
/// # Example
///
/// ```
/// use keycalc::core::State;
/// use keycalc::state_enum;
///
/// state_enum! {
///     pub enum KeypadLock {
///         Unlocked,
///         Locked,
///         Jammed,
///     }
///     final: [Jammed]
///     error: [Jammed]
/// }
///
/// assert_eq!(KeypadLock::Locked.name(), "Locked");
/// assert!(KeypadLock::Jammed.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(clippy::match_single_binding, clippy::match_like_matches_macro)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(clippy::match_single_binding, clippy::match_like_matches_macro)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
