//! Macro for the small string-tagged enumerations used across the models.

/// Defines a fieldless enum with a stable wire string and a human label
/// per variant.
///
/// The generated type gets:
/// - `ALL`, every variant in declaration order
/// - `as_str()` returning the wire string (also the serde representation)
/// - `label()` returning the display label
/// - `Display` (wire string) and a case-insensitive `FromStr` accepting
///   either the wire string or the label
///
/// ```ignore
/// labeled_enum! {
///     pub enum Severity {
///         Low => ("low", "Low"),
///         High => ("high", "High"),
///     }
/// }
/// ```
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable wire identifier.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::AuditDeskError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.as_str().eq_ignore_ascii_case(needle)
                            || v.label().eq_ignore_ascii_case(needle)
                    })
                    .ok_or_else(|| {
                        $crate::error::AuditDeskError::validation(format!(
                            concat!("unknown ", stringify!($name), " `{}`"),
                            needle
                        ))
                    })
            }
        }
    };
}
