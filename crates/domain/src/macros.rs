//! Macro for giving closed enums a canonical string form
//!
//! Metric types and log severities are closed sets whose string values are
//! part of the wire contract. This macro keeps the mapping in one place and
//! derives `as_str`, `Display` and `FromStr` from it.
//!
//! # Example
//!
//! ```rust
//! use mldiag_domain::impl_canonical_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Phase {
//!     Warmup,
//!     Train,
//!     Eval,
//! }
//!
//! impl_canonical_str_conversions!(Phase {
//!     Warmup => "warmup",
//!     Train => "train",
//!     Eval => "eval",
//! });
//!
//! assert_eq!(Phase::Train.as_str(), "train");
//! assert_eq!("EVAL".parse::<Phase>().unwrap(), Phase::Eval);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for a closed enum
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical strings
///
/// Parsing is ASCII case-insensitive; formatting always yields the canonical
/// string exactly as written in the mapping.
#[macro_export]
macro_rules! impl_canonical_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string value of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
