//! Data Science wire models
//!
//! Structs map the service's camelCase JSON one-to-one and also accept the
//! snake_case spelling of each field on input. Enums keep values this SDK
//! does not know about in an `UnknownValue` variant instead of failing.

/// Common surface of every generated enum
pub trait WireEnum {
    /// Wire values of the known variants
    const ALLOWED: &'static [&'static str];

    fn as_str(&self) -> &str;

    fn is_known(&self) -> bool;
}

/// Declare a string enum with an `UnknownValue(String)` fallback.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this SDK version, kept verbatim
            UnknownValue(String),
        }

        impl $name {
            fn lookup(value: &str) -> Option<Self> {
                match value {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Convert a wire value, never failing
            pub fn from_wire(value: &str) -> Self {
                Self::lookup(value).unwrap_or_else(|| {
                    tracing::warn!(
                        kind = stringify!($name),
                        value,
                        "Unknown enum value, keeping it as UnknownValue"
                    );
                    Self::UnknownValue(value.to_string())
                })
            }
        }

        impl $crate::models::WireEnum for $name {
            const ALLOWED: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::UnknownValue(raw) => raw,
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, Self::UnknownValue(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::models::WireEnum::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            /// Strict parse, for values coming from callers
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::lookup(s).ok_or_else(|| $crate::error::Error::InvalidEnumValue {
                    parameter: stringify!($name),
                    value: s.to_string(),
                    allowed: <Self as $crate::models::WireEnum>::ALLOWED,
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::models::WireEnum::as_str(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&raw))
            }
        }
    };
}

/// `Eq` and `Hash` through the canonical wire form.
///
/// Float fields hash with `-0.0` folded into `0.0`, matching `==`. A NaN
/// cannot come from JSON; one set by hand makes the value unequal to itself.
macro_rules! wire_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Eq for $ty {}

            impl std::hash::Hash for $ty {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    $crate::models::wire::hash_wire(self, state)
                }
            }
        )+
    };
}

pub mod wire;

mod common;
mod job;
mod job_run;
mod model;
mod project;
mod work_request;

pub use common::*;
pub use job::*;
pub use job_run::*;
pub use model::*;
pub use project::*;
pub use wire::WireModel;
pub use work_request::*;
