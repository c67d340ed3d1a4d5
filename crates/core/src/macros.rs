// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`]: `Display` impl mapping enum variants to string literals
//! - [`wire_enum!`]: closed enum with an `Unknown` default and a total token converter
//! - [`setters!`]: setter methods for config structs

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// Unit variants match directly; data-carrying variants use `(..)` to ignore fields.
///
/// ```ignore
/// crate::simple_display! {
///     MyEnum {
///         Foo => "foo",
///         Bar(..) => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Generate a closed enumeration backed by exact wire tokens.
///
/// An `Unknown` variant is prepended and used as the `Default`. Token
/// comparison is case-sensitive; anything unmatched maps to `Unknown`.
///
/// ```ignore
/// crate::wire_enum! {
///     /// Scheduling priority of the folding core.
///     pub enum CorePriority {
///         Idle => "idle",
///         Low => "low",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
        pub enum $name {
            #[default]
            Unknown,
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every recognized member, in declaration order.
            pub const KNOWN: &'static [$name] = &[$( $name::$variant ),+];

            /// Map a raw wire token to a member. Never fails.
            pub fn from_token(token: &str) -> Self {
                match token {
                    $( $token => Self::$variant, )+
                    _ => Self::Unknown,
                }
            }

            /// The wire token for this member, `None` for `Unknown`.
            pub fn token(&self) -> Option<&'static str> {
                match self {
                    Self::Unknown => None,
                    $( Self::$variant => Some($token), )+
                }
            }
        }

        impl $crate::FromToken for $name {
            fn from_token(token: &str) -> Self {
                $name::from_token(token)
            }
        }

        $crate::simple_display! {
            $name {
                Unknown => "Unknown",
                $( $variant => $token, )+
            }
        }
    };
}

/// Generate setter methods inside an existing `impl` block.
///
/// ```ignore
/// impl MyConfig {
///     fah_core::setters! {
///         into { name: String }
///         set { count: u32 }
///         option { label: String }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into {
            $( $into_field:ident : $into_ty:ty ),* $(,)?
        })?
        $(set {
            $( $set_field:ident : $set_ty:ty ),* $(,)?
        })?
        $(option {
            $( $opt_field:ident : $opt_ty:ty ),* $(,)?
        })?
    ) => {
        $($(
            pub fn $into_field(mut self, v: impl Into<$into_ty>) -> Self {
                self.$into_field = v.into();
                self
            }
        )*)?

        $($(
            pub fn $set_field(mut self, v: $set_ty) -> Self {
                self.$set_field = v;
                self
            }
        )*)?

        $($(
            pub fn $opt_field(mut self, v: impl Into<$opt_ty>) -> Self {
                self.$opt_field = Some(v.into());
                self
            }
        )*)?
    };
}
