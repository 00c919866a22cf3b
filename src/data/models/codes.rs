//! Open code types for the enumerated fields of the HMS IAP server API.
//!
//! Huawei documents a fixed set of values for each of these fields, but adds
//! new ones over time. The codes are therefore modelled as transparent
//! newtypes over the wire primitive with associated constants for the
//! documented values, so that undocumented values still decode and re-encode
//! unchanged.

/// Defines an integer-coded field type.
macro_rules! define_int_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$const_meta:meta])*
                $const_name:ident = $value:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $const_name: Self = Self($value);
            )+

            pub const fn value(self) -> i64 {
                self.0
            }

            /// Whether the value is one of the documented codes.
            pub fn is_known(self) -> bool {
                [$(Self::$const_name),+].contains(&self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(code: $name) -> Self {
                code.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Defines a string-coded field type.
macro_rules! define_str_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$const_meta:meta])*
                $const_name:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub ::std::borrow::Cow<'static, str>);

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $const_name: Self = Self(::std::borrow::Cow::Borrowed($value));
            )+

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the value is one of the documented codes.
            pub fn is_known(&self) -> bool {
                [$($value),+].contains(&self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(::std::borrow::Cow::Owned(value))
            }
        }

        impl From<&'static str> for $name {
            fn from(value: &'static str) -> Self {
                Self(::std::borrow::Cow::Borrowed(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use define_int_code;
pub(crate) use define_str_code;
