//! Stored Codes
//!
//! Closed enums are persisted either by ordinal (`SMALLINT` columns, relational
//! store) or by name (document store, event records). These traits give every
//! such enum the same two-way conversion.
//!
//! A stored code with no matching member means the reader and the writer
//! disagree about the schema. That is a deployment problem, not a request
//! problem: [`OrdinalCode::from_ordinal`] and [`NamedCode::from_code`] log and
//! abort. The `try_` variants return [`CodeMismatch`] for callers that report
//! drift themselves (startup checks, replay tools).

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// A stored code did not match any member of the declared set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeMismatch {
    #[error("unknown {enum_name} ordinal: {ordinal}")]
    Ordinal { enum_name: &'static str, ordinal: i16 },

    #[error("unknown {enum_name} code: {code}")]
    Code { enum_name: &'static str, code: String },

    #[error("{enum_name} declares {code} for more than one member")]
    Duplicate { enum_name: &'static str, code: String },
}

impl CodeMismatch {
    /// Log at `error` and abort the current thread.
    #[cold]
    pub fn abort(self) -> ! {
        tracing::error!(error = %self, "Stored code does not match schema");
        panic!("{self}")
    }
}

/// Enum persisted by ordinal
pub trait OrdinalCode: Copy + Eq + fmt::Debug + 'static {
    /// Name used in diagnostics
    const ENUM_NAME: &'static str;

    /// Every member, in declaration order
    const MEMBERS: &'static [Self];

    /// Stored ordinal of this member
    fn ordinal(&self) -> i16;

    fn try_from_ordinal(ordinal: i16) -> Result<Self, CodeMismatch> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|m| m.ordinal() == ordinal)
            .ok_or(CodeMismatch::Ordinal {
                enum_name: Self::ENUM_NAME,
                ordinal,
            })
    }

    /// Resolve a stored ordinal; aborts on schema drift.
    fn from_ordinal(ordinal: i16) -> Self {
        Self::try_from_ordinal(ordinal).unwrap_or_else(|e| e.abort())
    }
}

/// Enum persisted by name
pub trait NamedCode: Copy + Eq + fmt::Debug + 'static {
    const ENUM_NAME: &'static str;

    const MEMBERS: &'static [Self];

    /// Stored name of this member
    fn code(&self) -> &'static str;

    fn try_from_code(code: &str) -> Result<Self, CodeMismatch> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|m| m.code() == code)
            .ok_or_else(|| CodeMismatch::Code {
                enum_name: Self::ENUM_NAME,
                code: code.to_owned(),
            })
    }

    /// Resolve a stored name; aborts on schema drift.
    fn from_code(code: &str) -> Self {
        Self::try_from_code(code).unwrap_or_else(|e| e.abort())
    }
}

/// Map a member of one named enum onto the member of `D` with the same name.
///
/// Record enums and entity enums are separate types with the same member
/// names; a name missing on the target side aborts like any stored code.
pub fn by_name<S: NamedCode, D: NamedCode>(source: S) -> D {
    D::from_code(source.code())
}

/// Non-aborting [`by_name`]
pub fn try_by_name<S: NamedCode, D: NamedCode>(source: S) -> Result<D, CodeMismatch> {
    D::try_from_code(source.code())
}

/// Check that no two members of an ordinal enum share a code.
pub fn verify_ordinals<E: OrdinalCode>() -> Result<(), CodeMismatch> {
    let mut seen = HashSet::with_capacity(E::MEMBERS.len());
    for member in E::MEMBERS {
        if !seen.insert(member.ordinal()) {
            return Err(CodeMismatch::Duplicate {
                enum_name: E::ENUM_NAME,
                code: member.ordinal().to_string(),
            });
        }
    }
    Ok(())
}

/// Check that no two members of a named enum share a code.
pub fn verify_codes<E: NamedCode>() -> Result<(), CodeMismatch> {
    let mut seen = HashSet::with_capacity(E::MEMBERS.len());
    for member in E::MEMBERS {
        if !seen.insert(member.code()) {
            return Err(CodeMismatch::Duplicate {
                enum_name: E::ENUM_NAME,
                code: member.code().to_owned(),
            });
        }
    }
    Ok(())
}

/// Implement [`NamedCode`], `Display` and string serde for a fieldless enum.
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum Shift { Early, Late }
///
/// kernel::named_code!(Shift, "Shift", { Early => "EARLY", Late => "LATE" });
///
/// use kernel::code::NamedCode;
/// assert_eq!(Shift::from_code("LATE"), Shift::Late);
/// assert_eq!(Shift::Early.to_string(), "EARLY");
/// ```
#[macro_export]
macro_rules! named_code {
    ($t:ident, $name:expr, { $($variant:ident => $code:literal),+ $(,)? }) => {
        impl $crate::code::NamedCode for $t {
            const ENUM_NAME: &'static str = $name;
            const MEMBERS: &'static [Self] = &[$($t::$variant),+];

            fn code(&self) -> &'static str {
                match self {
                    $($t::$variant => $code),+
                }
            }
        }

        impl ::std::fmt::Display for $t {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::code::NamedCode::code(self))
            }
        }

        impl $crate::__serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str($crate::code::NamedCode::code(self))
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <$t as $crate::code::NamedCode>::try_from_code(&raw)
                    .map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}

/// Implement [`OrdinalCode`] for a `#[repr(i16)]` enum with explicit discriminants.
#[macro_export]
macro_rules! ordinal_code {
    ($t:ident, $name:expr, [ $($variant:ident),+ $(,)? ]) => {
        impl $crate::code::OrdinalCode for $t {
            const ENUM_NAME: &'static str = $name;
            const MEMBERS: &'static [Self] = &[$($t::$variant),+];

            #[inline]
            fn ordinal(&self) -> i16 {
                *self as i16
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(i16)]
    enum Light {
        Red = 0,
        Amber = 1,
        Green = 2,
    }

    crate::ordinal_code!(Light, "Light", [Red, Amber, Green]);
    crate::named_code!(Light, "Light", {
        Red => "RED",
        Amber => "AMBER",
        Green => "GREEN",
    });

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Broken {
        A,
        B,
    }

    impl NamedCode for Broken {
        const ENUM_NAME: &'static str = "Broken";
        const MEMBERS: &'static [Self] = &[Broken::A, Broken::B];

        fn code(&self) -> &'static str {
            "SAME"
        }
    }

    #[test]
    fn test_ordinal_lookup() {
        assert_eq!(Light::from_ordinal(0), Light::Red);
        assert_eq!(Light::from_ordinal(2), Light::Green);
        assert_eq!(
            Light::try_from_ordinal(7),
            Err(CodeMismatch::Ordinal {
                enum_name: "Light",
                ordinal: 7
            })
        );
    }

    #[test]
    fn test_code_lookup() {
        assert_eq!(Light::from_code("AMBER"), Light::Amber);
        assert!(Light::try_from_code("amber").is_err());
    }

    #[test]
    #[should_panic(expected = "unknown Light ordinal: 9")]
    fn test_unknown_ordinal_is_fatal() {
        let _ = Light::from_ordinal(9);
    }

    #[test]
    #[should_panic(expected = "unknown Light code: BLUE")]
    fn test_unknown_code_is_fatal() {
        let _ = Light::from_code("BLUE");
    }

    #[test]
    fn test_display_and_serde_use_code() {
        assert_eq!(Light::Amber.to_string(), "AMBER");
        assert_eq!(serde_json::to_string(&Light::Green).unwrap(), "\"GREEN\"");
        assert_eq!(
            serde_json::from_str::<Light>("\"RED\"").unwrap(),
            Light::Red
        );
        // A bad code in a payload is a deserialization error, not an abort
        assert!(serde_json::from_str::<Light>("\"BLUE\"").is_err());
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Signal {
        Red,
        Green,
    }

    crate::named_code!(Signal, "Signal", { Red => "RED", Green => "GREEN" });

    #[test]
    fn test_by_name() {
        let light: Light = by_name(Signal::Green);
        assert_eq!(light, Light::Green);
        assert_eq!(try_by_name::<Light, Signal>(Light::Red), Ok(Signal::Red));
        assert!(try_by_name::<Light, Signal>(Light::Amber).is_err());
    }

    #[test]
    #[should_panic(expected = "unknown Signal code: AMBER")]
    fn test_by_name_missing_member_is_fatal() {
        let _: Signal = by_name(Light::Amber);
    }

    #[test]
    fn test_verify() {
        assert!(verify_ordinals::<Light>().is_ok());
        assert!(verify_codes::<Light>().is_ok());
        assert!(matches!(
            verify_codes::<Broken>(),
            Err(CodeMismatch::Duplicate { enum_name: "Broken", .. })
        ));
    }
}
