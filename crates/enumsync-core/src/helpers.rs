//! The EnumHelpers capability
//!
//! A backend enum becomes visible to the frontend in two steps:
//!
//! 1. declare it with [`backed_enum!`](crate::backed_enum), which implements
//!    [`BackedEnum`] (string values, declared names, case order);
//! 2. opt in with `impl EnumHelpers for MyEnum {}`, optionally overriding
//!    [`EnumHelpers::label`] with an exhaustive `match`.
//!
//! Registration in an [`EnumRegistry`](crate::EnumRegistry) is bounded on
//! `EnumHelpers`, so a type without the capability cannot be registered.

use crate::errors::RegistryError;
use crate::types::{EnumCase, EnumDefinition, EnumItem, EnumOption};

/// An enumeration whose cases are backed by string values
pub trait BackedEnum: Copy + Eq + 'static {
    /// Short type name used as the payload key (e.g. "UserStatus")
    const TYPE_NAME: &'static str;

    /// All cases in declaration order
    fn cases() -> &'static [Self];

    /// Wire/storage value of the case
    fn value(&self) -> &'static str;

    /// Declared identifier of the case (uppercase by convention)
    fn name(&self) -> &'static str;
}

/// Capability that exposes an enum to the frontend
pub trait EnumHelpers: BackedEnum {
    /// Human-readable label; the case name unless overridden
    fn label(&self) -> &'static str {
        self.name()
    }

    fn to_item(&self) -> EnumItem {
        EnumItem {
            value: self.value().to_string(),
            name: self.name().to_string(),
            label: self.label().to_string(),
        }
    }

    fn to_option(&self) -> EnumOption {
        EnumOption {
            value: self.value().to_string(),
            label: self.label().to_string(),
        }
    }

    /// `{value, name, label}` for every case, in declaration order
    fn to_array() -> Vec<EnumItem> {
        Self::cases().iter().map(Self::to_item).collect()
    }

    /// `{value, label}` for every case, in declaration order
    fn get_options() -> Vec<EnumOption> {
        Self::cases().iter().map(Self::to_option).collect()
    }

    fn values() -> Vec<&'static str> {
        Self::cases().iter().map(BackedEnum::value).collect()
    }

    fn names() -> Vec<&'static str> {
        Self::cases().iter().map(BackedEnum::name).collect()
    }

    fn labels() -> Vec<&'static str> {
        Self::cases().iter().map(EnumHelpers::label).collect()
    }

    fn from_value(value: &str) -> Option<Self> {
        Self::cases().iter().copied().find(|case| case.value() == value)
    }

    /// Snapshot of the enum as a registry definition
    fn definition() -> Result<EnumDefinition, RegistryError> {
        let cases = Self::cases()
            .iter()
            .map(|case| EnumCase::new(case.value(), case.name(), Some(case.label().to_string())))
            .collect();
        EnumDefinition::new(Self::TYPE_NAME, cases)
    }
}

/// Declare a string-backed enum and implement [`BackedEnum`] for it.
///
/// ```
/// use enumsync_core::{backed_enum, BackedEnum, EnumHelpers};
///
/// backed_enum! {
///     pub enum Visibility {
///         Public { name: "PUBLIC", value: "public" },
///         Private { name: "PRIVATE", value: "private" },
///     }
/// }
///
/// impl EnumHelpers for Visibility {}
///
/// assert_eq!(Visibility::Private.value(), "private");
/// assert_eq!(Visibility::Private.label(), "PRIVATE");
/// assert_eq!("public".parse::<Visibility>().ok(), Some(Visibility::Public));
/// ```
#[macro_export]
macro_rules! backed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident {
            $(
                $(#[$case_meta:meta])*
                $variant:ident { name: $name:literal, value: $value:literal }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $ty {
            $(
                $(#[$case_meta])*
                $variant,
            )*
        }

        impl $crate::BackedEnum for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn cases() -> &'static [Self] {
                &[$($ty::$variant),*]
            }

            fn value(&self) -> &'static str {
                match *self {
                    $($ty::$variant => $value,)*
                }
            }

            fn name(&self) -> &'static str {
                match *self {
                    $($ty::$variant => $name,)*
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::BackedEnum::value(self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::RegistryError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::BackedEnum>::cases()
                    .iter()
                    .copied()
                    .find(|case| $crate::BackedEnum::value(case) == s)
                    .ok_or_else(|| $crate::RegistryError::UnknownValue {
                        type_name: stringify!($ty).to_string(),
                        value: s.to_string(),
                    })
            }
        }

        impl $crate::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str($crate::BackedEnum::value(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                raw.parse().map_err($crate::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{BackedEnum, EnumHelpers, EnumItem, EnumOption, RegistryError};

    crate::backed_enum! {
        /// Publication state used by the tests
        pub enum Publication {
            Draft { name: "DRAFT", value: "draft" },
            Published { name: "PUBLISHED", value: "published" },
            Archived { name: "ARCHIVED", value: "archived" },
        }
    }

    impl EnumHelpers for Publication {
        fn label(&self) -> &'static str {
            match self {
                Publication::Draft => "Draft",
                Publication::Published => "Live",
                // falls back to the name
                Publication::Archived => self.name(),
            }
        }
    }

    crate::backed_enum! {
        enum Plain {
            One { name: "ONE", value: "1" },
            Two { name: "TWO", value: "2" },
        }
    }

    impl EnumHelpers for Plain {}

    crate::backed_enum! {
        enum Unused {}
    }

    impl EnumHelpers for Unused {}

    #[test]
    fn test_type_name_and_case_order() {
        assert_eq!(Publication::TYPE_NAME, "Publication");
        assert_eq!(
            Publication::cases(),
            &[Publication::Draft, Publication::Published, Publication::Archived]
        );
    }

    #[test]
    fn test_to_array_shape() {
        assert_eq!(
            Publication::to_array(),
            vec![
                EnumItem {
                    value: "draft".to_string(),
                    name: "DRAFT".to_string(),
                    label: "Draft".to_string()
                },
                EnumItem {
                    value: "published".to_string(),
                    name: "PUBLISHED".to_string(),
                    label: "Live".to_string()
                },
                EnumItem {
                    value: "archived".to_string(),
                    name: "ARCHIVED".to_string(),
                    label: "ARCHIVED".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_get_options_drops_name() {
        let options = Publication::get_options();
        let expected: Vec<EnumOption> = Publication::to_array().iter().map(EnumOption::from).collect();
        assert_eq!(options, expected);
    }

    #[test]
    fn test_default_label_is_name() {
        assert_eq!(Plain::labels(), vec!["ONE", "TWO"]);
        assert_eq!(Plain::One.label(), Plain::One.name());
    }

    #[test]
    fn test_value_name_label_lists() {
        assert_eq!(Publication::values(), vec!["draft", "published", "archived"]);
        assert_eq!(Publication::names(), vec!["DRAFT", "PUBLISHED", "ARCHIVED"]);
        assert_eq!(Publication::labels(), vec!["Draft", "Live", "ARCHIVED"]);
    }

    #[test]
    fn test_label_is_stable() {
        for case in Publication::cases() {
            assert_eq!(case.label(), case.label());
        }
    }

    #[test]
    fn test_from_value_and_parse() {
        assert_eq!(Publication::from_value("published"), Some(Publication::Published));
        assert_eq!(Publication::from_value("PUBLISHED"), None);
        assert_eq!(
            "gone".parse::<Publication>(),
            Err(RegistryError::UnknownValue {
                type_name: "Publication".to_string(),
                value: "gone".to_string()
            })
        );
        assert_eq!(Publication::Archived.to_string(), "archived");
    }

    #[test]
    fn test_serde_uses_value() {
        let json = serde_json::to_string(&Publication::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
        let back: Publication = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(back, Publication::Archived);
        assert!(serde_json::from_str::<Publication>("\"unknown\"").is_err());
    }

    #[test]
    fn test_definition_snapshot() {
        let def = Publication::definition().unwrap();
        assert_eq!(def.type_name(), "Publication");
        assert_eq!(def.to_array(), Publication::to_array());
    }

    #[test]
    fn test_enum_without_cases() {
        assert!(Unused::cases().is_empty());
        assert!(Unused::to_array().is_empty());
        assert!(Unused::get_options().is_empty());
        assert!(Unused::from_value("anything").is_none());
        assert!("anything".parse::<Unused>().is_err());

        let def = Unused::definition().unwrap();
        assert_eq!(def.type_name(), "Unused");
        assert!(def.is_empty());
    }
}
