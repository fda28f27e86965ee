use crate::error::ParseTypeError;
use std::fmt;
use std::str::FromStr;

/// Implements `name`, `Display` and case-insensitive `FromStr` for a closed
/// enum from a variant to name table.
macro_rules! named_enum {
    ($type:ident, $error:ident, { $( $variant:ident => $name:literal ),* $(,)? }) => {
        impl $type {
            pub const ALL: &'static [$type] = &[ $( $type::$variant ),* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( $type::$variant => $name, )*
                }
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $type {
            type Err = ParseTypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $type::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseTypeError::$error(s.to_string()))
            }
        }
    };
}

pub(crate) use named_enum;

/// Top level classification of a command. Every category is entered with a
/// single leading prefix character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Debug,
    Normal,
    Administration,
    SuperAdministration,
    System,
}

named_enum!(Category, UnknownCategory, {
    Debug => "debug",
    Normal => "normal",
    Administration => "administration",
    SuperAdministration => "super_administration",
    System => "system",
});

impl Category {
    pub fn prefix(self) -> char {
        match self {
            Category::Debug => '*',
            Category::Normal => '/',
            // Shares its prefix with `Normal`, which is always resolved first.
            Category::Administration => '/',
            Category::SuperAdministration => '%',
            Category::System => '.',
        }
    }

    /// Resolves a prefix character to the first category, in declaration
    /// order, that owns it.
    pub fn from_prefix(prefix: char) -> Result<Category, ParseTypeError> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.prefix() == prefix)
            .ok_or_else(|| ParseTypeError::UnknownCategory(prefix.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Chat,
    System,
}

named_enum!(Group, UnknownGroup, {
    Chat => "chat",
    System => "system",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Application,
}

named_enum!(Domain, UnknownDomain, {
    Application => "application",
});
