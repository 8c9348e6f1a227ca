use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Priority category a task is filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bucket {
    #[default]
    Priority,
    ShouldCould,
}

impl Bucket {
    pub const ALL: [Self; 2] = [Self::Priority, Self::ShouldCould];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "PRIORITY",
            Self::ShouldCould => "SHOULD_COULD",
        }
    }
}

/// Where or how a task can be done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Context {
    Home,
    Uni,
    Phone,
    Computer,
    Anywhere,
}

impl Context {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Uni,
        Self::Phone,
        Self::Computer,
        Self::Anywhere,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Uni => "UNI",
            Self::Phone => "PHONE",
            Self::Computer => "COMPUTER",
            Self::Anywhere => "ANYWHERE",
        }
    }
}

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    NotStarted,
    On,
    Done,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::On, Self::Done];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::On => "ON",
            Self::Done => "DONE",
        }
    }
}

/// Energy a task needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Energy {
    Low,
    Medium,
    High,
}

impl Energy {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

macro_rules! label_impls {
    ($ty:ty, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let upper = s.trim().to_uppercase().replace('-', "_");
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == upper)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

label_impls!(Bucket, "bucket");
label_impls!(Context, "context");
label_impls!(Status, "status");
label_impls!(Energy, "energy");
