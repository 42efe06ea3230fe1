//! The keyword enumerations for each background property.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Keyword, UnknownKeyword};

/// `Display`, `FromStr` and `Default` (the fallback) for a [`Keyword`] enum.
macro_rules! keyword_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Keyword>::from_keyword(s).ok_or_else(|| UnknownKeyword {
                    property: <$ty as Keyword>::PROPERTY,
                    value: s.to_string(),
                })
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <$ty as Keyword>::FALLBACK
            }
        }
    };
}

/// `background-repeat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    NoRepeat,
    Repeat,
    RepeatX,
    RepeatY,
    Inherit,
}

impl Keyword for BackgroundRepeat {
    const PROPERTY: &'static str = "background-repeat";
    const ALL: &'static [Self] = &[
        Self::NoRepeat,
        Self::Repeat,
        Self::RepeatX,
        Self::RepeatY,
        Self::Inherit,
    ];
    const FALLBACK: Self = Self::Inherit;

    fn as_str(self) -> &'static str {
        match self {
            Self::NoRepeat => "no-repeat",
            Self::Repeat => "repeat",
            Self::RepeatX => "repeat-x",
            Self::RepeatY => "repeat-y",
            Self::Inherit => "inherit",
        }
    }
}

keyword_traits!(BackgroundRepeat);

/// `background-size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundSize {
    Inherit,
    Cover,
    Contain,
}

impl Keyword for BackgroundSize {
    const PROPERTY: &'static str = "background-size";
    const ALL: &'static [Self] = &[Self::Inherit, Self::Cover, Self::Contain];
    const FALLBACK: Self = Self::Inherit;

    fn as_str(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Cover => "cover",
            Self::Contain => "contain",
        }
    }
}

keyword_traits!(BackgroundSize);

/// `background-attachment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundAttachment {
    Inherit,
    Fixed,
    Scroll,
}

impl Keyword for BackgroundAttachment {
    const PROPERTY: &'static str = "background-attachment";
    const ALL: &'static [Self] = &[Self::Inherit, Self::Fixed, Self::Scroll];
    const FALLBACK: Self = Self::Inherit;

    fn as_str(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Fixed => "fixed",
            Self::Scroll => "scroll",
        }
    }
}

keyword_traits!(BackgroundAttachment);

/// `background-position`, as `<horizontal>-<vertical>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundPosition {
    LeftTop,
    LeftCenter,
    LeftBottom,
    RightTop,
    RightCenter,
    RightBottom,
    CenterTop,
    CenterCenter,
    CenterBottom,
}

impl Keyword for BackgroundPosition {
    const PROPERTY: &'static str = "background-position";
    const ALL: &'static [Self] = &[
        Self::LeftTop,
        Self::LeftCenter,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightCenter,
        Self::RightBottom,
        Self::CenterTop,
        Self::CenterCenter,
        Self::CenterBottom,
    ];
    const FALLBACK: Self = Self::CenterCenter;

    fn as_str(self) -> &'static str {
        match self {
            Self::LeftTop => "left-top",
            Self::LeftCenter => "left-center",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightCenter => "right-center",
            Self::RightBottom => "right-bottom",
            Self::CenterTop => "center-top",
            Self::CenterCenter => "center-center",
            Self::CenterBottom => "center-bottom",
        }
    }
}

keyword_traits!(BackgroundPosition);
