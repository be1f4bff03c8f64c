// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::SgrCode;

/// A text attribute that can be applied alongside the colors. The declaration order
/// is the order in which the attributes are emitted. The `strum` names are the
/// spellings accepted on the command line.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, EnumCount,
)]
pub enum Attribute {
    #[strum(serialize = "bold")]
    Bold,
    #[strum(serialize = "ul")]
    Underline,
    #[strum(serialize = "rev")]
    Reverse,
    #[strum(serialize = "blink")]
    Blink,
    #[strum(serialize = "invis")]
    Invisible,
    #[strum(serialize = "so")]
    Standout,
}

impl Attribute {
    /// The terminfo capability name that turns this attribute on.
    #[must_use]
    pub fn terminfo_capname(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Underline => "smul",
            Attribute::Reverse => "rev",
            Attribute::Blink => "blink",
            Attribute::Invisible => "invis",
            Attribute::Standout => "smso",
        }
    }

    /// Standout has no SGR code of its own, xterm renders it as reverse video.
    #[must_use]
    pub fn sgr_code(self) -> SgrCode {
        match self {
            Attribute::Bold => SgrCode::Bold,
            Attribute::Underline => SgrCode::Underline,
            Attribute::Reverse | Attribute::Standout => SgrCode::Invert,
            Attribute::Blink => SgrCode::SlowBlink,
            Attribute::Invisible => SgrCode::Hidden,
        }
    }
}

pub mod sizing {
    use super::{Attribute, EnumCount, SmallVec};

    pub type InlineVecAttributes = SmallVec<[Attribute; Attribute::COUNT]>;
}

/// A set of [`Attribute`]s. Inserting twice is a no-op, and iteration always follows
/// the declaration order of [`Attribute`], not the insertion order.
#[derive(Clone, Default)]
pub struct Attributes {
    inner: sizing::InlineVecAttributes,
}

impl Attributes {
    pub fn insert(&mut self, attribute: Attribute) {
        if !self.contains(attribute) {
            self.inner.push(attribute);
        }
    }

    #[must_use]
    pub fn contains(&self, attribute: Attribute) -> bool { self.inner.contains(&attribute) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.inner.len() }

    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::iter().filter(|it| self.contains(*it))
    }

    /// Build a set from command line spellings (`bold`, `ul`, `rev`, `blink`,
    /// `invis`, `so`). Unknown names are skipped; they don't change the output.
    pub fn from_names_lenient<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut it = Self::default();
        for name in names {
            match name.parse::<Attribute>() {
                Ok(attribute) => it.insert(attribute),
                Err(_) => {
                    // % is Display, ? is Debug.
                    tracing::debug!(message = "Ignoring unknown attribute", name = %name);
                }
            }
        }
        it
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        let mut it = Self::default();
        for attribute in iter {
            it.insert(attribute);
        }
        it
    }
}

/// Two sets are equal when they have the same members, regardless of insertion order.
impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool { self.iter().eq(other.iter()) }
}

impl Eq for Attributes {}

impl Debug for Attributes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
