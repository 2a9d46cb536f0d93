//! Column spans for the seven "System" pillar cards.
//!
//! The grid is two columns on tablet and three on desktop. The selected card
//! takes a full row at both breakpoints, and whichever card closes a short row
//! is widened so the row has no hole. The layouts are fixed, so they live in a
//! table keyed by `(selected, item)` instead of being computed.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

pub const TABLET_COLUMNS: u8 = 2;
pub const DESKTOP_COLUMNS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PillarId {
    Pillar1,
    Pillar2,
    Pillar3,
    Pillar4,
    Pillar5,
    Pillar6,
    Pillar7,
}

impl PillarId {
    pub const ALL: [PillarId; 7] = [
        PillarId::Pillar1,
        PillarId::Pillar2,
        PillarId::Pillar3,
        PillarId::Pillar4,
        PillarId::Pillar5,
        PillarId::Pillar6,
        PillarId::Pillar7,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PillarId::Pillar1 => "pillar1",
            PillarId::Pillar2 => "pillar2",
            PillarId::Pillar3 => "pillar3",
            PillarId::Pillar4 => "pillar4",
            PillarId::Pillar5 => "pillar5",
            PillarId::Pillar6 => "pillar6",
            PillarId::Pillar7 => "pillar7",
        }
    }
}

impl FromStr for PillarId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PillarId::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPillar(s.to_string()))
    }
}

impl fmt::Display for PillarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpan {
    pub tablet: u8,
    pub desktop: u8,
}

impl GridSpan {
    /// Utility classes for the card; mobile is always a single column.
    pub fn class_names(&self) -> String {
        format!(
            "col-span-1 md:col-span-{} lg:col-span-{}",
            self.tablet, self.desktop
        )
    }
}

const fn s(tablet: u8, desktop: u8) -> GridSpan {
    GridSpan { tablet, desktop }
}

// Row 0 is "nothing selected", row k is pillar k selected. Columns are items.
const SPAN_TABLE: [[GridSpan; 7]; 8] = [
    [s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(2, 3)],
    [s(2, 3), s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(1, 1)],
    [s(2, 3), s(2, 3), s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(2, 2)],
    [s(1, 1), s(1, 2), s(2, 3), s(1, 1), s(1, 1), s(1, 1), s(1, 3)],
    [s(1, 1), s(1, 1), s(2, 1), s(2, 3), s(1, 1), s(1, 1), s(2, 1)],
    [s(1, 1), s(1, 1), s(1, 1), s(1, 3), s(2, 3), s(1, 1), s(1, 2)],
    [s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(2, 2), s(2, 3), s(2, 3)],
    [s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(1, 1), s(2, 3)],
];

/// Span of `item` while `selected` is expanded.
#[inline]
pub fn span_class(item: PillarId, selected: Option<PillarId>) -> GridSpan {
    let row = selected.map_or(0, |p| p.index() + 1);
    SPAN_TABLE[row][item.index()]
}

/// String-keyed variant for the JS boundary. Unknown selections fall back to
/// the unselected layout; unknown items are an error.
pub fn span_class_for(item: &str, selected: Option<&str>) -> Result<GridSpan> {
    let item = item.parse::<PillarId>()?;
    let selected = match selected {
        Some(id) => match id.parse::<PillarId>() {
            Ok(p) => Some(p),
            Err(_) => {
                log::debug!("[grid] ignoring unknown selection `{}`", id);
                None
            }
        },
        None => None,
    };
    Ok(span_class(item, selected))
}
