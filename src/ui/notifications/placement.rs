// SPDX-License-Identifier: MPL-2.0
//! Screen zones a toast can be anchored to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six screen anchors that group and order visible toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Bottom,
    #[default]
    BottomRight,
    BottomLeft,
    Top,
    TopLeft,
    TopRight,
}

impl Placement {
    /// Every zone, in the order listed by placement diagnostics.
    pub const ALL: [Placement; 6] = [
        Placement::Bottom,
        Placement::BottomRight,
        Placement::BottomLeft,
        Placement::Top,
        Placement::TopLeft,
        Placement::TopRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Bottom => "bottom",
            Placement::BottomRight => "bottom-right",
            Placement::BottomLeft => "bottom-left",
            Placement::Top => "top",
            Placement::TopLeft => "top-left",
            Placement::TopRight => "top-right",
        }
    }

    /// Whether the zone hangs from the top edge.
    ///
    /// Top zones list their newest toast first so it sits nearest the edge;
    /// bottom zones list it last for the same reason.
    #[must_use]
    pub fn is_top(self) -> bool {
        self.as_str().starts_with("top")
    }

    /// Position of this zone in [`Placement::ALL`].
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Placement::Bottom => 0,
            Placement::BottomRight => 1,
            Placement::BottomLeft => 2,
            Placement::Top => 3,
            Placement::TopLeft => 4,
            Placement::TopRight => 5,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placement name that matches none of the six zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlacement(pub String);

impl FromStr for Placement {
    type Err = UnknownPlacement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|placement| placement.as_str() == s)
            .ok_or_else(|| UnknownPlacement(s.to_string()))
    }
}
