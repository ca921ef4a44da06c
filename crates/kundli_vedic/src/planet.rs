//! Chart points: the nine grahas plus the ascendant.
//!
//! Numeric codes follow the chart convention used throughout the engine:
//! ascendant 0, Sun 1 … Ketu 9. Code −1 is the empty placeholder and maps
//! to `None` rather than to a variant.

use kundli_ephem::Body;

/// A point that can occupy a chart cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Planet {
    Ascendant,
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// The nine grahas in code order, ascendant excluded.
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

/// Code of the empty placeholder.
pub const EMPTY_CODE: i8 = -1;

impl Planet {
    pub const fn code(self) -> i8 {
        match self {
            Self::Ascendant => 0,
            Self::Sun => 1,
            Self::Moon => 2,
            Self::Mars => 3,
            Self::Mercury => 4,
            Self::Jupiter => 5,
            Self::Venus => 6,
            Self::Saturn => 7,
            Self::Rahu => 8,
            Self::Ketu => 9,
        }
    }

    /// `None` for the empty placeholder and for unknown codes.
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Self::Ascendant),
            1 => Some(Self::Sun),
            2 => Some(Self::Moon),
            3 => Some(Self::Mars),
            4 => Some(Self::Mercury),
            5 => Some(Self::Jupiter),
            6 => Some(Self::Venus),
            7 => Some(Self::Saturn),
            8 => Some(Self::Rahu),
            9 => Some(Self::Ketu),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter display code.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Ascendant => "As",
            Self::Sun => "Su",
            Self::Moon => "Mo",
            Self::Mars => "Ma",
            Self::Mercury => "Me",
            Self::Jupiter => "Ju",
            Self::Venus => "Ve",
            Self::Saturn => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// Ephemeris body for physical planets. Nodes and the ascendant are computed points.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mars => Some(Body::Mars),
            Self::Mercury => Some(Body::Mercury),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Venus => Some(Body::Venus),
            Self::Saturn => Some(Body::Saturn),
            Self::Ascendant | Self::Rahu | Self::Ketu => None,
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Retrograde state fixed without any search, or `None` when it must be searched.
    pub const fn fixed_retrograde(self, nodes: NodePolicy) -> Option<bool> {
        match self {
            Self::Sun | Self::Moon | Self::Ascendant => Some(false),
            Self::Rahu | Self::Ketu => Some(nodes.is_retrograde()),
            _ => None,
        }
    }
}

/// How the lunar nodes report retrograde state.
///
/// The mean nodes regress steadily, so `AlwaysRetrograde` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodePolicy {
    #[default]
    AlwaysRetrograde,
    NeverRetrograde,
}

impl NodePolicy {
    pub const fn is_retrograde(self) -> bool {
        matches!(self, Self::AlwaysRetrograde)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AlwaysRetrograde => "always-retrograde",
            Self::NeverRetrograde => "never-retrograde",
        }
    }
}
