use serde::{Deserialize, Serialize};

/// PDF points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// PDF points per millimeter.
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / 25.4;

/// Physical unit that every length of a [`PageSpec`] is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inch,
    #[serde(alias = "mm")]
    Millimeter,
    #[serde(alias = "pt")]
    Point,
}

impl Unit {
    /// Convert a length in this unit to PDF points.
    pub fn to_points(self, value: f64) -> f64 {
        match self {
            Self::Inch => value * POINTS_PER_INCH,
            Self::Millimeter => value * POINTS_PER_MM,
            Self::Point => value,
        }
    }
}

/// Page and cell geometry for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSpec {
    pub page_width: f64,
    pub page_height: f64,
    /// Applied on all four sides.
    pub margin: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub unit: Unit,
}

impl Default for PageSpec {
    /// 12 x 18 in sheet with 1.134 x 0.585 in labels.
    fn default() -> Self {
        Self {
            page_width: 12.0,
            page_height: 18.0,
            margin: 0.25,
            cell_width: 1.134,
            cell_height: 0.585,
            unit: Unit::Inch,
        }
    }
}

impl PageSpec {
    /// Page width minus both side margins, in spec units.
    pub fn working_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Page height minus top and bottom margins, in spec units.
    pub fn working_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    /// Convert a length in spec units to PDF points.
    pub fn to_points(&self, value: f64) -> f64 {
        self.unit.to_points(value)
    }
}
