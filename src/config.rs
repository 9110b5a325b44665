//! # Configuration
//!
//! Device and page settings for a layout job. Every field has a default, so a
//! job file only needs to mention what differs.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::Size;
use crate::model::Edges;
use crate::units::Resolution;

/// The rendering device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    #[serde(default = "default_dpi")]
    pub dpi_x: f64,
    #[serde(default = "default_dpi")]
    pub dpi_y: f64,
}

fn default_dpi() -> f64 {
    72.0
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            dpi_x: default_dpi(),
            dpi_y: default_dpi(),
        }
    }
}

impl DeviceConfig {
    /// The device resolution, checked to be positive and finite on both axes.
    pub fn resolution(&self) -> Result<Resolution, LayoutError> {
        for (axis, dpi) in [("dpiX", self.dpi_x), ("dpiY", self.dpi_y)] {
            if !(dpi.is_finite() && dpi > 0.0) {
                return Err(LayoutError::invalid(format!(
                    "{axis} must be a positive resolution, got {dpi}"
                )));
            }
        }
        Ok(Resolution::new(self.dpi_x, self.dpi_y))
    }
}

/// Configuration for a page: size and margins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page size. Defaults to A4.
    #[serde(default = "PageSize::default")]
    pub size: PageSize,

    /// Page margins in points (1/72 inch).
    #[serde(default = "default_margin")]
    pub margin: Edges,
}

fn default_margin() -> Edges {
    Edges::uniform(54.0) // ~0.75 inch
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margin: default_margin(),
        }
    }
}

impl PageConfig {
    /// The area inside the margins, in device units.
    pub fn content_area(&self, resolution: Resolution) -> Result<Size, LayoutError> {
        let margin = self.margin.validate("margin")?;
        let (width, height) = self.size.dimensions();
        let area = resolution.size(width - margin.horizontal(), height - margin.vertical());
        if area.width <= 0 || area.height <= 0 {
            return Err(LayoutError::invalid(format!(
                "margins leave no room on a {}x{}pt page",
                width, height
            )));
        }
        Ok(area)
    }
}

/// Standard page sizes in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A3,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height) in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Tabloid => (792.0, 1224.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let device: DeviceConfig = serde_json::from_str(r#"{"dpiY": 300}"#).unwrap();
        assert_eq!(device.resolution().unwrap(), Resolution::new(72.0, 300.0));

        let page: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(page.size, PageSize::A4);
        assert_eq!(page.margin, Edges::uniform(54.0));
    }

    #[test]
    fn zero_dpi_rejected() {
        let device = DeviceConfig {
            dpi_x: 0.0,
            dpi_y: 72.0,
        };
        assert!(matches!(device.resolution(), Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn content_area_subtracts_margins() {
        let page = PageConfig {
            size: PageSize::Letter,
            margin: Edges::uniform(72.0),
        };
        assert_eq!(page.content_area(Resolution::POINTS).unwrap(), Size::new(468, 648));
        assert_eq!(
            page.content_area(Resolution::uniform(144.0)).unwrap(),
            Size::new(936, 1296)
        );
    }

    #[test]
    fn margins_wider_than_page_rejected() {
        let page = PageConfig {
            size: PageSize::Custom {
                width: 100.0,
                height: 100.0,
            },
            margin: Edges::uniform(60.0),
        };
        assert!(page.content_area(Resolution::POINTS).is_err());
    }

    #[test]
    fn custom_page_size_from_json() {
        let page: PageConfig =
            serde_json::from_str(r#"{"size": {"Custom": {"width": 200, "height": 100}}}"#).unwrap();
        assert_eq!(page.size.dimensions(), (200.0, 100.0));
    }
}
