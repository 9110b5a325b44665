//! # Layout Jobs
//!
//! A minimal driver for previewing content: every region is the page's
//! content area, and the content is laid out region after region until the
//! cursor runs dry. Each region's fragment is painted into a [`DisplayList`]
//! so the result can be inspected as JSON.
//!
//! Before asking for a piece, the driver checks the cursor's minimum size
//! against the region. Content that can never fit is reported as
//! [`FolioError::NoProgress`] instead of looping forever.

use serde::{Deserialize, Serialize};

use crate::config::{DeviceConfig, PageConfig};
use crate::error::FolioError;
use crate::geometry::Size;
use crate::layout::{LayoutCursor, Next, RenderContext};
use crate::model::Node;
use crate::paint::DisplayList;
use crate::text::MonospaceMetrics;

/// A job file: settings plus the content tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub page: PageConfig,
    /// Metrics used to measure text leaves.
    #[serde(default)]
    pub metrics: MonospaceMetrics,
    pub content: Node,
}

/// What ended up in one region.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDump {
    /// 1-based region number.
    pub region: usize,
    /// The region offered, in device units.
    pub available: Size,
    /// The size the fragment declared.
    pub used: Size,
    /// `used` converted back to points, as (width, height).
    pub used_points: (f64, f64),
    /// Drawing operations, positioned on the page (margins included).
    pub display: DisplayList,
}

/// Lay out `job` region by region.
pub fn render(job: &Job) -> Result<Vec<RegionDump>, FolioError> {
    let resolution = job.device.resolution()?;
    let available = job.page.content_area(resolution)?;
    let origin = resolution.position(job.page.margin.left, job.page.margin.top);
    let ctx = RenderContext::new(resolution, &job.metrics);

    let mut cursor = job.content.cursor(ctx);
    let mut regions: Vec<RegionDump> = Vec::new();

    while cursor.has_next() {
        let region = regions.len() + 1;
        let needed = cursor.minimum_size();
        let no_progress = || FolioError::NoProgress {
            region,
            needed_width: needed.width,
            needed_height: needed.height,
            width: available.width,
            height: available.height,
        };

        if !needed.fits_in(available) {
            return Err(no_progress());
        }
        let fragment = match cursor.next(available.width, available.height) {
            Next::Fragment(fragment) => fragment,
            Next::NoFit => return Err(no_progress()),
        };

        let mut display = DisplayList::default();
        fragment.paint(&mut display, origin);
        log::debug!(
            "region {}: {}x{} used of {}x{}, {} draw commands",
            region,
            fragment.size().width,
            fragment.size().height,
            available.width,
            available.height,
            display.commands.len()
        );

        regions.push(RegionDump {
            region,
            available,
            used: fragment.size(),
            used_points: resolution.to_points(fragment.size()),
            display,
        });
    }

    Ok(regions)
}

/// Parse a job from JSON, lay it out, and return the region dump as JSON.
pub fn render_json(json: &str) -> Result<String, FolioError> {
    let job: Job = serde_json::from_str(json)?;
    let regions = render(&job)?;
    Ok(serde_json::to_string_pretty(&regions)?)
}
