//! Chart Geometry
//!
//! Everything the renderers need that does not touch a drawing surface:
//!
//! - **axis**: Y domain padding, tick values and million labels
//! - **scale**: Mapping data values onto the plot area
//! - **monotone**: Monotone cubic line through the data points

mod axis;
mod monotone;
mod scale;

pub use axis::{format_millions, y_ticks, YDomain, DOMAIN_PAD_ABOVE, DOMAIN_PAD_BELOW, Y_TICK_COUNT};
pub use monotone::{monotone_segments, CubicSegment, Point};
pub use scale::{LinearScale, Margins, PlotArea};
