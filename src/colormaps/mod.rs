//! Color classification and map geometry for the spatial panels.

pub mod coastline;
pub mod colormap;
pub mod geoutil;

pub use coastline::coastlines;
pub use colormap::{ClassifiedColormap, ColorClass, Colormap};
pub use geoutil::{
    clip_polyline, format_latitude, format_longitude, normalize_longitude, MapExtent,
    GLOBAL_EXTENT, LAT_TICKS, LON_TICKS,
};
