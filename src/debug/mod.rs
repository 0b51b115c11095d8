//! SVG snapshots of the mesh, written while points are inserted.
//!
//! Enabled with the `debugging` feature and configured through environment variables:
//! - `INCREMENTAL_DELAUNAY_SVG_OUTPUT_PATH`: directory to write snapshots into
//! - `INCREMENTAL_DELAUNAY_SVG_OUTPUT_LEVEL`: `1` for one snapshot per insertion, `2` to also show each cavity
//! - `INCREMENTAL_DELAUNAY_SVG_HIDE_LABELS`: omit vertex labels

pub(crate) mod env;
pub(crate) mod svg;
