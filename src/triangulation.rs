use std::fmt;

use num_traits::real::Real;

use crate::{Export, List, Point, cavity::Cavity, errors::TriangulationError, idx::{Arena, SliceExt, VecExt}, triangle::Triangle};

#[cfg(feature = "debugging")]
use crate::{debug, idx::Idx};

/// An incrementally built Delaunay triangulation of the points inserted into a rectangular frame.
///
/// The mesh starts as the two triangles covering the frame. Every [insert](Triangulation::insert) removes the
/// triangles whose circumcircle contains the new point and fans the resulting cavity around it
/// (the Bowyer-Watson algorithm), so after each insertion no triangle's circumcircle holds an inserted point.
///
/// Points must lie strictly inside the frame. This is not checked.
///
/// ```
/// use incremental_delaunay::Triangulation;
///
/// let mut triangulation = Triangulation::new();
/// triangulation.insert_point(20., 30.).expect("Insertion failed");
/// triangulation.insert_point(70., 45.).expect("Insertion failed");
/// triangulation.insert_point(40., 80.).expect("Insertion failed");
/// assert_eq!(triangulation.triangle_count(), 8);
///
/// let export = triangulation.export();
/// assert_eq!(export.xs.len(), 24);
/// ```
pub struct Triangulation<C: Real = f64> {
    pub(crate) ps: Vec<Point<C>>,
    pub(crate) ts: Arena<Triangle<C>>,
    poisoned: bool,
    #[cfg(feature = "debugging")]
    svg_context: Option<debug::svg::SvgContext>,
    #[cfg(feature = "debugging")]
    current_step: u32,
}

impl<C: Real + From<u8>> Triangulation<C> {
    /// The side length of the frame used by [Triangulation::new]
    pub const DEFAULT_FRAME_SIZE: u8 = 99;

    /// Create a triangulation of the `[0, 99] x [0, 99]` frame.
    pub fn new() -> Self {
        let size = <C as From<u8>>::from(Self::DEFAULT_FRAME_SIZE);
        Self::with_frame(size, size)
    }
}

impl<C: Real + From<u8>> Default for Triangulation<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Real> Triangulation<C> {
    /// Create a triangulation of the `[0, width] x [0, height]` frame.
    pub fn with_frame(width: C, height: C) -> Self {
        let mut ps = Vec::new();
        let a = ps.push_get_index(Point::new(C::zero(), C::zero()));
        let b = ps.push_get_index(Point::new(width, C::zero()));
        let c = ps.push_get_index(Point::new(width, height));
        let d = ps.push_get_index(Point::new(C::zero(), height));

        let mut ts = Arena::new();
        let ti_0 = ts.insert(Triangle::new(a, d, b));
        let ti_1 = ts.insert(Triangle::new(c, b, d));

        // Both triangles have the b-d diagonal opposite their first vertex
        ts[ti_0].set_neighbor(0, Some(ti_1));
        ts[ti_1].set_neighbor(0, Some(ti_0));

        #[cfg(feature = "debugging")]
        let svg_context = Self::svg_context(width, height);

        Self {
            ps,
            ts,
            poisoned: false,
            #[cfg(feature = "debugging")]
            svg_context,
            #[cfg(feature = "debugging")]
            current_step: 0,
        }
    }

    /// Insert the point `(x, y)`. See [Triangulation::insert].
    pub fn insert_point(&mut self, x: C, y: C) -> Result<(), TriangulationError> {
        self.insert(Point::new(x, y))
    }

    /// Insert `p` and restore the Delaunay property of the mesh.
    ///
    /// Geometric errors and boundary walk failures leave the mesh untouched. A
    /// [MeshInconsistency](TriangulationError::MeshInconsistency) poisons the triangulation, and every later insertion
    /// fails with [Poisoned](TriangulationError::Poisoned).
    pub fn insert(&mut self, p: Point<C>) -> Result<(), TriangulationError> {
        if self.poisoned {
            return Err(TriangulationError::Poisoned);
        }

        let result = self.insert_inner(p);
        if let Err(TriangulationError::MeshInconsistency(_)) = &result {
            self.poisoned = true;
        }
        result
    }

    fn insert_inner(&mut self, p: Point<C>) -> Result<(), TriangulationError> {
        let cavity = Cavity::find(&self.ts, &self.ps, &p)?;

        if !cavity.is_simple() {
            log::warn!("Cavity of {:?} has {} triangles but {} boundary edges; enclosed vertices will be dropped", p, cavity.triangles.len(), cavity.boundary.len());
        }

        #[cfg(feature = "debugging")]
        self.output_svg(&cavity.triangles, None, debug::svg::SvgOutputLevel::Cavities);

        // Nothing has been modified up to this point
        let pi = self.ps.push_get_index(p);
        for &ti in cavity.triangles.iter() {
            self.ts.remove(ti);
        }

        let mut fan = Vec::with_capacity(cavity.boundary.len());
        for edge in cavity.boundary.iter() {
            let mut t = Triangle::new(pi, edge.from, edge.to);
            t.set_neighbor(0, edge.outside);
            let ti = self.ts.insert(t);
            if let Some(ti_outside) = edge.outside {
                // The new triangle takes the place of a removed one on the far side of the edge
                self.ts[ti_outside].set_neighbor_across_edge(edge.to, edge.from, ti)?;
            }
            fan.push(ti);
        }

        let count = fan.len();
        for (i, &ti) in fan.iter().enumerate() {
            let t = &mut self.ts[ti];
            t.set_neighbor(1, Some(fan[(i + 1) % count]));
            t.set_neighbor(2, Some(fan[(i + count - 1) % count]));
        }

        log::debug!("Inserted {} {:?}: replaced {} triangles with {}, {} live", pi, p, cavity.triangles.len(), count, self.ts.len());

        #[cfg(feature = "debugging")]
        self.output_svg(&fan, Some(pi), debug::svg::SvgOutputLevel::Insertions);

        self.check_consistency();

        Ok(())
    }

    /// The number of live triangles
    pub fn triangle_count(&self) -> usize {
        self.ts.len()
    }

    /// The number of vertices, including the four frame corners
    pub fn point_count(&self) -> usize {
        self.ps.len()
    }

    /// All vertices in insertion order, starting with the four frame corners
    pub fn points(&self) -> &[Point<C>] {
        &self.ps
    }

    /// The corners of every live triangle, in winding order
    pub fn triangles(&self) -> impl Iterator<Item=[&Point<C>; 3]> + '_ {
        self.ts.iter().map(move |(_, t)| t.corners(&self.ps))
    }

    /// The corners of the first live triangle whose containment test accepts `p`
    pub fn locate(&self, p: &Point<C>) -> Result<Option<[&Point<C>; 3]>, TriangulationError> {
        for (_, t) in self.ts.iter() {
            let corners = t.corners(&self.ps);
            if p.contained_in(corners)? {
                return Ok(Some(corners));
            }
        }
        Ok(None)
    }

    /// Flatten the mesh into coordinate arrays and vertex index triples. See [Export].
    pub fn export(&self) -> Export<C> {
        self.export_into(Vec::new())
    }

    /// Flatten the mesh as [Triangulation::export] does, writing the index triples into `list`.
    pub fn export_into<L: List<usize>>(&self, mut list: L) -> Export<C, L> {
        let corner_count = self.ts.len() * 3;
        let mut xs = Vec::with_capacity(corner_count);
        let mut ys = Vec::with_capacity(corner_count);
        let mut first_occurrence: Vec<Option<usize>> = vec![None; self.ps.len()];
        list.reserve(self.ts.len());

        for (_, t) in self.ts.iter() {
            let mut indices = [0; 3];
            for (index, &vi) in indices.iter_mut().zip(t.vertices().iter()) {
                let position = xs.len();
                xs.push(self.ps[vi].x);
                ys.push(self.ps[vi].y);
                *index = *first_occurrence[vi.usize()].get_or_insert(position);
            }
            let [i0, i1, i2] = indices;
            list.push(i0, i1, i2);
        }

        Export {
            xs,
            ys,
            triangles: list,
        }
    }

    /// Check that every neighbor link refers to a live triangle which links back across the same edge.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        for (ti, t) in self.ts.iter() {
            for i in 0..3 {
                let ti_n = match t.neighbor(i) {
                    Some(ti_n) => ti_n,
                    None => continue,
                };
                if !self.ts.contains(ti_n) {
                    return Err(TriangulationError::internal(format!("{} neighbors removed triangle {}", ti, ti_n)));
                }
                let t_n = &self.ts[ti_n];
                let j = t_n.neighbor_position(ti).ok_or_else(|| TriangulationError::internal(format!("{} neighbors {}, but not the reverse", ti, ti_n)))?;
                let (from, to) = t.edge(i);
                if t_n.edge(j) != (to, from) {
                    return Err(TriangulationError::internal(format!("{} and {} disagree on their shared edge", ti, ti_n)));
                }
            }
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn check_consistency(&self) {
        if let Err(err) = self.validate() {
            panic!("Inconsistent mesh after insertion: {}", err);
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_consistency(&self) { }

    #[cfg(feature = "debugging")]
    fn svg_context(width: C, height: C) -> Option<debug::svg::SvgContext> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == debug::svg::SvgOutputLevel::None {
            return None;
        }

        Some(debug::svg::SvgContext::for_frame(output_path, output_level, show_labels, width.to_f32()?, height.to_f32()?))
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&mut self, highlighted: &[Idx<Triangle<C>>], pi: Option<Idx<Point<C>>>, level: debug::svg::SvgOutputLevel) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= level {
                let style = MeshStyle { highlighted, pi };
                let mut svg = debug::svg::SvgOutput::new(svg_context, style);
                if svg.append_element(&*self, &()).is_ok() {
                    if let Err(err) = svg.save(level.file_name(self.current_step)) {
                        log::warn!("Failed to write SVG snapshot: {}", err);
                    }
                }
                if level == debug::svg::SvgOutputLevel::Insertions {
                    self.current_step += 1;
                }
            }
        }
    }
}

impl<C: Real + fmt::Display> fmt::Display for Triangulation<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Points")?;
        for pi in self.ps.iter_index() {
            writeln!(f, "{}: {}", pi, self.ps[pi])?;
        }
        writeln!(f)?;
        writeln!(f, "Triangles")?;
        for (ti, t) in self.ts.iter() {
            writeln!(f, "{}: {}", ti, t)?;
        }
        Ok(())
    }
}

impl<C: Real> fmt::Debug for Triangulation<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Triangulation")
            .field("points", &self.ps.len())
            .field("triangles", &self.ts.len())
            .field("poisoned", &self.poisoned)
            .finish()
    }
}

#[cfg(feature = "debugging")]
struct MeshStyle<'h, C: Real> {
    highlighted: &'h [Idx<Triangle<C>>],
    pi: Option<Idx<Point<C>>>,
}

#[cfg(feature = "debugging")]
impl<'h, C: Real> MeshStyle<'h, C> {
    fn triangle_style(&self, ti: Idx<Triangle<C>>) -> debug::svg::SvgElementStyle {
        if self.highlighted.contains(&ti) {
            debug::svg::SvgElementStyle::Highlight
        } else {
            debug::svg::SvgElementStyle::Standard
        }
    }

    fn point_style(&self, pi: Idx<Point<C>>) -> debug::svg::SvgElementStyle {
        if self.pi == Some(pi) {
            debug::svg::SvgElementStyle::Highlight
        } else {
            debug::svg::SvgElementStyle::Standard
        }
    }
}

#[cfg(feature = "debugging")]
impl<'h, C: Real> debug::svg::SvgElement<MeshStyle<'h, C>> for Triangulation<C> {
    fn write_svg<'a>(&self, svg_output: &mut debug::svg::SvgOutput<'a, MeshStyle<'h, C>>, _state: &()) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let coords = |p: &Point<C>| [p.x.to_f32().unwrap_or(0.), p.y.to_f32().unwrap_or(0.)];

        for (ti, t) in self.ts.iter() {
            let corners: Vec<[f32; 2]> = t.corners(&self.ps).iter().map(|p| coords(*p)).collect();
            let fill = match svg_output.style.triangle_style(ti) {
                debug::svg::SvgElementStyle::Standard => Fill::None,
                debug::svg::SvgElementStyle::Highlight => Fill::Color(rgb(255, 126, 0)),
            };
            writeln!(svg_output, "{}",
                polygon(&corners)
                    .fill(fill)
                    .stroke(Stroke::Color(blue(), svg_output.context.percent(0.2)))
            )?;
        }

        for pi in self.ps.iter_index() {
            let [x, y] = coords(&self.ps[pi]);
            let color = match svg_output.style.point_style(pi) {
                debug::svg::SvgElementStyle::Standard => green(),
                debug::svg::SvgElementStyle::Highlight => red(),
            };
            writeln!(svg_output, "{}",
                debug::svg::circle(x, y, svg_output.context.percent(0.6))
                    .fill(Fill::Color(color))
            )?;
            if svg_output.context.show_labels {
                let gap = svg_output.context.percent(1.0);
                writeln!(svg_output, "{}",
                    text(x - gap, y, pi.to_string())
                        .color(black())
                        .align(Align::Right)
                        .size(svg_output.context.percent(2.0))
                )?;
            }
        }
        Ok(())
    }
}
