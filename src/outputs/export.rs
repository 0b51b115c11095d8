/// A flattened mesh for consumers such as plotting libraries.
///
/// `xs` and `ys` hold one entry per triangle corner, in mesh order, so a vertex shared by several triangles appears
/// several times. Each triangle in `triangles` refers to the first occurrence of each of its vertices. Vertices are
/// matched by identity, never by coordinates: two inserted points at the same location get different indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Export<C, L = Vec<[usize; 3]>> {
    /// x coordinate of every triangle corner
    pub xs: Vec<C>,
    /// y coordinate of every triangle corner
    pub ys: Vec<C>,
    /// Vertex index triples into `xs` and `ys`, one per triangle
    pub triangles: L,
}
