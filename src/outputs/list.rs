/// Receives the vertex index triples of an exported mesh, one call to [push](List::push) per triangle
pub trait List<V> {
    /// Make room for `triangles` more triangles
    fn reserve(&mut self, triangles: usize);

    fn push(&mut self, v0: V, v1: V, v2: V);

    /// The number of triangles received so far
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flat storage, three entries per triangle
impl<V> List<V> for Vec<V> {
    fn reserve(&mut self, triangles: usize) {
        Vec::reserve(self, triangles * 3);
    }

    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, v0);
        Vec::push(self, v1);
        Vec::push(self, v2);
    }

    fn len(&self) -> usize {
        Vec::len(self) / 3
    }
}

impl<V> List<V> for Vec<[V; 3]> {
    fn reserve(&mut self, triangles: usize) {
        Vec::reserve(self, triangles);
    }

    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, [v0, v1, v2]);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<V> List<V> for Vec<(V, V, V)> {
    fn reserve(&mut self, triangles: usize) {
        Vec::reserve(self, triangles);
    }

    fn push(&mut self, v0: V, v1: V, v2: V) {
        Vec::push(self, (v0, v1, v2));
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<V, L: List<V>> List<V> for &mut L {
    fn reserve(&mut self, triangles: usize) {
        (**self).reserve(triangles)
    }

    fn push(&mut self, v0: V, v1: V, v2: V) {
        (**self).push(v0, v1, v2)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
