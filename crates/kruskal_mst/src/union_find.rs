//! Disjoint-set (union-find) with path compression and union by rank.

use crate::error::MstError;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Result<Self, MstError> {
        if n == 0 {
            return Err(MstError::EmptyGraph);
        }
        Ok(UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        })
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Find the representative (root) of the set containing `x`.
    ///
    /// Walks up to the root, then rewrites every node on the path to point
    /// at it directly.
    pub fn find(&mut self, x: usize) -> Result<usize, MstError> {
        MstError::check_vertex(x, self.len())?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    pub fn same(&mut self, x: usize, y: usize) -> Result<bool, MstError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Union by rank. Returns `true` if `x` and `y` were in different sets.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, MstError> {
        let mut root_x = self.find(x)?;
        let mut root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        if self.rank[root_x] < self.rank[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }

        self.parent[root_y] = root_x;

        if self.rank[root_x] == self.rank[root_y] {
            self.rank[root_x] = self.rank[root_x].saturating_add(1);
        }

        self.components -= 1;
        Ok(true)
    }
}
