//! N-dimensional arrays of variable handles.

use smallvec::SmallVec;
use vargrid_expr::{Expr, LinearExprError, VariableId, weighted_sum};

use crate::error::IndexError;

/// One node of a variable tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(VariableId),
    Internal(Vec<Node>),
}

impl Node {
    /// Handle held by a leaf; `None` for internal nodes.
    pub fn as_leaf(&self) -> Option<VariableId> {
        match self {
            Node::Leaf(id) => Some(*id),
            Node::Internal(_) => None,
        }
    }

    /// Children of an internal node; `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Leaf(_) => None,
            Node::Internal(children) => Some(children),
        }
    }

    fn collect_leaves(&self, out: &mut Vec<VariableId>) {
        match self {
            Node::Leaf(id) => out.push(*id),
            Node::Internal(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// A fixed-shape tree of variable handles addressed by index tuples.
///
/// `dims() == 0` means the group is a single scalar leaf. Every access must
/// supply exactly `dims()` indices, each inside its level's declared size.
/// The group owns its tree; the handles themselves stay owned by the solver
/// that issued them.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableGroup {
    root: Node,
    shape: Vec<usize>,
}

impl VariableGroup {
    /// Scalar group holding a single handle.
    pub fn scalar_of(id: VariableId) -> Self {
        Self {
            root: Node::Leaf(id),
            shape: Vec::new(),
        }
    }

    /// Build a group of the given shape, asking `leaf` for the handle at each
    /// full index tuple in row-major order.
    pub fn build<F, E>(shape: &[usize], mut leaf: F) -> Result<Self, E>
    where
        F: FnMut(&[usize]) -> Result<VariableId, E>,
    {
        let mut prefix: SmallVec<[usize; 8]> = SmallVec::with_capacity(shape.len());
        let root = build_node(shape, &mut prefix, &mut leaf)?;
        Ok(Self {
            root,
            shape: shape.to_vec(),
        })
    }

    /// Number of indices required by [`at`](Self::at).
    pub fn dims(&self) -> usize {
        self.shape.len()
    }

    /// Declared size of each level.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of leaves (1 for a scalar, 0 if any level is empty).
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Handle at `index`.
    ///
    /// Fails with `NotGroup` on a scalar, `DimensionMismatch` when the index
    /// count differs from `dims()`, and `IndexOutOfRange` at the first level
    /// whose index is past that level's size.
    pub fn at(&self, index: &[usize]) -> Result<VariableId, IndexError> {
        self.check_arity(index)?;
        let mut node = &self.root;
        for (level, &i) in index.iter().enumerate() {
            node = match node {
                Node::Internal(children) => {
                    children.get(i).ok_or(IndexError::IndexOutOfRange {
                        level,
                        index: i,
                        size: children.len(),
                    })?
                }
                Node::Leaf(_) => {
                    return Err(IndexError::DimensionMismatch {
                        expected: level,
                        got: index.len(),
                    });
                }
            };
        }
        match node {
            Node::Leaf(id) => Ok(*id),
            Node::Internal(_) => Err(IndexError::DimensionMismatch {
                expected: self.dims(),
                got: index.len(),
            }),
        }
    }

    /// Mutable access to the handle at `index`, with the same checks as [`at`](Self::at).
    pub fn at_mut(&mut self, index: &[usize]) -> Result<&mut VariableId, IndexError> {
        self.check_arity(index)?;
        let dims = self.dims();
        let mut node = &mut self.root;
        for (level, &i) in index.iter().enumerate() {
            node = match node {
                Node::Internal(children) => {
                    let size = children.len();
                    children.get_mut(i).ok_or(IndexError::IndexOutOfRange {
                        level,
                        index: i,
                        size,
                    })?
                }
                Node::Leaf(_) => {
                    return Err(IndexError::DimensionMismatch {
                        expected: level,
                        got: index.len(),
                    });
                }
            };
        }
        match node {
            Node::Leaf(id) => Ok(id),
            Node::Internal(_) => Err(IndexError::DimensionMismatch {
                expected: dims,
                got: index.len(),
            }),
        }
    }

    /// Handle of a scalar group.
    pub fn scalar(&self) -> Result<VariableId, IndexError> {
        match (&self.root, self.dims()) {
            (Node::Leaf(id), 0) => Ok(*id),
            _ => Err(IndexError::NotScalar { dims: self.dims() }),
        }
    }

    /// Every handle in row-major order.
    pub fn handles(&self) -> Vec<VariableId> {
        let mut out = Vec::with_capacity(self.len());
        self.root.collect_leaves(&mut out);
        out
    }

    /// Leaves weighted by `coefficients`, taken in row-major order.
    pub fn weighted(&self, coefficients: &[f64]) -> Result<Expr, LinearExprError> {
        weighted_sum(&self.handles(), coefficients)
    }

    fn check_arity(&self, index: &[usize]) -> Result<(), IndexError> {
        if self.dims() == 0 && !index.is_empty() {
            return Err(IndexError::NotGroup { got: index.len() });
        }
        if index.len() != self.dims() {
            return Err(IndexError::DimensionMismatch {
                expected: self.dims(),
                got: index.len(),
            });
        }
        Ok(())
    }
}

fn build_node<F, E>(
    shape: &[usize],
    prefix: &mut SmallVec<[usize; 8]>,
    leaf: &mut F,
) -> Result<Node, E>
where
    F: FnMut(&[usize]) -> Result<VariableId, E>,
{
    let depth = prefix.len();
    if depth == shape.len() {
        return Ok(Node::Leaf(leaf(prefix)?));
    }
    let size = shape[depth];
    let mut children = Vec::with_capacity(size);
    for i in 0..size {
        prefix.push(i);
        let child = build_node(shape, prefix, leaf);
        prefix.pop();
        children.push(child?);
    }
    Ok(Node::Internal(children))
}
