use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;
use terrace_common::key::GroupKey;

use crate::error::TerraceCascadeError;
use crate::value::CascadeValue;

type Accessor<T> = Arc<dyn Fn(&T) -> Result<GroupKey, TerraceCascadeError> + Send + Sync>;
type LeafTransform<T, L> = Arc<dyn Fn(&[T]) -> Result<L, TerraceCascadeError> + Send + Sync>;

enum GroupStep<T> {
    Array(Accessor<T>),
    Object(Accessor<T>),
}

impl<T> Clone for GroupStep<T> {
    fn clone(&self) -> Self {
        match self {
            GroupStep::Array(accessor) => GroupStep::Array(accessor.clone()),
            GroupStep::Object(accessor) => GroupStep::Object(accessor.clone()),
        }
    }
}

impl<T> fmt::Debug for GroupStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupStep::Array(_) => write!(f, "ArrayGroup"),
            GroupStep::Object(_) => write!(f, "ObjectGroup"),
        }
    }
}

/// A grouping pipeline: an ordered sequence of group-by steps plus a leaf
/// transform applied exactly once to each innermost collection.
///
/// A cascade is built with a consuming fluent chain and holds no mutable
/// state after construction; `apply` is a pure function of the pipeline and
/// its input and may be called repeatedly, including from multiple threads.
///
/// ```
/// use terrace_cascade::Cascade;
///
/// #[derive(Clone)]
/// struct Row {
///     city: &'static str,
///     population: f64,
/// }
///
/// let totals = Cascade::new()
///     .group_by_object(|row: &Row| row.city)
///     .value(|rows: &[Row]| rows.iter().map(|r| r.population).sum::<f64>());
///
/// let rows = vec![
///     Row { city: "Bern", population: 134.0 },
///     Row { city: "Basel", population: 178.0 },
///     Row { city: "Bern", population: 10.0 },
/// ];
/// let tree = totals.apply(&rows).unwrap();
/// let groups = tree.as_object().unwrap();
/// assert_eq!(groups["Bern"].as_leaf(), Some(&144.0));
/// ```
pub struct Cascade<T, L> {
    steps: Vec<GroupStep<T>>,
    leaf: LeafTransform<T, L>,
}

impl<T, L> Clone for Cascade<T, L> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
            leaf: self.leaf.clone(),
        }
    }
}

impl<T, L> fmt::Debug for Cascade<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascade")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> Cascade<T, Vec<T>> {
    /// Creates the identity cascade: no grouping steps, leaves passed
    /// through unchanged.
    pub fn new() -> Self {
        Self {
            steps: vec![],
            leaf: Arc::new(|records: &[T]| Ok(records.to_vec())),
        }
    }
}

impl<T: Clone> Default for Cascade<T, Vec<T>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L> Cascade<T, L> {
    /// Appends a step that partitions each current group into an ordered
    /// sequence of sub-groups, one per distinct key, in first-seen order.
    pub fn group_by_array<K, F>(self, accessor: F) -> Self
    where
        K: Into<GroupKey>,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.push(GroupStep::Array(Arc::new(move |record| {
            Ok(accessor(record).into())
        })))
    }

    /// Fallible variant of [`Cascade::group_by_array`]. An accessor error
    /// aborts `apply` and propagates unmodified.
    pub fn try_group_by_array<F>(self, accessor: F) -> Self
    where
        F: Fn(&T) -> Result<GroupKey, TerraceCascadeError> + Send + Sync + 'static,
    {
        self.push(GroupStep::Array(Arc::new(accessor)))
    }

    /// Appends a step that partitions each current group into a mapping
    /// keyed by the canonical string form of the key, keys in first-seen
    /// order.
    pub fn group_by_object<K, F>(self, accessor: F) -> Self
    where
        K: Into<GroupKey>,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.push(GroupStep::Object(Arc::new(move |record| {
            Ok(accessor(record).into())
        })))
    }

    /// Fallible variant of [`Cascade::group_by_object`].
    pub fn try_group_by_object<F>(self, accessor: F) -> Self
    where
        F: Fn(&T) -> Result<GroupKey, TerraceCascadeError> + Send + Sync + 'static,
    {
        self.push(GroupStep::Object(Arc::new(accessor)))
    }

    fn push(mut self, step: GroupStep<T>) -> Self {
        self.steps.push(step);
        self
    }

    /// Replaces the leaf transform. The transform receives the raw records
    /// of one innermost group and runs exactly once per leaf, after all
    /// grouping steps.
    pub fn value<M, F>(self, transform: F) -> Cascade<T, M>
    where
        F: Fn(&[T]) -> M + Send + Sync + 'static,
    {
        Cascade {
            steps: self.steps,
            leaf: Arc::new(move |records| Ok(transform(records))),
        }
    }

    /// Fallible variant of [`Cascade::value`].
    pub fn try_value<M, F>(self, transform: F) -> Cascade<T, M>
    where
        F: Fn(&[T]) -> Result<M, TerraceCascadeError> + Send + Sync + 'static,
    {
        Cascade {
            steps: self.steps,
            leaf: Arc::new(transform),
        }
    }

    /// Number of grouping steps; the output nests exactly this deep.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

impl<T: Clone, L> Cascade<T, L> {
    /// Applies the pipeline to an ordered sequence of records.
    ///
    /// Grouping partitions index vectors; each record is cloned once, into
    /// its leaf group. An empty input produces an empty container of the
    /// first step's kind.
    pub fn apply(&self, records: &[T]) -> Result<CascadeValue<L>, TerraceCascadeError> {
        log::trace!(
            "applying {}-step cascade to {} records",
            self.steps.len(),
            records.len()
        );
        let indices: Vec<usize> = (0..records.len()).collect();
        self.apply_level(records, &indices, 0)
    }

    fn apply_level(
        &self,
        records: &[T],
        indices: &[usize],
        level: usize,
    ) -> Result<CascadeValue<L>, TerraceCascadeError> {
        match self.steps.get(level) {
            None => {
                let leaf_records: Vec<T> = indices.iter().map(|&i| records[i].clone()).collect();
                Ok(CascadeValue::Leaf((self.leaf)(&leaf_records)?))
            }
            Some(GroupStep::Array(accessor)) => {
                let groups = partition(records, indices, accessor, |key| key)?;
                let mut cells = Vec::with_capacity(groups.len());
                for group in groups.into_values() {
                    cells.push(self.apply_level(records, &group, level + 1)?);
                }
                Ok(CascadeValue::Array(cells))
            }
            Some(GroupStep::Object(accessor)) => {
                let groups = partition(records, indices, accessor, |key| key.key_string())?;
                let mut cells = IndexMap::with_capacity(groups.len());
                for (key, group) in groups {
                    cells.insert(key, self.apply_level(records, &group, level + 1)?);
                }
                Ok(CascadeValue::Object(cells))
            }
        }
    }
}

/// Splits `indices` into per-key groups, preserving first-seen key order.
/// Repeated keys append to the existing group.
fn partition<T, K: Hash + Eq>(
    records: &[T],
    indices: &[usize],
    accessor: &Accessor<T>,
    key_of: impl Fn(GroupKey) -> K,
) -> Result<IndexMap<K, Vec<usize>>, TerraceCascadeError> {
    let mut groups: IndexMap<K, Vec<usize>> = IndexMap::new();
    for &index in indices {
        let key = key_of(accessor(&records[index])?);
        groups.entry(key).or_default().push(index);
    }
    Ok(groups)
}
