use indexmap::IndexMap;

/// The output of applying a cascade: a nested container whose level kinds
/// mirror the pipeline's step kinds, with transformed leaves at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeValue<L> {
    /// Ordered sub-groups from an array step, in first-seen key order.
    Array(Vec<CascadeValue<L>>),
    /// Keyed sub-groups from an object step, keys in first-seen order.
    Object(IndexMap<String, CascadeValue<L>>),
    /// A leaf transform result.
    Leaf(L),
}

impl<L> CascadeValue<L> {
    pub fn as_array(&self) -> Option<&[CascadeValue<L>]> {
        match self {
            CascadeValue::Array(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, CascadeValue<L>>> {
        match self {
            CascadeValue::Object(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&L> {
        match self {
            CascadeValue::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// Nesting depth down the first branch. Leaves have depth zero; an
    /// empty container counts as one level.
    pub fn depth(&self) -> usize {
        match self {
            CascadeValue::Leaf(_) => 0,
            CascadeValue::Array(cells) => 1 + cells.first().map_or(0, |c| c.depth()),
            CascadeValue::Object(cells) => 1 + cells.values().next().map_or(0, |c| c.depth()),
        }
    }

    /// Maps every leaf while preserving the container structure.
    pub fn map<M>(&self, f: &impl Fn(&L) -> M) -> CascadeValue<M> {
        match self {
            CascadeValue::Array(cells) => {
                CascadeValue::Array(cells.iter().map(|c| c.map(f)).collect())
            }
            CascadeValue::Object(cells) => CascadeValue::Object(
                cells
                    .iter()
                    .map(|(key, c)| (key.clone(), c.map(f)))
                    .collect(),
            ),
            CascadeValue::Leaf(value) => CascadeValue::Leaf(f(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let leaf: CascadeValue<i32> = CascadeValue::Leaf(7);
        assert_eq!(leaf.as_leaf(), Some(&7));
        assert!(leaf.as_array().is_none());
        assert!(leaf.as_object().is_none());

        let array = CascadeValue::Array(vec![CascadeValue::Leaf(1), CascadeValue::Leaf(2)]);
        assert_eq!(array.as_array().map(|cells| cells.len()), Some(2));
    }

    #[test]
    fn test_depth_and_map() {
        let mut inner = IndexMap::new();
        inner.insert("a".to_string(), CascadeValue::Leaf(10));
        let tree = CascadeValue::Array(vec![CascadeValue::Object(inner)]);

        assert_eq!(tree.depth(), 2);

        let doubled = tree.map(&|v| v * 2);
        let object = doubled.as_array().unwrap()[0].as_object().unwrap();
        assert_eq!(object["a"], CascadeValue::Leaf(20));
    }
}
