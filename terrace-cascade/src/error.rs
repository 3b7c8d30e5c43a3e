#[derive(Debug, thiserror::Error)]
pub enum TerraceCascadeError {
    /// A caller-supplied key accessor failed. The application is aborted
    /// with no partial output and the source error passes through as-is.
    #[error("Key accessor failed: {0}")]
    Accessor(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A caller-supplied leaf transform failed.
    #[error("Leaf transform failed: {0}")]
    LeafTransform(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TerraceCascadeError {
    pub fn accessor(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        TerraceCascadeError::Accessor(source.into())
    }

    pub fn leaf_transform(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        TerraceCascadeError::LeafTransform(source.into())
    }
}
