use uuid::Uuid;

/// Identity of a tree instance.
///
/// Minted once when a tree is created and stamped into every [`Position`](crate::Position)
/// the tree hands out, so positions from another tree can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(Uuid);

impl TreeId {
    pub fn generate() -> Self {
        TreeId(Uuid::new_v4())
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[cfg(test)]
mod tests {
    use super::TreeId;

    #[test]
    fn unique_ids() {
        let a = TreeId::generate();
        let b = TreeId::generate();
        assert_ne!(a, b);
        let copy = a;
        assert_eq!(a, copy);
        assert_eq!(a.to_string().len(), 32);
    }
}
