//! Id generation provider.

use uuid::Uuid;

/// Source of client-generated ids (order idempotency keys).
pub trait IdSource: Send + Sync {
    /// Produce a fresh id.
    fn generate(&self) -> String;
}

/// Production id source backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let ids = UuidIds;
        assert_ne!(ids.generate(), ids.generate());
    }
}
