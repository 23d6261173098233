use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The claimed subcategory does not descend from the claimed category.
    #[error("Invalid category relationship: {0}")]
    InvalidRelationship(String),

    /// The category exists but is disabled; assignment refuses it.
    #[error("Category is not active: {0}")]
    InactiveCategory(String),

    /// A parent chain revisited a node. The store data is corrupt; walks
    /// abort instead of recursing forever.
    #[error("Corrupt category hierarchy: {0}")]
    CorruptHierarchy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_with_message() {
        let error = DomainError::NotFound("category 123".to_string());
        assert_eq!(error.to_string(), "Resource not found: category 123");
    }

    #[test]
    fn invalid_relationship_displays_with_message() {
        let error = DomainError::InvalidRelationship(
            "subcategory does not belong to the specified category".to_string(),
        );
        assert_eq!(
            error.to_string(),
            "Invalid category relationship: subcategory does not belong to the specified category"
        );
    }

    #[test]
    fn inactive_category_displays_with_message() {
        let error = DomainError::InactiveCategory("Electronics".to_string());
        assert_eq!(error.to_string(), "Category is not active: Electronics");
    }

    #[test]
    fn corrupt_hierarchy_displays_with_message() {
        let error = DomainError::CorruptHierarchy("cycle detected".to_string());
        assert_eq!(
            error.to_string(),
            "Corrupt category hierarchy: cycle detected"
        );
    }

    #[test]
    fn same_variant_same_message_errors_are_equal() {
        let a = DomainError::Validation("name too short".to_string());
        let b = DomainError::Validation("name too short".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn different_variants_are_not_equal() {
        let a = DomainError::NotFound("x".to_string());
        let b = DomainError::Validation("x".to_string());
        assert_ne!(a, b);
    }
}
