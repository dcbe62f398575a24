// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can manage the catalogue (categories, badges, plans)
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// CATEGORY MESSAGES
// =============================================================================

pub const CATEGORY_DELETED_MESSAGE: &str = "Category deleted successfully";
