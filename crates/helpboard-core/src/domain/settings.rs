use serde::{Deserialize, Serialize};

/// Settings partition holding the post type catalogue.
pub const TYPES_PARTITION: &str = "TYPE";

/// Settings partition holding the location catalogue.
pub const LOCATIONS_PARTITION: &str = "LOCATION";

/// Reference-data entry from the settings table (post types, locations).
/// Read-only from this backend's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: String,
    pub name: String,
}
