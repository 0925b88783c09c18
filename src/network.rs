//! Network URL constants for the GenelPara SDK.

/// Default rates API base URL.
pub const DEFAULT_API_URL: &str = "https://api.genelpara.com/json/";
