use serde::{Deserialize, Serialize};

/// Technician / field worker document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Document id
    pub id: String,

    /// Full display name
    pub full_name: String,

    /// Login / contact email
    #[serde(default)]
    pub email: String,

    /// Role within the organisation (e.g. "technician", "dispatcher")
    #[serde(default)]
    pub role: String,

    /// Profile picture URL, if one was uploaded
    #[serde(default)]
    pub profile_picture: Option<String>,
}
