use serde::{Deserialize, Serialize};

/// Customer record returned by the ERP customer directory.
///
/// The ERP pass-through emits SAP-style field names (`CardCode`, `CardName`,
/// ...), so every field carries an alias for the remote spelling. Missing
/// fields deserialize to their defaults; the directory payload is not trusted
/// to be complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Unique customer code (ERP primary key, e.g. "C001")
    #[serde(alias = "CardCode")]
    pub code: String,

    /// Display name
    #[serde(alias = "CardName")]
    pub name: String,

    /// Primary phone number
    #[serde(default, alias = "Phone1")]
    pub phone: String,

    /// Contact email
    #[serde(default, alias = "EmailAddress")]
    pub email: String,

    /// Street address line
    #[serde(default, alias = "Street")]
    pub street: String,

    /// Block / neighbourhood
    #[serde(default, alias = "Block")]
    pub block: String,

    /// City
    #[serde(default, alias = "City")]
    pub city: String,

    /// Postal code
    #[serde(default, alias = "ZipCode")]
    pub zip_code: String,

    /// Whether the customer holds a service contract
    #[serde(default, alias = "ContractFlag")]
    pub contract_flag: bool,
}

impl CustomerRecord {
    /// Human-readable address: street, block, city and zip joined by ", ",
    /// skipping segments the ERP left empty.
    pub fn display_address(&self) -> String {
        [&self.street, &self.block, &self.city, &self.zip_code]
            .iter()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| segment.trim())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
