use serde::{Deserialize, Serialize};

/// Client identity collected at the first wizard step. Field shape
/// (non-empty name and phone, `local@domain.tld` email) is the form layer's
/// contract; records arriving here are already validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}
