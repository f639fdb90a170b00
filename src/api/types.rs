//! Wire model for the apartments backend.
//!
//! The API speaks Lithuanian field names; the serde renames keep the Rust
//! side readable. Records are immutable once deserialized — the list only
//! ever appends them.

use serde::{Deserialize, Deserializer, Serialize};

/// One apartment listing as returned by `GET {base_url}{listings_path}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Listing {
    #[serde(rename = "pavadinimas")]
    pub name: String,
    #[serde(rename = "adresas")]
    pub address: String,
    /// Nightly price. The backend emits this either as a JSON string or a
    /// bare number depending on the record's age, so both are accepted.
    #[serde(rename = "kainaUzNakti", deserialize_with = "string_or_number")]
    pub price_per_night: String,
    /// Floor area in square metres.
    #[serde(rename = "dydis")]
    pub size: f64,
    #[serde(rename = "kambaruSkaicius")]
    pub rooms: u32,
    #[serde(rename = "nuotraukaUrl")]
    pub image_url: String,
}

/// Accepts `"50"`, `50` and `49.99` alike, normalizing to the display string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(f64),
    }

    Ok(match Price::deserialize(deserializer)? {
        Price::Text(s) => s,
        Price::Number(n) => {
            // Integral prices print without a trailing ".0"
            if n.fract() == 0.0 {
                format!("{}", n as i64)
            } else {
                format!("{n}")
            }
        }
    })
}
