use serde::{Deserialize, Deserializer, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};

/// A geolocation lookup as returned by the remote service.
///
/// Fresh lookup results and history entries share this shape; only history
/// entries carry `id` and the timestamps. The `user_*` fields describe the
/// client that performed the lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "nullable_string")]
    pub ip: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub region: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub country: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub loc: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub org: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub postal: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub timezone: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub user_ip: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_city: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_region: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_country: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_loc: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_org: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_postal: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_timezone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Column headings for [`GeoRecord::cells`], in the same order.
pub const GEO_COLUMNS: [&str; 16] = [
    "IP",
    "City",
    "Region",
    "Country",
    "Location",
    "Organization",
    "Postal",
    "Timezone",
    "User IP",
    "User City",
    "User Region",
    "User Country",
    "User Location",
    "User Organization",
    "User Postal",
    "User Timezone",
];

impl GeoRecord {
    pub fn cells(&self) -> [&str; 16] {
        [
            &self.ip,
            &self.city,
            &self.region,
            &self.country,
            &self.loc,
            &self.org,
            &self.postal,
            &self.timezone,
            &self.user_ip,
            &self.user_city,
            &self.user_region,
            &self.user_country,
            &self.user_loc,
            &self.user_org,
            &self.user_postal,
            &self.user_timezone,
        ]
    }

    /// Last update time, if the server sent a parseable RFC 3339 timestamp.
    pub fn updated_at(&self) -> Option<OffsetDateTime> {
        self.updated_at
            .as_deref()
            .and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok())
    }

    /// `updated_at` rendered as `YYYY-MM-DD HH:MM`, or an empty string.
    pub fn updated_at_label(&self) -> String {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
        self.updated_at()
            .and_then(|ts| ts.format(&format).ok())
            .unwrap_or_default()
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    #[serde(rename = "searchValue")]
    pub search_value: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `{"data": ...}` wrapper used by the lookup and history endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Best-effort error body; every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
