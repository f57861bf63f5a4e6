use chrono::{DateTime, Utc};
use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    /// Leave out to let the store assign one.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    /// Defaults to the time of the request.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    /// Keeps the stored value when omitted.
    pub created_at: Option<DateTime<Utc>>,
}
