use crate::{domain::models::User, presentation::http::responses::UserDto};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        address: user.address.clone(),
        phone: user.phone,
        created_at: user.created_at.to_rfc3339(),
    }
}
