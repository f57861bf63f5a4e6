use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: i64,
    pub created_at: String,
}

#[derive(Object, Debug)]
pub struct UserEnvelopeDto {
    pub user: UserDto,
}

#[derive(Object, Debug)]
pub struct UsersEnvelopeDto {
    pub users: Vec<UserDto>,
}

#[derive(Object, Debug)]
pub struct MessageDto {
    pub message: String,
}
