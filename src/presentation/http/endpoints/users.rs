use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::domain_error,
        mappers::map_user,
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::{MessageDto, UserEnvelopeDto, UsersEnvelopeDto},
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// List all users
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> PoemResult<Json<UsersEnvelopeDto>> {
        let users = self
            .state
            .list_users_usecase
            .execute()
            .await
            .map_err(domain_error)?;

        Ok(Json(UsersEnvelopeDto {
            users: users.iter().map(map_user).collect(),
        }))
    }

    /// Get a user by id
    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<i64>) -> PoemResult<Json<UserEnvelopeDto>> {
        let user = self
            .state
            .get_user_usecase
            .execute(id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(UserEnvelopeDto {
            user: map_user(&user),
        }))
    }

    /// Create a user
    ///
    /// The id is assigned by the store when omitted.
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> PoemResult<Json<UserEnvelopeDto>> {
        let Json(request) = request;
        let payload = CreateUserRequest {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            phone: request.phone,
            created_at: request.created_at,
        };

        let user = self
            .state
            .create_user_usecase
            .execute(payload)
            .await
            .map_err(domain_error)?;

        Ok(Json(UserEnvelopeDto {
            user: map_user(&user),
        }))
    }

    /// Replace every field of an existing user
    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<i64>,
        request: Json<UpdateUserRequestDto>,
    ) -> PoemResult<Json<UserEnvelopeDto>> {
        let Json(request) = request;
        let payload = UpdateUserRequest {
            id: id.0,
            first_name: request.first_name,
            last_name: request.last_name,
            address: request.address,
            phone: request.phone,
            created_at: request.created_at,
        };

        let user = self
            .state
            .update_user_usecase
            .execute(payload)
            .await
            .map_err(domain_error)?;

        Ok(Json(UserEnvelopeDto {
            user: map_user(&user),
        }))
    }

    /// Delete a user
    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<i64>) -> PoemResult<Json<MessageDto>> {
        self.state
            .delete_user_usecase
            .execute(id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(MessageDto {
            message: "user deleted".to_string(),
        }))
    }
}
