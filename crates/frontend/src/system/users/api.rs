use contracts::system::auth::MessageResponse;
use contracts::system::users::UpdateProfileDto;

use crate::shared::api_utils::put_json;
use crate::shared::error::ApiError;

/// Save the cold-start profile of user `id`
pub async fn update_profile(id: i64, dto: &UpdateProfileDto) -> Result<MessageResponse, ApiError> {
    put_json(&format!("/user/{}", id), dto).await
}
