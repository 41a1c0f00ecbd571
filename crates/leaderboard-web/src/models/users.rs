use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The user the current request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: String,
}
