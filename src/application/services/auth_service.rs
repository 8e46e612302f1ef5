/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/
use crate::application::services::ResourceService;
use crate::constants::CURRENT_USER_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::user::UserRecord;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, info};

/// Auth sub-service
///
/// Dereferences to a [`ResourceService`] rooted at `auth` for the endpoints
/// that have no dedicated method.
#[derive(Debug)]
pub struct AuthService {
    resource: ResourceService,
}

impl AuthService {
    /// Creates the auth sub-service on top of the shared transport
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self {
            resource: ResourceService::new("auth", http_client),
        }
    }

    /// Fetches the user the current token belongs to
    ///
    /// # Errors
    /// Whatever the transport returns, typically [`AppError::Unauthorized`]
    /// when no valid token is available.
    pub async fn get_current_user(&self) -> Result<UserRecord, AppError> {
        info!("Getting current user");
        let user: UserRecord = self.resource.http_client().get(CURRENT_USER_PATH).await?;
        debug!("Current user obtained: {} fields", user.len());
        Ok(user)
    }
}

impl Deref for AuthService {
    type Target = ResourceService;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
