//! User profile endpoints.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{PrivateUser, PublicUser};
use crate::request::{encode_component, Operation, Options};

impl SpotifyClient {
    /// Get the profile of the user the access token belongs to.
    pub async fn get_me(&self) -> Result<PrivateUser> {
        let operation = Operation::get(self.endpoint("/me"));
        self.execute(operation, None, false).await
    }

    /// Get the public profile of any user.
    pub async fn get_user(&self, user_id: &str, options: Option<Options>) -> Result<PublicUser> {
        let path = format!("/users/{}", encode_component(user_id));
        self.execute(Operation::get(self.endpoint(&path)), options, false)
            .await
    }
}
