//! Followings and children endpoints.

use tb_core::error::TbResult;
use tb_models::{Child, Following};

use crate::client::TinybeansClient;
use crate::response::FollowingsResponse;

impl TinybeansClient {
    /// List the accounts the logged-in user follows. Single page.
    pub async fn get_followings(&self) -> TbResult<Vec<Following>> {
        let response = self
            .get("followings", vec![self.client_id_param()])
            .await?;
        let body = Self::check_status(response)?;
        let parsed: FollowingsResponse = Self::parse(body)?;
        Ok(parsed.followings)
    }

    /// All children across followed journals, back-references attached.
    ///
    /// Not a network call of its own; a fold over [`get_followings`](Self::get_followings).
    pub async fn children(&self) -> TbResult<Vec<Child>> {
        let followings = self.get_followings().await?;
        Ok(followings
            .into_iter()
            .flat_map(|f| f.journal.children)
            .collect())
    }
}
