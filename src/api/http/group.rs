use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::api::group::GroupApi;
use crate::error::Result;
use crate::model::group::{Group, GroupList, GroupListRequest, GroupWithMembers};

use super::RespStatus;

pub struct GroupHttp {
    client: Client,
    endpoint: String,
}

#[derive(Serialize, Debug)]
struct RenameRequest<'a> {
    name: &'a str,
}

impl GroupHttp {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GroupApi for GroupHttp {
    async fn create(&self, group: &Group) -> Result<()> {
        log::debug!("new group {:?}", group.name);
        self.client
            .put(format!("{}/group", self.endpoint))
            .json(group)
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        log::debug!("delete group {:?}", name);
        self.client
            .delete(format!("{}/group/{}", self.endpoint, name))
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn rename(&self, name: &str, new_name: &str) -> Result<()> {
        log::debug!("rename group {:?} to {:?}", name, new_name);
        self.client
            .post(format!("{}/group/rename/{}", self.endpoint, name))
            .json(&RenameRequest { name: new_name })
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<GroupWithMembers> {
        let group = self
            .client
            .get(format!("{}/group/{}", self.endpoint, name))
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(group)
    }

    async fn list(&self, req: &GroupListRequest) -> Result<GroupList> {
        let groups = self
            .client
            .get(format!("{}/groups", self.endpoint))
            .query(&req.window())
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(groups)
    }
}
