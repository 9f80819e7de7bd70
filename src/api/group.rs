use crate::error::Result;
use crate::model::group::{Group, GroupList, GroupListRequest, GroupWithMembers};

/// Remote proxy for the gateway's group resource.
///
/// Implementations issue exactly one request per call and surface a non-2xx
/// error body unchanged through [`crate::error::Error::Gateway`]. Calls are
/// independent of each other; nothing is cached or retried.
#[async_trait::async_trait]
pub trait GroupApi: Send + Sync {
    async fn create(&self, group: &Group) -> Result<()>;

    async fn delete(&self, name: &str) -> Result<()>;

    /// The gateway reads the new name from the request body.
    async fn rename(&self, name: &str, new_name: &str) -> Result<()>;

    async fn get(&self, name: &str) -> Result<GroupWithMembers>;

    async fn list(&self, req: &GroupListRequest) -> Result<GroupList>;
}
