use self::http::GroupHttp;

pub use self::group::GroupApi;

pub mod group;
mod http;

/// Handle to the group operations of the gateway at `endpoint`,
/// e.g. `https://directory.example.com/api`.
pub fn groups(endpoint: impl Into<String>) -> Box<dyn GroupApi> {
    Box::new(GroupHttp::new(endpoint))
}
