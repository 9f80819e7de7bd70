use serde::{Deserialize, Serialize};

/// A single named group record. Every other attribute of the group is
/// managed by the gateway and opaque to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupList {
    pub groups: Vec<Group>,
}

/// Body of the get-by-name endpoint: the group's member list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupWithMembers {
    pub members: Vec<String>,
}

/// Caller-facing listing parameters. Pages are 1-based; the gateway itself
/// consumes an absolute offset window, see [`GroupListRequest::window`].
#[derive(Debug, Clone, PartialEq)]
pub struct GroupListRequest {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
}

/// Query parameters sent to `GET /groups`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListWindow {
    pub start: u32,
    pub end: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}

impl GroupListRequest {
    // sort_key and sort_order stay at the gateway defaults
    pub fn window(&self) -> ListWindow {
        let filters = if self.search.is_empty() {
            None
        } else {
            Some(format!("(cn=*{}*)", self.search))
        };
        ListWindow {
            start: self.page.saturating_sub(1) * self.per_page,
            end: self.page * self.per_page,
            filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_without_search() {
        let window = GroupListRequest {
            page: 1,
            per_page: 10,
            search: String::new(),
        }
        .window();
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 10);
        assert_eq!(window.filters, None);
    }

    #[test]
    fn later_page_with_search() {
        let window = GroupListRequest {
            page: 2,
            per_page: 10,
            search: "ops".to_string(),
        }
        .window();
        assert_eq!(window.start, 10);
        assert_eq!(window.end, 20);
        assert_eq!(window.filters.as_deref(), Some("(cn=*ops*)"));
    }

    #[test]
    fn page_zero_clamps_to_start_of_list() {
        let window = GroupListRequest {
            page: 0,
            per_page: 25,
            search: String::new(),
        }
        .window();
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 0);
    }

    #[test]
    fn empty_filter_is_not_serialized() {
        let window = GroupListRequest {
            page: 1,
            per_page: 10,
            search: String::new(),
        }
        .window();
        let query = serde_json::to_value(&window).unwrap();
        assert!(query.get("filters").is_none());
    }
}
