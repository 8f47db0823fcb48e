//! Warden service client

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::options::{
    AddMembersOptions, CreateGroupOptions, DeleteGroupOptions, GetGroupOptions, IsMemberOptions,
    ListGroupsOptions, ListMembersOptions, RemoveMemberOptions, UpdateGroupOptions,
};
use super::types::{AddMembersResult, Group, GroupMember, GroupMembersList, GroupsList};
use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Page, PageFetcher, Pager};
use crate::random;

/// Pager over the groups of an account
pub type GroupsPager<'a> = Pager<'a, ListGroupsOptions, Group>;

/// Pager over the members of a group
pub type MembersPager<'a> = Pager<'a, ListMembersOptions, GroupMember>;

/// Typed client for the Warden access-group API
pub struct WardenClient {
    http: HttpClient,
}

impl WardenClient {
    /// Create a client from a service configuration
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let auth = config.auth.clone();
        Ok(Self {
            http: HttpClient::with_auth(config.http_config(), auth),
        })
    }

    /// Create a client over an already-configured HTTP client
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========================================================================
    // Groups
    // ========================================================================

    /// List access groups in an account (one page)
    pub async fn list_groups(&self, options: &ListGroupsOptions) -> Result<GroupsList> {
        if options.account_id.is_empty() {
            return Err(Error::usage("the 'account_id' field is required"));
        }

        let config = RequestConfig::new()
            .query("account_id", options.account_id.as_str())
            .query_opt("member_id", options.member_id.as_ref())
            .query_opt("limit", options.limit)
            .query_opt("offset", options.offset)
            .query_opt("sort", options.sort.as_ref())
            .header("Transaction-Id", transaction_id(&options.transaction_id));

        debug!(
            account_id = %options.account_id,
            offset = ?options.offset,
            "listing groups"
        );
        self.http.get_json_with_config("/v2/groups", config).await
    }

    /// Create a pager over all groups matching the options
    ///
    /// Fails if the options already carry a non-zero offset; the pager owns
    /// cursor advancement.
    pub fn groups_pager(&self, options: ListGroupsOptions) -> Result<GroupsPager<'_>> {
        Pager::new(self, options)
    }

    /// Create an access group
    pub async fn create_group(&self, options: &CreateGroupOptions) -> Result<Group> {
        if options.account_id.is_empty() {
            return Err(Error::usage("the 'account_id' field is required"));
        }
        if options.name.is_empty() {
            return Err(Error::usage("the 'name' field is required"));
        }

        let mut body = json!({ "name": options.name });
        if let Some(description) = &options.description {
            body["description"] = json!(description);
        }

        let config = RequestConfig::new()
            .query("account_id", options.account_id.as_str())
            .header("Transaction-Id", transaction_id(&options.transaction_id))
            .json(body);

        let response = self.http.post_with_config("/v2/groups", config).await?;
        response.json().await.map_err(Error::Http)
    }

    /// Fetch a single access group
    pub async fn get_group(&self, options: &GetGroupOptions) -> Result<Group> {
        let group_id = validate_path_param("group_id", &options.group_id)?;

        let config = RequestConfig::new()
            .header("Transaction-Id", transaction_id(&options.transaction_id));

        self.http
            .get_json_with_config(&format!("/v2/groups/{group_id}"), config)
            .await
    }

    /// Update an access group's name or description
    pub async fn update_group(&self, options: &UpdateGroupOptions) -> Result<Group> {
        let group_id = validate_path_param("group_id", &options.group_id)?;
        if options.etag.is_empty() {
            return Err(Error::usage("the 'etag' field is required"));
        }

        let mut body = json!({});
        if let Some(name) = &options.name {
            body["name"] = json!(name);
        }
        if let Some(description) = &options.description {
            body["description"] = json!(description);
        }

        let config = RequestConfig::new()
            .header("If-Match", options.etag.as_str())
            .header("Transaction-Id", transaction_id(&options.transaction_id))
            .json(body);

        let response = self
            .http
            .patch_with_config(&format!("/v2/groups/{group_id}"), config)
            .await?;
        response.json().await.map_err(Error::Http)
    }

    /// Delete an access group
    pub async fn delete_group(&self, options: &DeleteGroupOptions) -> Result<()> {
        let group_id = validate_path_param("group_id", &options.group_id)?;

        let config = RequestConfig::new()
            .query_opt("force", options.force)
            .header("Transaction-Id", transaction_id(&options.transaction_id));

        self.http
            .delete_with_config(&format!("/v2/groups/{group_id}"), config)
            .await?;
        Ok(())
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// List the members of an access group (one page)
    pub async fn list_members(&self, options: &ListMembersOptions) -> Result<GroupMembersList> {
        let group_id = validate_path_param("group_id", &options.group_id)?;

        let config = RequestConfig::new()
            .query_opt("limit", options.limit)
            .query_opt("offset", options.offset)
            .query_opt("type", options.member_type.map(|t| t.as_str()))
            .query_opt("verbose", options.verbose)
            .query_opt("sort", options.sort.as_ref())
            .header("Transaction-Id", transaction_id(&options.transaction_id));

        debug!(group_id = %group_id, offset = ?options.offset, "listing members");
        self.http
            .get_json_with_config(&format!("/v2/groups/{group_id}/members"), config)
            .await
    }

    /// Create a pager over all members matching the options
    ///
    /// Fails if the options already carry a non-zero offset; the pager owns
    /// cursor advancement.
    pub fn members_pager(&self, options: ListMembersOptions) -> Result<MembersPager<'_>> {
        Pager::new(self, options)
    }

    /// Add members to an access group
    ///
    /// The server reports a per-member outcome; inspect
    /// [`MemberResult::is_success`](super::types::MemberResult::is_success)
    /// for partial failures.
    pub async fn add_members(&self, options: &AddMembersOptions) -> Result<AddMembersResult> {
        let group_id = validate_path_param("group_id", &options.group_id)?;
        if options.members.is_empty() {
            return Err(Error::usage("the 'members' field must not be empty"));
        }

        let config = RequestConfig::new()
            .header("Transaction-Id", transaction_id(&options.transaction_id))
            .json(json!({ "members": options.members }));

        let response = self
            .http
            .put_with_config(&format!("/v2/groups/{group_id}/members"), config)
            .await?;
        response.json().await.map_err(Error::Http)
    }

    /// Remove a member from an access group
    pub async fn remove_member(&self, options: &RemoveMemberOptions) -> Result<()> {
        let group_id = validate_path_param("group_id", &options.group_id)?;
        let member_id = validate_path_param("member_id", &options.member_id)?;

        let config = RequestConfig::new()
            .header("Transaction-Id", transaction_id(&options.transaction_id));

        self.http
            .delete_with_config(&format!("/v2/groups/{group_id}/members/{member_id}"), config)
            .await?;
        Ok(())
    }

    /// Check whether an identity is a member of an access group
    pub async fn is_member(&self, options: &IsMemberOptions) -> Result<bool> {
        let group_id = validate_path_param("group_id", &options.group_id)?;
        let member_id = validate_path_param("member_id", &options.member_id)?;

        let config = RequestConfig::new()
            .header("Transaction-Id", transaction_id(&options.transaction_id));

        let result = self
            .http
            .head_with_config(&format!("/v2/groups/{group_id}/members/{member_id}"), config)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(Error::HttpStatus { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for WardenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WardenClient")
            .field("http", &self.http)
            .finish()
    }
}

// ============================================================================
// Pager wiring
// ============================================================================

#[async_trait]
impl PageFetcher<ListGroupsOptions, Group> for WardenClient {
    async fn fetch_page(&self, options: &ListGroupsOptions) -> Result<Page<Group>> {
        let result = self.list_groups(options).await?;
        let next_href = result.next_href().map(String::from);
        Ok(Page::new(result.groups, next_href))
    }
}

#[async_trait]
impl PageFetcher<ListMembersOptions, GroupMember> for WardenClient {
    async fn fetch_page(&self, options: &ListMembersOptions) -> Result<Page<GroupMember>> {
        let result = self.list_members(options).await?;
        let next_href = result.next_href().map(String::from);
        Ok(Page::new(result.members, next_href))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// The Transaction-Id header value: the caller's, or a freshly minted one
fn transaction_id(explicit: &Option<String>) -> String {
    match explicit {
        Some(id) => id.clone(),
        None => random::transaction_id(),
    }
}

/// Validate a path parameter before it is spliced into a URL
fn validate_path_param<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::path_param(name, "must not be empty"));
    }
    if value.contains('/') {
        return Err(Error::path_param(name, "must not contain '/'"));
    }
    Ok(value)
}
