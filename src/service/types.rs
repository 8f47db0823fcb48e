//! Wire types for the access-group API
//!
//! Every optional field is an `Option<T>`, so presence is distinguishable
//! from absence without any side-band tracking.

use crate::types::MemberType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Links
// ============================================================================

/// A link object embedded in list responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLink {
    /// The link's URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

// ============================================================================
// Groups
// ============================================================================

/// An access group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    /// The group's ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The group's name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The group's description, if defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The account the group was created in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// When the group was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// The identity that created the group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// When the group was last edited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,

    /// The identity that last modified the group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,

    /// A URL to this group resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The list of access groups returned as part of a response
#[derive(Debug, Clone, Deserialize)]
pub struct GroupsList {
    /// Limit on how many items can be returned
    pub limit: u64,

    /// The offset of the first item returned in the result set
    pub offset: u64,

    /// The total number of items that match the query
    pub total_count: u64,

    /// Link to the first page
    #[serde(default)]
    pub first: Option<PageLink>,

    /// Link to the previous page
    #[serde(default)]
    pub previous: Option<PageLink>,

    /// Link to the next page
    #[serde(default)]
    pub next: Option<PageLink>,

    /// Link to the last page
    #[serde(default)]
    pub last: Option<PageLink>,

    /// The groups for this page
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl GroupsList {
    /// The href of the next-page link, if present
    pub fn next_href(&self) -> Option<&str> {
        self.next.as_ref().and_then(|link| link.href.as_deref())
    }
}

// ============================================================================
// Members
// ============================================================================

/// A single member of an access group in a list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMember {
    /// The member's identity ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,

    /// The member type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub member_type: Option<MemberType>,

    /// The member's display name (verbose listings only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The member's email, for user members (verbose listings only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The service description, for service members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the membership was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// The identity that added the member
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// A URL to this membership resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The list of members of an access group
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMembersList {
    /// Limit on how many items can be returned
    pub limit: u64,

    /// The offset of the first item returned in the result set
    pub offset: u64,

    /// The total number of items that match the query
    pub total_count: u64,

    /// Link to the first page
    #[serde(default)]
    pub first: Option<PageLink>,

    /// Link to the previous page
    #[serde(default)]
    pub previous: Option<PageLink>,

    /// Link to the next page
    #[serde(default)]
    pub next: Option<PageLink>,

    /// Link to the last page
    #[serde(default)]
    pub last: Option<PageLink>,

    /// The members for this page
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl GroupMembersList {
    /// The href of the next-page link, if present
    pub fn next_href(&self) -> Option<&str> {
        self.next.as_ref().and_then(|link| link.href.as_deref())
    }
}

// ============================================================================
// Membership mutation results
// ============================================================================

/// Per-member outcome of an add-members call
#[derive(Debug, Clone, Deserialize)]
pub struct MemberResult {
    /// The member's identity ID
    #[serde(default)]
    pub member_id: Option<String>,

    /// The member type
    #[serde(rename = "type", default)]
    pub member_type: Option<MemberType>,

    /// HTTP-style status code for this member
    pub status_code: u16,

    /// Server message for this member, if any
    #[serde(default)]
    pub message: Option<String>,
}

impl MemberResult {
    /// Whether this member was added successfully
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Response of an add-members call (the server reports per-member outcomes)
#[derive(Debug, Clone, Deserialize)]
pub struct AddMembersResult {
    /// One outcome per requested member
    #[serde(default)]
    pub members: Vec<MemberResult>,
}
