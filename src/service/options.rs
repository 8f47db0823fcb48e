//! Request options for the access-group API
//!
//! Options types follow a common pattern: required fields are constructor
//! arguments, everything else is an `Option<T>` with a chainable setter.
//! The paged list options additionally implement
//! [`PageOptions`](crate::pagination::PageOptions) so a
//! [`Pager`](crate::pagination::Pager) can drive their offset.

use crate::pagination::PageOptions;
use crate::types::MemberType;
use serde::Serialize;

// ============================================================================
// List groups
// ============================================================================

/// Options for listing access groups in an account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGroupsOptions {
    /// Account to list groups for
    pub account_id: String,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
    /// Only return groups containing this member
    pub member_id: Option<String>,
    /// Return up to this many results (between 1 and 100)
    pub limit: Option<u64>,
    /// The offset of the first result item to be returned
    pub offset: Option<u64>,
    /// Sort the results by id, name, or description
    pub sort: Option<String>,
}

impl ListGroupsOptions {
    /// Create options for the given account
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Default::default()
        }
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    /// Only return groups containing this member
    #[must_use]
    pub fn member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    /// Set the page size limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

impl PageOptions for ListGroupsOptions {
    fn offset(&self) -> Option<u64> {
        self.offset
    }

    fn set_offset(&mut self, offset: Option<u64>) {
        self.offset = offset;
    }
}

// ============================================================================
// List members
// ============================================================================

/// Options for listing the members of an access group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMembersOptions {
    /// The access group identifier
    pub group_id: String,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
    /// Return up to this many results (between 1 and 100)
    pub limit: Option<u64>,
    /// The offset of the first result item to be returned
    pub offset: Option<u64>,
    /// Filter the results by member type
    pub member_type: Option<MemberType>,
    /// Return name and email for each member
    pub verbose: Option<bool>,
    /// If verbose, sort the results by id, name, or email
    pub sort: Option<String>,
}

impl ListMembersOptions {
    /// Create options for the given group
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            ..Default::default()
        }
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    /// Set the page size limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter by member type
    #[must_use]
    pub fn member_type(mut self, member_type: MemberType) -> Self {
        self.member_type = Some(member_type);
        self
    }

    /// Request name and email for each member
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Set the sort order
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

impl PageOptions for ListMembersOptions {
    fn offset(&self) -> Option<u64> {
        self.offset
    }

    fn set_offset(&mut self, offset: Option<u64>) {
        self.offset = offset;
    }
}

// ============================================================================
// Group CRUD
// ============================================================================

/// Options for creating an access group
#[derive(Debug, Clone, Default)]
pub struct CreateGroupOptions {
    /// Account to create the group in
    pub account_id: String,
    /// The group's name
    pub name: String,
    /// The group's description
    pub description: Option<String>,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
}

impl CreateGroupOptions {
    /// Create options with the required fields
    pub fn new(account_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

/// Options for fetching a single access group
#[derive(Debug, Clone, Default)]
pub struct GetGroupOptions {
    /// The access group identifier
    pub group_id: String,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
}

impl GetGroupOptions {
    /// Create options for the given group
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            ..Default::default()
        }
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

/// Options for updating an access group
///
/// The `etag` must come from a previous read of the group; the server
/// rejects updates against a stale revision.
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupOptions {
    /// The access group identifier
    pub group_id: String,
    /// Revision of the group being updated (If-Match)
    pub etag: String,
    /// New name, if changing
    pub name: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
}

impl UpdateGroupOptions {
    /// Create options with the required fields
    pub fn new(group_id: impl Into<String>, etag: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            etag: etag.into(),
            ..Default::default()
        }
    }

    /// Set the new name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the new description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

/// Options for deleting an access group
#[derive(Debug, Clone, Default)]
pub struct DeleteGroupOptions {
    /// The access group identifier
    pub group_id: String,
    /// Delete the group even if it still has members
    pub force: Option<bool>,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
}

impl DeleteGroupOptions {
    /// Create options for the given group
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            ..Default::default()
        }
    }

    /// Delete even when the group still has members
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

// ============================================================================
// Membership
// ============================================================================

/// A member to add to a group
#[derive(Debug, Clone, Serialize)]
pub struct NewMember {
    /// The member's identity ID
    pub member_id: String,
    /// The member type
    #[serde(rename = "type")]
    pub member_type: MemberType,
}

impl NewMember {
    /// Create a user member
    pub fn user(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            member_type: MemberType::User,
        }
    }

    /// Create a service member
    pub fn service(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            member_type: MemberType::Service,
        }
    }
}

/// Options for adding members to an access group
#[derive(Debug, Clone, Default)]
pub struct AddMembersOptions {
    /// The access group identifier
    pub group_id: String,
    /// The members to add
    pub members: Vec<NewMember>,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
}

impl AddMembersOptions {
    /// Create options for the given group and members
    pub fn new(group_id: impl Into<String>, members: Vec<NewMember>) -> Self {
        Self {
            group_id: group_id.into(),
            members,
            ..Default::default()
        }
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

/// Options for removing a member from an access group
#[derive(Debug, Clone, Default)]
pub struct RemoveMemberOptions {
    /// The access group identifier
    pub group_id: String,
    /// The member's identity ID
    pub member_id: String,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
}

impl RemoveMemberOptions {
    /// Create options for the given group and member
    pub fn new(group_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            member_id: member_id.into(),
            ..Default::default()
        }
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

/// Options for checking whether an identity is a member of a group
#[derive(Debug, Clone, Default)]
pub struct IsMemberOptions {
    /// The access group identifier
    pub group_id: String,
    /// The member's identity ID
    pub member_id: String,
    /// Optional transaction ID for request tracing
    pub transaction_id: Option<String>,
}

impl IsMemberOptions {
    /// Create options for the given group and member
    pub fn new(group_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            member_id: member_id.into(),
            ..Default::default()
        }
    }

    /// Set the transaction ID
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}
