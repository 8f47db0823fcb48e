//! Command-line interface
//!
//! A thin wrapper over [`WardenClient`] for poking at the API from a shell.
//! Configuration comes from `--config <file>` or `WARDEN_*` environment
//! variables; results are printed as JSON.

use crate::error::Result;
use crate::service::{
    CreateGroupOptions, DeleteGroupOptions, GetGroupOptions, ListGroupsOptions,
    ListMembersOptions, WardenClient,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Warden access-group API client
#[derive(Debug, Parser)]
#[command(name = "warden", version, about)]
pub struct Cli {
    /// Path to a YAML config file (default: WARDEN_* environment variables)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List access groups in an account
    ListGroups {
        /// Account to list groups for
        #[arg(long)]
        account_id: String,

        /// Page size limit
        #[arg(long)]
        limit: Option<u64>,

        /// Fetch every page, not just the first
        #[arg(long)]
        all: bool,
    },

    /// List the members of an access group
    ListMembers {
        /// The access group identifier
        #[arg(long)]
        group_id: String,

        /// Page size limit
        #[arg(long)]
        limit: Option<u64>,

        /// Return name and email for each member
        #[arg(long)]
        verbose: bool,

        /// Fetch every page, not just the first
        #[arg(long)]
        all: bool,
    },

    /// Show a single access group
    GetGroup {
        /// The access group identifier
        #[arg(long)]
        group_id: String,
    },

    /// Create an access group
    CreateGroup {
        /// Account to create the group in
        #[arg(long)]
        account_id: String,

        /// The group's name
        #[arg(long)]
        name: String,

        /// The group's description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an access group
    DeleteGroup {
        /// The access group identifier
        #[arg(long)]
        group_id: String,

        /// Delete even when the group still has members
        #[arg(long)]
        force: bool,
    },
}

/// Execute the parsed command
pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => crate::config::ServiceConfig::from_file(path)?,
        None => crate::config::ServiceConfig::from_env(),
    };
    let client = WardenClient::new(config)?;

    match cli.command {
        Commands::ListGroups {
            account_id,
            limit,
            all,
        } => {
            let mut options = ListGroupsOptions::new(account_id);
            if let Some(limit) = limit {
                options = options.limit(limit);
            }

            if all {
                let mut pager = client.groups_pager(options)?;
                print_json(&pager.get_all().await?)?;
            } else {
                let list = client.list_groups(&options).await?;
                print_json(&list.groups)?;
            }
        }

        Commands::ListMembers {
            group_id,
            limit,
            verbose,
            all,
        } => {
            let mut options = ListMembersOptions::new(group_id).verbose(verbose);
            if let Some(limit) = limit {
                options = options.limit(limit);
            }

            if all {
                let mut pager = client.members_pager(options)?;
                print_json(&pager.get_all().await?)?;
            } else {
                let list = client.list_members(&options).await?;
                print_json(&list.members)?;
            }
        }

        Commands::GetGroup { group_id } => {
            let group = client.get_group(&GetGroupOptions::new(group_id)).await?;
            print_json(&group)?;
        }

        Commands::CreateGroup {
            account_id,
            name,
            description,
        } => {
            let mut options = CreateGroupOptions::new(account_id, name);
            if let Some(description) = description {
                options = options.description(description);
            }
            let group = client.create_group(&options).await?;
            print_json(&group)?;
        }

        Commands::DeleteGroup { group_id, force } => {
            let options = DeleteGroupOptions::new(group_id.as_str()).force(force);
            client.delete_group(&options).await?;
            eprintln!("deleted group {group_id}");
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_groups_args() {
        let cli = Cli::parse_from([
            "warden",
            "list-groups",
            "--account-id",
            "acct-1",
            "--limit",
            "5",
            "--all",
        ]);

        match cli.command {
            Commands::ListGroups {
                account_id,
                limit,
                all,
            } => {
                assert_eq!(account_id, "acct-1");
                assert_eq!(limit, Some(5));
                assert!(all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
