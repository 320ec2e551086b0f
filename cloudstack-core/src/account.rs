//! Accounts, their users, and the domains that contain them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::{self, code_enum, wire_enum};

code_enum! {
    /// Privilege level of an account.
    pub enum AccountType {
        /// API access to the account's own resources.
        User => 0,
        /// Full API access.
        Admin => 1,
        /// Full API access within one domain.
        DomainAdmin => 2,
    }
}

wire_enum! {
    pub enum AccountState {
        Enabled => "enabled",
        Disabled => "disabled",
        Locked => "locked",
    }
}

/// A tenant account.
///
/// Resource limits the server reports as `"Unlimited"` are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Account {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "accounttype", default)]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub state: Option<AccountState>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "networkdomain", default)]
    pub network_domain: Option<String>,
    #[serde(rename = "iscleanuprequired", default)]
    pub cleanup_required: bool,
    #[serde(rename = "receivedbytes", default)]
    pub received_bytes: u64,
    #[serde(rename = "sentbytes", default)]
    pub sent_bytes: u64,

    #[serde(rename = "iptotal", default)]
    pub ips: u64,
    #[serde(rename = "iplimit", default, deserialize_with = "wire::limit")]
    pub ip_limit: Option<u64>,
    #[serde(rename = "ipavailable", default, deserialize_with = "wire::limit")]
    pub ips_available: Option<u64>,

    #[serde(rename = "snapshottotal", default)]
    pub snapshots: u64,
    #[serde(rename = "snapshotlimit", default, deserialize_with = "wire::limit")]
    pub snapshot_limit: Option<u64>,
    #[serde(rename = "snapshotavailable", default, deserialize_with = "wire::limit")]
    pub snapshots_available: Option<u64>,

    #[serde(rename = "templatetotal", default)]
    pub templates: u64,
    #[serde(rename = "templatelimit", default, deserialize_with = "wire::limit")]
    pub template_limit: Option<u64>,
    #[serde(rename = "templateavailable", default, deserialize_with = "wire::limit")]
    pub templates_available: Option<u64>,

    #[serde(rename = "vmtotal", default)]
    pub vms: u64,
    #[serde(rename = "vmrunning", default)]
    pub vms_running: u64,
    #[serde(rename = "vmstopped", default)]
    pub vms_stopped: u64,
    #[serde(rename = "vmlimit", default, deserialize_with = "wire::limit")]
    pub vm_limit: Option<u64>,
    #[serde(rename = "vmavailable", default, deserialize_with = "wire::limit")]
    pub vms_available: Option<u64>,

    #[serde(rename = "volumetotal", default)]
    pub volumes: u64,
    #[serde(rename = "volumelimit", default, deserialize_with = "wire::limit")]
    pub volume_limit: Option<u64>,
    #[serde(rename = "volumeavailable", default, deserialize_with = "wire::limit")]
    pub volumes_available: Option<u64>,

    #[serde(rename = "user", default)]
    pub users: Vec<User>,
}

/// A user belonging to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct User {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(rename = "accounttype", default)]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: Option<AccountState>,
    #[serde(rename = "apikey", default)]
    pub api_key: Option<String>,
    /// Never logged.
    #[serde(rename = "secretkey", default, skip_serializing)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// A container for accounts, arranged in a tree rooted at `ROOT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Domain {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(rename = "parentdomainid", default, deserialize_with = "wire::opt_id")]
    pub parent_id: Option<String>,
    #[serde(rename = "parentdomainname", default)]
    pub parent_name: Option<String>,
    #[serde(rename = "haschild", default)]
    pub has_child: bool,
}
