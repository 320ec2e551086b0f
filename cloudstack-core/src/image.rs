//! Templates, ISOs, their permissions and the guest OS catalogue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::{self, wire_enum};

wire_enum! {
    /// Disk image format of a template.
    pub enum TemplateFormat {
        Vhd => "VHD",
        Qcow2 => "QCOW2",
        Raw => "RAW",
        Vmdk => "VMDK",
        Iso => "ISO",
        Ova => "OVA",
        Baremetal => "BAREMETAL",
    }
}

wire_enum! {
    pub enum TemplateType {
        System => "SYSTEM",
        Builtin => "BUILTIN",
        PerHost => "PERHOST",
        User => "USER",
    }
}

wire_enum! {
    /// Which templates a list query returns.
    pub enum TemplateFilter {
        /// Templates marked featured by an administrator.
        Featured => "featured",
        /// Templates registered by the caller.
        SelfOwned => "self",
        /// The caller's ready-to-launch templates.
        SelfExecutable => "self-executable",
        /// Every template the caller can launch.
        Executable => "executable",
        /// Public templates shared by other accounts.
        Community => "community",
    }
}

wire_enum! {
    pub enum ExtractMode {
        HttpDownload => "HTTP_DOWNLOAD",
        FtpUpload => "FTP_UPLOAD",
    }
}

wire_enum! {
    /// How an update-permissions command modifies the account list.
    pub enum PermissionOperation {
        Add => "add",
        Remove => "remove",
        Reset => "reset",
    }
}

/// A registered disk image from which virtual machines are deployed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Template {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displaytext", default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub format: Option<TemplateFormat>,
    #[serde(rename = "templatetype", default)]
    pub template_type: Option<TemplateType>,
    #[serde(default)]
    pub hypervisor: Option<String>,
    /// Free-form download status, e.g. `"Download Complete"`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_int")]
    pub size: Option<u64>,
    #[serde(default)]
    pub checksum: Option<String>,

    #[serde(rename = "ostypeid", default, deserialize_with = "wire::opt_id")]
    pub os_type_id: Option<String>,
    #[serde(rename = "ostypename", default)]
    pub os_type_name: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(rename = "accountid", default, deserialize_with = "wire::opt_id")]
    pub account_id: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "hostid", alias = "hostId", default, deserialize_with = "wire::opt_id")]
    pub host_id: Option<String>,
    #[serde(rename = "hostname", default)]
    pub host_name: Option<String>,
    #[serde(rename = "sourcetemplateid", default, deserialize_with = "wire::opt_id")]
    pub source_template_id: Option<String>,
    #[serde(rename = "templatetag", default)]
    pub template_tag: Option<String>,

    #[serde(rename = "crossZones", default)]
    pub cross_zones: bool,
    #[serde(default)]
    pub bootable: bool,
    #[serde(rename = "isextractable", default)]
    pub extractable: bool,
    #[serde(rename = "isfeatured", default)]
    pub featured: bool,
    #[serde(rename = "ispublic", default)]
    pub public: bool,
    #[serde(rename = "isready", default)]
    pub ready: bool,
    #[serde(rename = "passwordenabled", default)]
    pub password_enabled: bool,

    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "jobstatus", default)]
    pub job_status: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub removed: Option<DateTime<Utc>>,
}

/// A bootable CD image that can be attached to virtual machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Iso {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displaytext", default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub hypervisor: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_int")]
    pub size: Option<u64>,
    #[serde(default)]
    pub checksum: Option<String>,
    #[serde(rename = "ostypeid", default, deserialize_with = "wire::opt_id")]
    pub os_type_id: Option<String>,
    #[serde(rename = "ostypename", default)]
    pub os_type_name: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(rename = "accountid", default, deserialize_with = "wire::opt_id")]
    pub account_id: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "hostid", default, deserialize_with = "wire::opt_id")]
    pub host_id: Option<String>,
    #[serde(rename = "hostname", default)]
    pub host_name: Option<String>,
    #[serde(rename = "sourcetemplateid", default, deserialize_with = "wire::opt_id")]
    pub source_template_id: Option<String>,
    #[serde(rename = "templatetag", default)]
    pub template_tag: Option<String>,
    #[serde(rename = "templatetype", default)]
    pub template_type: Option<TemplateType>,
    #[serde(rename = "crossZones", default)]
    pub cross_zones: bool,
    #[serde(default)]
    pub bootable: bool,
    #[serde(rename = "isextractable", default)]
    pub extractable: bool,
    #[serde(rename = "isfeatured", default)]
    pub featured: bool,
    #[serde(rename = "ispublic", default)]
    pub public: bool,
    #[serde(rename = "isready", default)]
    pub ready: bool,
    #[serde(rename = "passwordenabled", default)]
    pub password_enabled: bool,
    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "jobstatus", default)]
    pub job_status: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub removed: Option<DateTime<Utc>>,
}

/// Accounts a template or ISO is shared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct TemplatePermission {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(rename = "account", default)]
    pub accounts: Vec<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "ispublic", default)]
    pub public: bool,
}

/// Where an extracted template or ISO can be downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ExtractResponse {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "extractMode", default)]
    pub mode: Option<ExtractMode>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OsType {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(rename = "oscategoryid", default, deserialize_with = "wire::opt_id")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OsCategory {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
