use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::job::JobStatus;
use crate::wire::{self, wire_enum};

wire_enum! {
    pub enum VmState {
        Starting => "Starting",
        Running => "Running",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Destroyed => "Destroyed",
        Expunging => "Expunging",
        Migrating => "Migrating",
        Error => "Error",
        Unknown => "Unknown",
        Shutdowned => "Shutdowned",
    }
}

/// A guest instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct VirtualMachine {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displayname", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub state: Option<VmState>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(rename = "groupid", default, deserialize_with = "wire::opt_id")]
    pub group_id: Option<String>,

    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(rename = "hostid", default, deserialize_with = "wire::opt_id")]
    pub host_id: Option<String>,
    #[serde(rename = "hostname", default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub hypervisor: Option<String>,

    #[serde(rename = "templateid", default, deserialize_with = "wire::opt_id")]
    pub template_id: Option<String>,
    #[serde(rename = "templatename", default)]
    pub template_name: Option<String>,
    #[serde(rename = "templatedisplaytext", default)]
    pub template_display_text: Option<String>,
    #[serde(rename = "isoid", default, deserialize_with = "wire::opt_id")]
    pub iso_id: Option<String>,
    #[serde(rename = "isoname", default)]
    pub iso_name: Option<String>,
    #[serde(rename = "guestosid", default, deserialize_with = "wire::opt_id")]
    pub guest_os_id: Option<String>,
    #[serde(rename = "serviceofferingid", default, deserialize_with = "wire::opt_id")]
    pub service_offering_id: Option<String>,
    #[serde(rename = "serviceofferingname", default)]
    pub service_offering_name: Option<String>,
    #[serde(rename = "rootdeviceid", default, deserialize_with = "wire::opt_id")]
    pub root_device_id: Option<String>,
    #[serde(rename = "rootdevicetype", default)]
    pub root_device_type: Option<String>,

    #[serde(rename = "cpunumber", default)]
    pub cpu_count: u32,
    #[serde(rename = "cpuspeed", default)]
    pub cpu_speed: u32,
    #[serde(rename = "cpuused", default)]
    pub cpu_used: Option<String>,
    /// Memory in MiB.
    #[serde(default)]
    pub memory: u64,
    #[serde(rename = "networkkbsread", default)]
    pub network_kbs_read: Option<u64>,
    #[serde(rename = "networkkbswrite", default)]
    pub network_kbs_write: Option<u64>,

    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "publicip", default)]
    pub public_ip: Option<String>,
    #[serde(rename = "publicipid", default, deserialize_with = "wire::opt_id")]
    pub public_ip_id: Option<String>,
    #[serde(rename = "forvirtualnetwork", default)]
    pub uses_virtual_network: bool,
    #[serde(rename = "haenable", default)]
    pub ha_enabled: bool,
    #[serde(rename = "passwordenabled", default)]
    pub password_enabled: bool,
    /// Set only in the result of deploy or reset-password jobs.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    #[serde(rename = "nic", default)]
    pub nics: Vec<Nic>,
    #[serde(rename = "securitygroup", default)]
    pub security_groups: Vec<SecurityGroupRef>,

    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "jobstatus", default)]
    pub job_status: Option<JobStatus>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub created: Option<DateTime<Utc>>,
}

/// A network interface of a virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Nic {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(rename = "networkid", default, deserialize_with = "wire::opt_id")]
    pub network_id: Option<String>,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub netmask: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(rename = "macaddress", default)]
    pub mac_address: Option<String>,
    #[serde(rename = "traffictype", default)]
    pub traffic_type: Option<String>,
    #[serde(rename = "type", default)]
    pub guest_ip_type: Option<String>,
    #[serde(rename = "isdefault", default)]
    pub is_default: bool,
    #[serde(rename = "broadcasturi", default)]
    pub broadcast_uri: Option<String>,
    #[serde(rename = "isolationuri", default)]
    pub isolation_uri: Option<String>,
}

/// The short form of a security group embedded in a virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SecurityGroupRef {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
