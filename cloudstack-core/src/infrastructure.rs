//! Zones, pods, clusters, hosts and primary storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::job::JobStatus;
use crate::wire::{self, wire_enum};

wire_enum! {
    /// Whether new resources may be allocated on a zone, pod, cluster or host.
    pub enum AllocationState {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

wire_enum! {
    pub enum NetworkType {
        Basic => "Basic",
        Advanced => "Advanced",
    }
}

wire_enum! {
    pub enum ClusterType {
        CloudManaged => "CloudManaged",
        ExternalManaged => "ExternalManaged",
    }
}

wire_enum! {
    pub enum ManagedState {
        Managed => "Managed",
        PrepareUnmanaged => "PrepareUnmanaged",
        Unmanaged => "Unmanaged",
        PrepareUnmanagedError => "PrepareUnmanagedError",
    }
}

wire_enum! {
    pub enum HostState {
        Connecting => "Connecting",
        Up => "Up",
        Down => "Down",
        Disconnected => "Disconnected",
        Updating => "Updating",
        PrepareForMaintenance => "PrepareForMaintenance",
        ErrorInMaintenance => "ErrorInMaintenance",
        Maintenance => "Maintenance",
        Alert => "Alert",
        Removed => "Removed",
        Rebalancing => "Rebalancing",
    }
}

wire_enum! {
    pub enum HostType {
        Storage => "Storage",
        Routing => "Routing",
        SecondaryStorage => "SecondaryStorage",
        SecondaryStorageCmdExecutor => "SecondaryStorageCmdExecutor",
        ConsoleProxy => "ConsoleProxy",
        ExternalFirewall => "ExternalFirewall",
        ExternalLoadBalancer => "ExternalLoadBalancer",
        PxeServer => "PxeServer",
        TrafficMonitor => "TrafficMonitor",
        ExternalDhcp => "ExternalDhcp",
        SecondaryStorageVm => "SecondaryStorageVM",
        LocalSecondaryStorage => "LocalSecondaryStorage",
    }
}

wire_enum! {
    pub enum StoragePoolState {
        Up => "Up",
        PrepareForMaintenance => "PrepareForMaintenance",
        ErrorInMaintenance => "ErrorInMaintenance",
        CancelMaintenance => "CancelMaintenance",
        Maintenance => "Maintenance",
        Removed => "Removed",
    }
}

wire_enum! {
    pub enum StoragePoolType {
        Filesystem => "Filesystem",
        NetworkFilesystem => "NetworkFilesystem",
        IscsiLun => "IscsiLUN",
        Iscsi => "Iscsi",
        Iso => "Iso",
        Lvm => "LVM",
        Clvm => "CLVM",
        SharedMountPoint => "SharedMountPoint",
        Vmfs => "VMFS",
        PreSetup => "PreSetup",
        Ext => "EXT",
        Ocfs2 => "OCFS2",
    }
}

/// An availability zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Zone {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "networktype", default)]
    pub network_type: Option<NetworkType>,
    #[serde(rename = "securitygroupsenabled", default)]
    pub security_groups_enabled: bool,
    #[serde(rename = "allocationstate", default)]
    pub allocation_state: Option<AllocationState>,
    #[serde(default)]
    pub dns1: Option<String>,
    #[serde(default)]
    pub dns2: Option<String>,
    #[serde(default)]
    pub internaldns1: Option<String>,
    #[serde(default)]
    pub internaldns2: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "guestcidraddress", default)]
    pub guest_cidr_address: Option<String>,
    #[serde(default)]
    pub vlan: Option<String>,
}

/// A rack of hosts within a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Pod {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub netmask: Option<String>,
    #[serde(rename = "startip", default)]
    pub start_ip: Option<String>,
    #[serde(rename = "endip", default)]
    pub end_ip: Option<String>,
    #[serde(rename = "allocationstate", default)]
    pub allocation_state: Option<AllocationState>,
}

/// A group of hosts sharing a hypervisor and primary storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Cluster {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "podid", default, deserialize_with = "wire::opt_id")]
    pub pod_id: Option<String>,
    #[serde(rename = "podname", default)]
    pub pod_name: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(rename = "hypervisortype", default)]
    pub hypervisor: Option<String>,
    #[serde(rename = "clustertype", default)]
    pub cluster_type: Option<ClusterType>,
    #[serde(rename = "allocationstate", default)]
    pub allocation_state: Option<AllocationState>,
    #[serde(rename = "managedstate", default)]
    pub managed_state: Option<ManagedState>,
}

/// A hypervisor or system host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Host {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<HostState>,
    #[serde(rename = "type", default)]
    pub host_type: Option<HostType>,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub hypervisor: Option<String>,
    #[serde(rename = "allocationstate", default)]
    pub allocation_state: Option<AllocationState>,

    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(rename = "podid", default, deserialize_with = "wire::opt_id")]
    pub pod_id: Option<String>,
    #[serde(rename = "podname", default)]
    pub pod_name: Option<String>,
    #[serde(rename = "clusterid", default, deserialize_with = "wire::opt_id")]
    pub cluster_id: Option<String>,
    #[serde(rename = "clustername", default)]
    pub cluster_name: Option<String>,
    #[serde(rename = "clustertype", default)]
    pub cluster_type: Option<ClusterType>,
    #[serde(rename = "oscategoryid", default, deserialize_with = "wire::opt_id")]
    pub os_category_id: Option<String>,
    #[serde(rename = "oscategoryname", default)]
    pub os_category_name: Option<String>,

    #[serde(rename = "cpunumber", default)]
    pub cpu_number: u32,
    #[serde(rename = "cpuspeed", default)]
    pub cpu_speed: u32,
    /// Percentage string as reported, e.g. `"12.5%"`.
    #[serde(rename = "cpuallocated", default)]
    pub cpu_allocated: Option<String>,
    #[serde(rename = "cpuused", default)]
    pub cpu_used: Option<String>,
    #[serde(rename = "averageload", default)]
    pub average_load: u64,
    #[serde(rename = "memorytotal", default)]
    pub memory_total: u64,
    #[serde(rename = "memoryallocated", default)]
    pub memory_allocated: u64,
    #[serde(rename = "memoryused", default)]
    pub memory_used: u64,
    #[serde(rename = "disksizetotal", default)]
    pub disk_size_total: u64,
    #[serde(rename = "disksizeallocated", default)]
    pub disk_size_allocated: u64,
    #[serde(rename = "networkkbsread", default)]
    pub network_kbs_read: u64,
    #[serde(rename = "networkkbswrite", default)]
    pub network_kbs_write: u64,

    #[serde(default)]
    pub capabilities: Option<String>,
    #[serde(rename = "hosttags", default, deserialize_with = "wire::csv")]
    pub tags: Vec<String>,
    #[serde(rename = "hasenoughcapacity", default)]
    pub has_enough_capacity: bool,
    #[serde(rename = "islocalstorageactive", default)]
    pub local_storage_active: bool,
    #[serde(default)]
    pub events: Option<String>,
    #[serde(rename = "managementserverid", default, deserialize_with = "wire::opt_id")]
    pub management_server_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,

    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "jobstatus", default)]
    pub job_status: Option<JobStatus>,

    #[serde(default, deserialize_with = "wire::opt_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "lastpinged", default, deserialize_with = "wire::opt_date")]
    pub last_pinged: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub disconnected: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub removed: Option<DateTime<Utc>>,
}

/// A primary storage pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct StoragePool {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "wire::csv")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub state: Option<StoragePoolState>,
    #[serde(rename = "type", default)]
    pub pool_type: Option<StoragePoolType>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(rename = "podid", default, deserialize_with = "wire::opt_id")]
    pub pod_id: Option<String>,
    #[serde(rename = "podname", default)]
    pub pod_name: Option<String>,
    #[serde(rename = "clusterid", default, deserialize_with = "wire::opt_id")]
    pub cluster_id: Option<String>,
    #[serde(rename = "clustername", default)]
    pub cluster_name: Option<String>,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "disksizetotal", default)]
    pub disk_size_total: u64,
    #[serde(rename = "disksizeallocated", default)]
    pub disk_size_allocated: u64,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "jobstatus", default)]
    pub job_status: Option<String>,
}
