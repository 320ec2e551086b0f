//! Disk volumes attached to virtual machines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vm::VmState;
use crate::wire::{self, wire_enum};

wire_enum! {
    pub enum VolumeState {
        Allocated => "Allocated",
        Creating => "Creating",
        Ready => "Ready",
        Destroyed => "Destroyed",
        Failed => "Failed",
    }
}

wire_enum! {
    pub enum VolumeType {
        /// The disk the guest boots from.
        Root => "ROOT",
        DataDisk => "DATADISK",
    }
}

/// A root or data disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Volume {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<VolumeState>,
    #[serde(rename = "type", default)]
    pub volume_type: Option<VolumeType>,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub attached: Option<DateTime<Utc>>,
    #[serde(default)]
    pub destroyed: bool,
    #[serde(rename = "isextractable", default)]
    pub is_extractable: bool,

    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(rename = "zonename", default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub hypervisor: Option<String>,
    #[serde(default)]
    pub storage: Option<String>,
    #[serde(rename = "storagetype", default)]
    pub storage_type: Option<String>,

    #[serde(rename = "virtualmachineid", default, deserialize_with = "wire::opt_id")]
    pub virtual_machine_id: Option<String>,
    #[serde(rename = "vmname", default)]
    pub vm_name: Option<String>,
    #[serde(rename = "vmdisplayname", default)]
    pub vm_display_name: Option<String>,
    #[serde(rename = "vmstate", default)]
    pub vm_state: Option<VmState>,
    #[serde(rename = "deviceid", default, deserialize_with = "wire::opt_id")]
    pub device_id: Option<String>,

    #[serde(rename = "diskofferingid", default, deserialize_with = "wire::opt_id")]
    pub disk_offering_id: Option<String>,
    #[serde(rename = "diskofferingname", default)]
    pub disk_offering_name: Option<String>,
    #[serde(rename = "diskofferingdisplaytext", default)]
    pub disk_offering_display_text: Option<String>,
    #[serde(rename = "serviceofferingid", default, deserialize_with = "wire::opt_id")]
    pub service_offering_id: Option<String>,
    #[serde(rename = "serviceofferingname", default)]
    pub service_offering_name: Option<String>,
    #[serde(rename = "serviceofferingdisplaytext", default)]
    pub service_offering_display_text: Option<String>,
    #[serde(rename = "snapshotid", default, deserialize_with = "wire::opt_id")]
    pub snapshot_id: Option<String>,

    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "jobstatus", default, deserialize_with = "wire::opt_int")]
    pub job_status: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_volume_decodes_vm_attachment() {
        let volume: Volume = match serde_json::from_str(
            r#"{"id": 203, "name": "ROOT-54", "zoneid": 1, "zonename": "San Jose 1", "type": "ROOT",
                "deviceid": 0, "virtualmachineid": 54, "vmname": "i-3-54-VM", "vmdisplayname": "web1",
                "vmstate": "Running", "size": 8589934592, "created": "2011-02-23T20:15:01-0800",
                "state": "Ready", "account": "ops", "domainid": 1, "domain": "ROOT",
                "storagetype": "shared", "hypervisor": "XenServer", "storage": "NFS Pri 1",
                "destroyed": false, "serviceofferingid": 1, "isextractable": false}"#,
        ) {
            Ok(v) => v,
            Err(e) => panic!("volume must decode: {e}"),
        };
        assert_eq!(volume.volume_type, Some(VolumeType::Root));
        assert_eq!(volume.state, Some(VolumeState::Ready));
        assert_eq!(volume.vm_state, Some(VmState::Running));
        assert_eq!(volume.device_id.as_deref(), Some("0"));
        assert_eq!(volume.size, 8_589_934_592);
        assert!(volume.attached.is_none());
    }

    #[test]
    fn volume_type_matches_case_insensitively() {
        assert_eq!(VolumeType::from_wire("datadisk"), VolumeType::DataDisk);
        assert_eq!(VolumeType::DataDisk.to_string(), "DATADISK");
    }
}
