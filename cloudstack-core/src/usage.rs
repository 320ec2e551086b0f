//! Usage records for billing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::{self, code_enum};

code_enum! {
    /// What a usage record measures.
    pub enum UsageType {
        RunningVm => 1,
        AllocatedVm => 2,
        IpAddress => 3,
        NetworkBytesSent => 4,
        NetworkBytesReceived => 5,
        Volume => 6,
        Template => 7,
        Iso => 8,
        Snapshot => 9,
        SecurityGroup => 10,
        LoadBalancerPolicy => 11,
        PortForwardingRule => 12,
        NetworkOffering => 13,
        VpnUsers => 14,
    }
}

/// Resource usage of one account over one aggregation period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct UsageRecord {
    #[serde(rename = "usageid", default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "accountid", default, deserialize_with = "wire::opt_id")]
    pub account_id: Option<String>,
    #[serde(rename = "account", default)]
    pub account_name: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,

    #[serde(rename = "startdate", default, deserialize_with = "wire::opt_date")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "enddate", default, deserialize_with = "wire::opt_date")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(rename = "assigndate", default, deserialize_with = "wire::opt_date")]
    pub assign_date: Option<DateTime<Utc>>,
    /// Kept verbatim; servers send it in more than one layout.
    #[serde(rename = "releasedate", default)]
    pub release_date: Option<String>,

    #[serde(rename = "virtualmachineid", default, deserialize_with = "wire::opt_id")]
    pub virtual_machine_id: Option<String>,
    #[serde(rename = "name", default)]
    pub virtual_machine_name: Option<String>,
    #[serde(rename = "offeringid", default, deserialize_with = "wire::opt_id")]
    pub service_offering_id: Option<String>,
    #[serde(rename = "templateid", default, deserialize_with = "wire::opt_id")]
    pub template_id: Option<String>,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "issourcenat", default)]
    pub is_source_nat: bool,

    /// Hours of use, unrounded.
    #[serde(rename = "rawusage", default, deserialize_with = "wire::opt_float")]
    pub raw_usage_hours: Option<f64>,
    /// Human-readable usage, e.g. `0.95 Hrs`.
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(rename = "type", default)]
    pub resource_type: Option<String>,
    #[serde(rename = "usagetype", default)]
    pub usage_type: Option<UsageType>,
}
