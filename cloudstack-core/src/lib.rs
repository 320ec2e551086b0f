//! Domain types for the CloudStack command API.
//!
//! Every type here is a read-only snapshot of a server resource, decoded from
//! the JSON the management server returns. Enum-valued fields carry the
//! server's wire code and decode unknown codes to `Unrecognized` instead of
//! failing.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

mod wire;

pub mod account;
pub mod alert;
pub mod error;
pub mod id;
pub mod image;
pub mod infrastructure;
pub mod job;
pub mod network;
pub mod usage;
pub mod vm;
pub mod volume;

pub use account::{Account, AccountState, AccountType, Domain, User};
pub use alert::Alert;
pub use error::CoreError;
pub use id::JobId;
pub use image::{
    ExtractMode, ExtractResponse, Iso, OsCategory, OsType, PermissionOperation, Template,
    TemplateFilter, TemplateFormat, TemplatePermission, TemplateType,
};
pub use infrastructure::{
    AllocationState, Cluster, ClusterType, Host, HostState, HostType, ManagedState, NetworkType,
    Pod, StoragePool, StoragePoolState, StoragePoolType, Zone,
};
pub use job::{AsyncCreateResponse, AsyncJob, AsyncJobError, ErrorCode, JobStatus, ResultCode};
pub use network::{
    FirewallProtocol, FirewallRule, FirewallRuleState, GuestIpType, IngressRule, Network,
    NetworkService, PortForwardingProtocol, PortForwardingRule, PortForwardingRuleState,
    PublicIpAddress, PublicIpState, SecurityGroup, ServiceCapability, TrafficType,
};
pub use usage::{UsageRecord, UsageType};
pub use vm::{Nic, SecurityGroupRef, VirtualMachine, VmState};
pub use volume::{Volume, VolumeState, VolumeType};
pub use wire::{parse_date, DATE_FORMAT};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn disabled_account_job_yields_disabled_state() {
        let job: AsyncJob<Account> = match AsyncJob::from_value(json!({
            "jobid": "50006", "jobstatus": 1, "jobprocstatus": 0, "jobresultcode": 0,
            "jobresulttype": "object",
            "jobresult": {"account": {"id": 505, "name": "acme", "accounttype": 0, "state": "disabled"}}
        })) {
            Ok(job) => job,
            Err(e) => panic!("job must decode: {e}"),
        };
        let account = match job.result {
            Some(a) => a,
            None => panic!("succeeded job must carry the account"),
        };
        assert_eq!(account.state, Some(AccountState::Disabled));
    }

    #[test]
    fn enum_display_renders_wire_code() {
        assert_eq!(AllocationState::Enabled.to_string(), "Enabled");
        assert_eq!(AccountType::Admin.to_string(), "1");
        assert_eq!(JobStatus::Failed.code(), Some(2));
        assert_eq!(ErrorCode::from_code(537), ErrorCode::NetworkRuleConflictError);
    }

    #[test]
    fn unrecognized_codes_never_fail_decoding() {
        let state: HostState = match serde_json::from_str("\"Levitating\"") {
            Ok(s) => s,
            Err(e) => panic!("unknown host state must decode: {e}"),
        };
        assert_eq!(state, HostState::Unrecognized);
        let code: ErrorCode = match serde_json::from_str("999") {
            Ok(c) => c,
            Err(e) => panic!("unknown error code must decode: {e}"),
        };
        assert_eq!(code, ErrorCode::Unrecognized);
    }
}
