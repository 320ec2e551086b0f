//! Typed accessors grouped by resource family.
//!
//! Each accessor borrows the client and resolves its operations against the
//! [`catalog`](crate::catalog). Optional parameters are collected with
//! per-command option builders that preserve insertion order.

/// Declares an option builder: a newtype over [`QueryParams`] with one setter
/// per optional wire parameter.
///
/// [`QueryParams`]: crate::command::QueryParams
macro_rules! options {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $method:ident => $key:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name(crate::command::QueryParams);

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                #[must_use]
                pub fn $method(mut self, value: impl std::fmt::Display) -> Self {
                    self.0.set($key, value);
                    self
                }
            )*

            /// Sets a parameter that has no dedicated setter.
            #[must_use]
            pub fn param(mut self, key: &str, value: impl std::fmt::Display) -> Self {
                self.0.set(key, value);
                self
            }

            /// Removes a parameter set earlier.
            #[must_use]
            pub fn unset(mut self, key: &str) -> Self {
                self.0.remove(key);
                self
            }
        }

        impl From<$name> for crate::command::QueryParams {
            fn from(options: $name) -> Self {
                options.0
            }
        }
    };
}

mod accounts;
mod alerts;
mod async_jobs;
mod domains;
mod firewall;
mod hosts;
mod isos;
mod os_types;
mod security_groups;
mod templates;
mod virtual_machines;
mod zones;

pub use accounts::{AccountApi, ListAccountsOptions};
pub use alerts::{AlertApi, ListAlertsOptions};
pub use async_jobs::{AsyncJobApi, ListAsyncJobsOptions};
pub use domains::{DomainApi, ListDomainChildrenOptions, ListDomainsOptions};
pub use firewall::{
    CreateFirewallRuleOptions, CreatePortForwardingRuleOptions, FirewallApi,
    ListFirewallRulesOptions, ListPortForwardingRulesOptions,
};
pub use hosts::{
    AddClusterOptions, AddHostOptions, AddSecondaryStorageOptions, DeleteHostOptions, HostApi,
    ListClustersOptions, ListHostsOptions, ListStoragePoolsOptions, UpdateClusterOptions,
    UpdateHostOptions,
};
pub use isos::{
    DeleteIsoOptions, ExtractIsoOptions, IsoApi, ListIsosOptions, RegisterIsoOptions,
    UpdateIsoOptions,
};
pub use os_types::{ListOsTypesOptions, OsTypeApi};
pub use security_groups::{
    AccountInDomainOptions, CreateSecurityGroupOptions, ListSecurityGroupsOptions,
    SecurityGroupApi,
};
pub use templates::{
    CreateTemplateOptions, DeleteTemplateOptions, ExtractTemplateOptions, ListTemplatesOptions,
    RegisterTemplateOptions, TemplateApi, TemplateMetadata, UpdatePermissionsOptions,
    UpdateTemplateOptions,
};
pub use virtual_machines::{
    DeployVirtualMachineOptions, ListVirtualMachinesOptions, StopVirtualMachineOptions,
    VirtualMachineApi,
};
pub use zones::{ListPodsOptions, ListZonesOptions, ZoneApi};

use crate::command::QueryParams;

fn by_id(id: &str) -> QueryParams {
    QueryParams::new().with("id", id)
}
