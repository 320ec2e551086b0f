//! The command catalog.
//!
//! One `const` [`CommandSpec`] per operation. Single-item lookups share the
//! wire command of their list form and differ only in their required `id`
//! and their 404 fallback.

use crate::command::{CommandSpec, Fallback, ResponseShape};

use Fallback::{Error, NullOnNotFound, VoidOnNotFound};
use ResponseShape::{Discard, Named, UnwrapOnly};

// Accounts
pub const LIST_ACCOUNTS: CommandSpec = CommandSpec::list("listAccounts", "account");
pub const GET_ACCOUNT: CommandSpec = CommandSpec::get("listAccounts", "account", &["id"]);
pub const ENABLE_ACCOUNT: CommandSpec =
    CommandSpec::command("enableAccount", &["account", "domainid"], Named("account"), Error);
pub const DISABLE_ACCOUNT: CommandSpec =
    CommandSpec::command("disableAccount", &["account", "domainid", "lock"], UnwrapOnly, Error);
pub const LOCK_ACCOUNT: CommandSpec =
    CommandSpec::command("lockAccount", &["account", "domainid"], Named("account"), Error);

// Domains
pub const LIST_DOMAINS: CommandSpec = CommandSpec::list("listDomains", "domain");
pub const GET_DOMAIN: CommandSpec = CommandSpec::get("listDomains", "domain", &["id"]);
pub const LIST_DOMAIN_CHILDREN: CommandSpec = CommandSpec::list("listDomainChildren", "domain");

// Zones and pods
pub const LIST_ZONES: CommandSpec = CommandSpec::list("listZones", "zone");
pub const GET_ZONE: CommandSpec = CommandSpec::get("listZones", "zone", &["id"]);
pub const LIST_PODS: CommandSpec = CommandSpec::list("listPods", "pod");
pub const GET_POD: CommandSpec = CommandSpec::get("listPods", "pod", &["id"]);

// Hosts, clusters and storage
pub const LIST_HOSTS: CommandSpec = CommandSpec::list("listHosts", "host");
pub const ADD_HOST: CommandSpec = CommandSpec::command(
    "addHost",
    &["zoneid", "url", "hypervisor", "username", "password"],
    Named("host"),
    Error,
);
pub const UPDATE_HOST: CommandSpec = CommandSpec::command("updateHost", &["id"], Named("host"), Error);
pub const UPDATE_HOST_PASSWORD: CommandSpec =
    CommandSpec::command("updateHostPassword", &["hostid", "username", "password"], Discard, Error);
pub const DELETE_HOST: CommandSpec = CommandSpec::command("deleteHost", &["id"], Discard, VoidOnNotFound);
pub const PREPARE_HOST_FOR_MAINTENANCE: CommandSpec =
    CommandSpec::command("prepareHostForMaintenance", &["id"], Named("jobid"), Error);
pub const CANCEL_HOST_MAINTENANCE: CommandSpec =
    CommandSpec::command("cancelHostMaintenance", &["id"], Named("jobid"), Error);
pub const RECONNECT_HOST: CommandSpec = CommandSpec::command("reconnectHost", &["id"], Named("jobid"), Error);
pub const ADD_SECONDARY_STORAGE: CommandSpec =
    CommandSpec::command("addSecondaryStorage", &["url"], Named("host"), Error);
pub const LIST_CLUSTERS: CommandSpec = CommandSpec::list("listClusters", "cluster");
pub const ADD_CLUSTER: CommandSpec = CommandSpec::command(
    "addCluster",
    &["zoneid", "clustername", "clustertype", "hypervisor"],
    Named("cluster"),
    Error,
);
pub const UPDATE_CLUSTER: CommandSpec = CommandSpec::command("updateCluster", &["id"], Named("cluster"), Error);
/// Sent as `updateHostPassword` scoped to every host of a cluster.
pub const UPDATE_CLUSTER_PASSWORD: CommandSpec =
    CommandSpec::command("updateHostPassword", &["clusterid", "username", "password"], Discard, Error);
pub const DELETE_CLUSTER: CommandSpec = CommandSpec::command("deleteCluster", &["id"], Discard, VoidOnNotFound);
pub const LIST_STORAGE_POOLS: CommandSpec = CommandSpec::list("listStoragePools", "storagepool");

// Firewall, egress and port forwarding
pub const LIST_FIREWALL_RULES: CommandSpec = CommandSpec::list("listFirewallRules", "firewallrule");
pub const GET_FIREWALL_RULE: CommandSpec = CommandSpec::get("listFirewallRules", "firewallrule", &["id"]);
pub const CREATE_FIREWALL_RULE: CommandSpec =
    CommandSpec::command("createFirewallRule", &["ipaddressid", "protocol"], UnwrapOnly, Error);
pub const DELETE_FIREWALL_RULE: CommandSpec =
    CommandSpec::command("deleteFirewallRule", &["id"], Discard, VoidOnNotFound);

pub const LIST_EGRESS_FIREWALL_RULES: CommandSpec =
    CommandSpec::list("listEgressFirewallRules", "firewallrule");
pub const GET_EGRESS_FIREWALL_RULE: CommandSpec =
    CommandSpec::get("listEgressFirewallRules", "firewallrule", &["id"]);
pub const CREATE_EGRESS_FIREWALL_RULE: CommandSpec =
    CommandSpec::command("createEgressFirewallRule", &["ipaddressid", "protocol"], UnwrapOnly, Error);
pub const DELETE_EGRESS_FIREWALL_RULE: CommandSpec =
    CommandSpec::command("deleteEgressFirewallRule", &["id"], Discard, VoidOnNotFound);

pub const LIST_PORT_FORWARDING_RULES: CommandSpec =
    CommandSpec::list("listPortForwardingRules", "portforwardingrule");
pub const GET_PORT_FORWARDING_RULE: CommandSpec =
    CommandSpec::get("listPortForwardingRules", "portforwardingrule", &["id"]);
pub const CREATE_PORT_FORWARDING_RULE: CommandSpec = CommandSpec::command(
    "createPortForwardingRule",
    &["ipaddressid", "protocol", "publicport", "virtualmachineid", "privateport"],
    UnwrapOnly,
    Error,
);
pub const DELETE_PORT_FORWARDING_RULE: CommandSpec =
    CommandSpec::command("deletePortForwardingRule", &["id"], Discard, VoidOnNotFound);

// Security groups
pub const LIST_SECURITY_GROUPS: CommandSpec = CommandSpec::list("listSecurityGroups", "securitygroup");
pub const GET_SECURITY_GROUP: CommandSpec = CommandSpec::get("listSecurityGroups", "securitygroup", &["id"]);
pub const GET_SECURITY_GROUP_BY_NAME: CommandSpec =
    CommandSpec::get("listSecurityGroups", "securitygroup", &["securitygroupname"]);
pub const CREATE_SECURITY_GROUP: CommandSpec =
    CommandSpec::command("createSecurityGroup", &["name"], Named("securitygroup"), Error);
/// Ports or ICMP type and code, from CIDRs or other groups; only the target
/// group and protocol are common to every form.
pub const AUTHORIZE_SECURITY_GROUP_INGRESS: CommandSpec = CommandSpec::command(
    "authorizeSecurityGroupIngress",
    &["securitygroupid", "protocol"],
    Named("jobid"),
    Error,
);
pub const REVOKE_SECURITY_GROUP_INGRESS: CommandSpec =
    CommandSpec::command("revokeSecurityGroupIngress", &["id"], Named("jobid"), Error);
pub const DELETE_SECURITY_GROUP: CommandSpec =
    CommandSpec::command("deleteSecurityGroup", &["id"], Discard, VoidOnNotFound);

// Templates
pub const CREATE_TEMPLATE: CommandSpec =
    CommandSpec::command("createTemplate", &["name", "ostypeid", "displaytext"], UnwrapOnly, Error);
pub const REGISTER_TEMPLATE: CommandSpec = CommandSpec::command(
    "registerTemplate",
    &["format", "hypervisor", "url", "zoneid", "name", "ostypeid", "displaytext"],
    Named("template"),
    Error,
);
pub const UPDATE_TEMPLATE: CommandSpec = CommandSpec::command("updateTemplate", &["id"], Named("template"), Error);
pub const COPY_TEMPLATE: CommandSpec =
    CommandSpec::command("copyTemplate", &["id", "sourcezoneid", "destzoneid"], UnwrapOnly, Error);
pub const DELETE_TEMPLATE: CommandSpec = CommandSpec::command("deleteTemplate", &["id"], UnwrapOnly, Error);
pub const LIST_TEMPLATES: CommandSpec = CommandSpec::list("listTemplates", "template").requiring(&["templatefilter"]);
pub const GET_TEMPLATE_IN_ZONE: CommandSpec =
    CommandSpec::get("listTemplates", "template", &["templatefilter", "id", "zoneid"]);
pub const UPDATE_TEMPLATE_PERMISSIONS: CommandSpec =
    CommandSpec::command("updateTemplatePermissions", &["id"], Discard, Error);
pub const LIST_TEMPLATE_PERMISSIONS: CommandSpec = CommandSpec {
    fallback: Error,
    ..CommandSpec::list("listTemplatePermissions", "templatepermission").requiring(&["id"])
};
pub const EXTRACT_TEMPLATE: CommandSpec =
    CommandSpec::command("extractTemplate", &["id", "mode", "zoneid"], UnwrapOnly, Error);

// ISOs
pub const REGISTER_ISO: CommandSpec =
    CommandSpec::command("registerIso", &["name", "url", "displaytext", "zoneid"], Named("iso"), Error);
pub const ATTACH_ISO: CommandSpec =
    CommandSpec::command("attachIso", &["id", "virtualmachineid"], UnwrapOnly, Error);
pub const DETACH_ISO: CommandSpec = CommandSpec::command("detachIso", &["virtualmachineid"], UnwrapOnly, Error);
pub const UPDATE_ISO: CommandSpec = CommandSpec::command("updateIso", &["id"], UnwrapOnly, Error);
pub const DELETE_ISO: CommandSpec = CommandSpec::command("deleteIso", &["id"], UnwrapOnly, Error);
pub const COPY_ISO: CommandSpec =
    CommandSpec::command("copyIso", &["id", "sourcezoneid", "destzoneid"], UnwrapOnly, Error);
pub const EXTRACT_ISO: CommandSpec =
    CommandSpec::command("extractIso", &["id", "mode", "zoneid"], UnwrapOnly, Error);
pub const UPDATE_ISO_PERMISSIONS: CommandSpec = CommandSpec::command("updateIsoPermissions", &["id"], Discard, Error);
pub const LIST_ISO_PERMISSIONS: CommandSpec = CommandSpec {
    fallback: Error,
    ..CommandSpec::list("listIsoPermissions", "isopermission").requiring(&["id"])
};
pub const LIST_ISOS: CommandSpec = CommandSpec::list("listIsos", "iso");
pub const GET_ISO: CommandSpec = CommandSpec::get("listIsos", "iso", &["id"]);

// Virtual machines
pub const DEPLOY_VIRTUAL_MACHINE: CommandSpec = CommandSpec::command(
    "deployVirtualMachine",
    &["zoneid", "serviceofferingid", "templateid"],
    UnwrapOnly,
    Error,
);
pub const LIST_VIRTUAL_MACHINES: CommandSpec = CommandSpec::list("listVirtualMachines", "virtualmachine");
pub const GET_VIRTUAL_MACHINE: CommandSpec = CommandSpec::get("listVirtualMachines", "virtualmachine", &["id"]);
pub const START_VIRTUAL_MACHINE: CommandSpec =
    CommandSpec::command("startVirtualMachine", &["id"], Named("jobid"), Error);
pub const STOP_VIRTUAL_MACHINE: CommandSpec =
    CommandSpec::command("stopVirtualMachine", &["id"], Named("jobid"), Error);
pub const REBOOT_VIRTUAL_MACHINE: CommandSpec =
    CommandSpec::command("rebootVirtualMachine", &["id"], Named("jobid"), Error);
pub const DESTROY_VIRTUAL_MACHINE: CommandSpec =
    CommandSpec::command("destroyVirtualMachine", &["id"], Named("jobid"), Error);
pub const RESET_PASSWORD_FOR_VIRTUAL_MACHINE: CommandSpec =
    CommandSpec::command("resetPasswordForVirtualMachine", &["id"], Named("jobid"), Error);

// OS types
pub const LIST_OS_TYPES: CommandSpec = CommandSpec::list("listOsTypes", "ostype");
pub const GET_OS_TYPE: CommandSpec = CommandSpec::get("listOsTypes", "ostype", &["id"]);
pub const LIST_OS_CATEGORIES: CommandSpec = CommandSpec::list("listOsCategories", "oscategory");

// Alerts
pub const LIST_ALERTS: CommandSpec = CommandSpec::list("listAlerts", "alert");

// Async jobs
pub const LIST_ASYNC_JOBS: CommandSpec = CommandSpec::list("listAsyncJobs", "asyncjobs");
pub const QUERY_ASYNC_JOB_RESULT: CommandSpec =
    CommandSpec::command("queryAsyncJobResult", &["jobid"], UnwrapOnly, NullOnNotFound);

/// Every catalogued command. List forms precede their single-item lookups,
/// so [`lookup`] resolves a wire name to the list form.
pub const ALL: &[CommandSpec] = &[
    LIST_ACCOUNTS,
    GET_ACCOUNT,
    ENABLE_ACCOUNT,
    DISABLE_ACCOUNT,
    LOCK_ACCOUNT,
    LIST_DOMAINS,
    GET_DOMAIN,
    LIST_DOMAIN_CHILDREN,
    LIST_ZONES,
    GET_ZONE,
    LIST_PODS,
    GET_POD,
    LIST_HOSTS,
    ADD_HOST,
    UPDATE_HOST,
    UPDATE_HOST_PASSWORD,
    DELETE_HOST,
    PREPARE_HOST_FOR_MAINTENANCE,
    CANCEL_HOST_MAINTENANCE,
    RECONNECT_HOST,
    ADD_SECONDARY_STORAGE,
    LIST_CLUSTERS,
    ADD_CLUSTER,
    UPDATE_CLUSTER,
    UPDATE_CLUSTER_PASSWORD,
    DELETE_CLUSTER,
    LIST_STORAGE_POOLS,
    LIST_FIREWALL_RULES,
    GET_FIREWALL_RULE,
    CREATE_FIREWALL_RULE,
    DELETE_FIREWALL_RULE,
    LIST_EGRESS_FIREWALL_RULES,
    GET_EGRESS_FIREWALL_RULE,
    CREATE_EGRESS_FIREWALL_RULE,
    DELETE_EGRESS_FIREWALL_RULE,
    LIST_PORT_FORWARDING_RULES,
    GET_PORT_FORWARDING_RULE,
    CREATE_PORT_FORWARDING_RULE,
    DELETE_PORT_FORWARDING_RULE,
    LIST_SECURITY_GROUPS,
    GET_SECURITY_GROUP,
    GET_SECURITY_GROUP_BY_NAME,
    CREATE_SECURITY_GROUP,
    AUTHORIZE_SECURITY_GROUP_INGRESS,
    REVOKE_SECURITY_GROUP_INGRESS,
    DELETE_SECURITY_GROUP,
    CREATE_TEMPLATE,
    REGISTER_TEMPLATE,
    UPDATE_TEMPLATE,
    COPY_TEMPLATE,
    DELETE_TEMPLATE,
    LIST_TEMPLATES,
    GET_TEMPLATE_IN_ZONE,
    UPDATE_TEMPLATE_PERMISSIONS,
    LIST_TEMPLATE_PERMISSIONS,
    EXTRACT_TEMPLATE,
    REGISTER_ISO,
    ATTACH_ISO,
    DETACH_ISO,
    UPDATE_ISO,
    DELETE_ISO,
    COPY_ISO,
    EXTRACT_ISO,
    UPDATE_ISO_PERMISSIONS,
    LIST_ISO_PERMISSIONS,
    LIST_ISOS,
    GET_ISO,
    DEPLOY_VIRTUAL_MACHINE,
    LIST_VIRTUAL_MACHINES,
    GET_VIRTUAL_MACHINE,
    START_VIRTUAL_MACHINE,
    STOP_VIRTUAL_MACHINE,
    REBOOT_VIRTUAL_MACHINE,
    DESTROY_VIRTUAL_MACHINE,
    RESET_PASSWORD_FOR_VIRTUAL_MACHINE,
    LIST_OS_TYPES,
    GET_OS_TYPE,
    LIST_OS_CATEGORIES,
    LIST_ALERTS,
    LIST_ASYNC_JOBS,
    QUERY_ASYNC_JOB_RESULT,
];

/// Finds a command by wire name, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    ALL.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}
