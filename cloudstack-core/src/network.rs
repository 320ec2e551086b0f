//! Networks, public addresses, firewall, port forwarding and security group
//! rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::{self, wire_enum};

wire_enum! {
    /// Protocol of a firewall rule; the server expects upper-case codes.
    pub enum FirewallProtocol {
        Tcp => "TCP",
        Udp => "UDP",
        Icmp => "ICMP",
    }
}

wire_enum! {
    pub enum FirewallRuleState {
        Staged => "Staged",
        Add => "Add",
        Active => "Active",
        Revoke => "Revoke",
    }
}

wire_enum! {
    /// Protocol of a port forwarding rule; the server expects lower-case codes.
    pub enum PortForwardingProtocol {
        Tcp => "tcp",
        Udp => "udp",
        Icmp => "icmp",
    }
}

wire_enum! {
    pub enum PortForwardingRuleState {
        /// Created but not yet checked for conflicts.
        Staged => "Staged",
        Add => "Add",
        /// Pushed to the network elements.
        Active => "Active",
        Deleting => "Deleting",
    }
}

wire_enum! {
    /// How guest addresses are handed out on a network.
    pub enum GuestIpType {
        Virtual => "Virtual",
        Direct => "Direct",
        Shared => "Shared",
        Isolated => "Isolated",
    }
}

wire_enum! {
    pub enum TrafficType {
        Guest => "Guest",
        Public => "Public",
        Management => "Management",
        Control => "Control",
        Vlan => "Vlan",
        Storage => "Storage",
    }
}

wire_enum! {
    pub enum PublicIpState {
        Allocating => "Allocating",
        Allocated => "Allocated",
        Releasing => "Releasing",
    }
}

/// A guest, public or system network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Network {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displaytext", default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "zoneid", default, deserialize_with = "wire::opt_id")]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "type", default)]
    pub guest_ip_type: Option<GuestIpType>,
    #[serde(rename = "traffictype", default)]
    pub traffic_type: Option<TrafficType>,

    #[serde(rename = "broadcastdomaintype", default)]
    pub broadcast_domain_type: Option<String>,
    #[serde(rename = "broadcasturi", default)]
    pub broadcast_uri: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub netmask: Option<String>,
    #[serde(rename = "startip", default)]
    pub start_ip: Option<String>,
    #[serde(rename = "endip", default)]
    pub end_ip: Option<String>,
    #[serde(default)]
    pub vlan: Option<String>,
    #[serde(default)]
    pub dns1: Option<String>,
    #[serde(default)]
    pub dns2: Option<String>,
    #[serde(rename = "networkdomain", default)]
    pub network_domain: Option<String>,

    #[serde(rename = "networkofferingid", default, deserialize_with = "wire::opt_id")]
    pub network_offering_id: Option<String>,
    #[serde(rename = "networkofferingname", default)]
    pub network_offering_name: Option<String>,
    #[serde(rename = "networkofferingdisplaytext", default)]
    pub network_offering_display_text: Option<String>,
    #[serde(rename = "networkofferingavailability", default)]
    pub network_offering_availability: Option<String>,
    #[serde(default)]
    pub related: Option<String>,

    #[serde(rename = "isdefault", default)]
    pub is_default: bool,
    #[serde(rename = "isshared", default)]
    pub is_shared: bool,
    #[serde(rename = "issystem", default)]
    pub is_system: bool,
    #[serde(rename = "securitygroupenabled", default)]
    pub security_group_enabled: bool,
    #[serde(default, deserialize_with = "wire::csv")]
    pub tags: Vec<String>,
    #[serde(rename = "service", default)]
    pub services: Vec<NetworkService>,
}

/// A service offered on a network, e.g. `Dhcp` or `Firewall`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NetworkService {
    pub name: String,
    #[serde(rename = "capability", default)]
    pub capabilities: Vec<ServiceCapability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ServiceCapability {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A public IP address allocated to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PublicIpAddress {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub state: Option<PublicIpState>,
    #[serde(default, deserialize_with = "wire::opt_date")]
    pub allocated: Option<DateTime<Utc>>,
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
    #[serde(rename = "networkid", default, deserialize_with = "wire::opt_id")]
    pub network_id: Option<String>,
    #[serde(rename = "associatednetworkid", default, deserialize_with = "wire::opt_id")]
    pub associated_network_id: Option<String>,
    #[serde(rename = "forvirtualnetwork", default)]
    pub for_virtual_network: bool,
    #[serde(rename = "issourcenat", default)]
    pub is_source_nat: bool,
    #[serde(rename = "isstaticnat", default)]
    pub is_static_nat: bool,
    #[serde(rename = "virtualmachineid", default, deserialize_with = "wire::opt_id")]
    pub virtual_machine_id: Option<String>,
    #[serde(rename = "virtualmachinename", default)]
    pub virtual_machine_name: Option<String>,
    #[serde(rename = "virtualmachinedisplayname", default)]
    pub virtual_machine_display_name: Option<String>,
    #[serde(rename = "VLANid", alias = "vlanid", default, deserialize_with = "wire::opt_id")]
    pub vlan_id: Option<String>,
    #[serde(rename = "VLANname", alias = "vlanname", default)]
    pub vlan_name: Option<String>,
    /// Set while the address is still being associated.
    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "jobstatus", default, deserialize_with = "wire::opt_int")]
    pub job_status: Option<i32>,
}

/// An ingress or egress firewall rule on a public IP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct FirewallRule {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub protocol: Option<FirewallProtocol>,
    #[serde(rename = "startport", default, deserialize_with = "wire::opt_int")]
    pub start_port: Option<u16>,
    #[serde(rename = "endport", default, deserialize_with = "wire::opt_int")]
    pub end_port: Option<u16>,
    #[serde(rename = "icmpcode", default, deserialize_with = "wire::opt_int")]
    pub icmp_code: Option<i32>,
    #[serde(rename = "icmptype", default, deserialize_with = "wire::opt_int")]
    pub icmp_type: Option<i32>,
    #[serde(rename = "ipaddressid", default, deserialize_with = "wire::opt_id")]
    pub ip_address_id: Option<String>,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "networkid", default, deserialize_with = "wire::opt_id")]
    pub network_id: Option<String>,
    #[serde(default)]
    pub state: Option<FirewallRuleState>,
    #[serde(rename = "cidrlist", default, deserialize_with = "wire::csv")]
    pub cidrs: Vec<String>,
}

/// A NAT rule forwarding a public port to a virtual machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PortForwardingRule {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub protocol: Option<PortForwardingProtocol>,
    #[serde(rename = "publicport", default, deserialize_with = "wire::opt_int")]
    pub public_port: Option<u16>,
    #[serde(rename = "publicendport", default, deserialize_with = "wire::opt_int")]
    pub public_end_port: Option<u16>,
    #[serde(rename = "privateport", default, deserialize_with = "wire::opt_int")]
    pub private_port: Option<u16>,
    #[serde(rename = "privateendport", default, deserialize_with = "wire::opt_int")]
    pub private_end_port: Option<u16>,
    #[serde(rename = "ipaddressid", default, deserialize_with = "wire::opt_id")]
    pub ip_address_id: Option<String>,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "virtualmachineid", default, deserialize_with = "wire::opt_id")]
    pub virtual_machine_id: Option<String>,
    #[serde(rename = "virtualmachinename", default)]
    pub virtual_machine_name: Option<String>,
    #[serde(rename = "virtualmachinedisplayname", default)]
    pub virtual_machine_display_name: Option<String>,
    #[serde(default)]
    pub state: Option<PortForwardingRuleState>,
    #[serde(rename = "cidrlist", default, deserialize_with = "wire::csv")]
    pub cidrs: Vec<String>,
}

/// A named set of ingress rules applied to virtual machines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SecurityGroup {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(rename = "domainid", default, deserialize_with = "wire::opt_id")]
    pub domain_id: Option<String>,
    #[serde(rename = "jobid", default, deserialize_with = "wire::opt_id")]
    pub job_id: Option<String>,
    #[serde(rename = "ingressrule", default)]
    pub ingress_rules: Vec<IngressRule>,
}

/// One ingress permission inside a [`SecurityGroup`].
///
/// A rule either names a CIDR or another account's security group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct IngressRule {
    #[serde(rename = "ruleid", deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(rename = "startport", default, deserialize_with = "wire::opt_int")]
    pub start_port: Option<u16>,
    #[serde(rename = "endport", default, deserialize_with = "wire::opt_int")]
    pub end_port: Option<u16>,
    #[serde(rename = "icmpcode", default, deserialize_with = "wire::opt_int")]
    pub icmp_code: Option<i32>,
    #[serde(rename = "icmptype", default, deserialize_with = "wire::opt_int")]
    pub icmp_type: Option<i32>,
    #[serde(default)]
    pub cidr: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(rename = "securitygroupname", default)]
    pub security_group_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firewall_rule_decodes_string_ports_and_cidr_list() {
        let rule: FirewallRule = match serde_json::from_str(
            r#"{"id": 2017, "protocol": "tcp", "startport": "30", "endport": "35", "ipaddressid": 2,
                "ipaddress": "10.27.27.51", "state": "Active", "cidrlist": "0.0.0.0/0"}"#,
        ) {
            Ok(r) => r,
            Err(e) => panic!("firewall rule must decode: {e}"),
        };
        assert_eq!(rule.id, "2017");
        assert_eq!(rule.protocol, Some(FirewallProtocol::Tcp), "protocol codes match case-insensitively");
        assert_eq!((rule.start_port, rule.end_port), (Some(30), Some(35)));
        assert_eq!(rule.state, Some(FirewallRuleState::Active));
        assert_eq!(rule.cidrs, vec!["0.0.0.0/0".to_owned()]);
    }

    #[test]
    fn protocol_codes_differ_by_rule_kind() {
        assert_eq!(FirewallProtocol::Tcp.to_string(), "TCP");
        assert_eq!(PortForwardingProtocol::Tcp.to_string(), "tcp");
    }

    #[test]
    fn port_forwarding_rule_decodes_vm_reference() {
        let rule: PortForwardingRule = match serde_json::from_str(
            r#"{"id": "15", "privateport": "22", "protocol": "tcp", "publicport": "2022",
                "virtualmachineid": 3, "virtualmachinename": "i-3-3-VM", "ipaddressid": 3,
                "ipaddress": "72.52.126.32", "state": "Active", "cidrlist": ""}"#,
        ) {
            Ok(r) => r,
            Err(e) => panic!("port forwarding rule must decode: {e}"),
        };
        assert_eq!(rule.public_port, Some(2022));
        assert_eq!(rule.virtual_machine_id.as_deref(), Some("3"));
        assert!(rule.cidrs.is_empty());
    }

    #[test]
    fn network_decodes_type_services_and_tags() {
        let network: Network = match serde_json::from_str(
            r#"{"id": 204, "name": "Virtual Network", "displaytext": "A dedicated virtualized network",
                "broadcastdomaintype": "Vlan", "traffictype": "Guest", "zoneid": 1,
                "networkofferingid": 6, "networkofferingname": "DefaultVirtualizedNetworkOffering",
                "networkofferingavailability": "Required", "isshared": false, "issystem": false,
                "state": "Implemented", "related": 204, "broadcasturi": "vlan://240", "dns1": "8.8.8.8",
                "type": "Virtual", "vlan": "240", "account": "ops", "domainid": 1, "domain": "ROOT",
                "isdefault": true, "tags": "web,db", "securitygroupenabled": false,
                "service": [{"name": "Vpn", "capability": [{"name": "SupportedVpnTypes", "value": "pptp,l2tp,ipsec"}]},
                            {"name": "Dhcp"}]}"#,
        ) {
            Ok(n) => n,
            Err(e) => panic!("network must decode: {e}"),
        };
        assert_eq!(network.id, "204");
        assert_eq!(network.guest_ip_type, Some(GuestIpType::Virtual));
        assert_eq!(network.traffic_type, Some(TrafficType::Guest));
        assert!(network.is_default);
        assert_eq!(network.tags, vec!["web".to_owned(), "db".to_owned()]);
        assert_eq!(network.services.len(), 2);
        assert_eq!(network.services[0].capabilities[0].value.as_deref(), Some("pptp,l2tp,ipsec"));
        assert!(network.services[1].capabilities.is_empty());
    }

    #[test]
    fn public_ip_decodes_upper_case_vlan_keys() {
        let ip: PublicIpAddress = match serde_json::from_str(
            r#"{"id": 30, "ipaddress": "72.52.126.59", "allocated": "2011-02-23T20:15:01-0800",
                "zoneid": 1, "zonename": "San Jose 1", "issourcenat": false, "account": "ops",
                "domainid": 1, "domain": "ROOT", "forvirtualnetwork": true, "isstaticnat": false,
                "associatednetworkid": 204, "networkid": 200, "state": "Allocated",
                "VLANid": 2, "VLANname": "vlan_2", "virtualmachineid": 54}"#,
        ) {
            Ok(ip) => ip,
            Err(e) => panic!("public ip must decode: {e}"),
        };
        assert_eq!(ip.state, Some(PublicIpState::Allocated));
        assert_eq!(ip.vlan_id.as_deref(), Some("2"));
        assert_eq!(ip.vlan_name.as_deref(), Some("vlan_2"));
        assert!(ip.for_virtual_network);
        assert!(ip.allocated.is_some());
        assert_eq!(ip.job_id, None);
    }

    #[test]
    fn security_group_decodes_ingress_rules() {
        let group: SecurityGroup = match serde_json::from_str(
            r#"{"id": 5, "name": "default", "description": "Default Security Group", "account": "ops",
                "domainid": 1, "domain": "ROOT",
                "ingressrule": [{"ruleid": 7, "protocol": "tcp", "startport": 22, "endport": 22, "cidr": "0.0.0.0/0"},
                                {"ruleid": 8, "protocol": "icmp", "icmptype": -1, "icmpcode": -1,
                                 "account": "ops", "securitygroupname": "default"}]}"#,
        ) {
            Ok(g) => g,
            Err(e) => panic!("security group must decode: {e}"),
        };
        assert_eq!(group.ingress_rules.len(), 2);
        assert_eq!(group.ingress_rules[1].icmp_type, Some(-1));
        assert_eq!(group.ingress_rules[1].security_group_name.as_deref(), Some("default"));
    }
}
