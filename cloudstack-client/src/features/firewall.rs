use cloudstack_core::{
    AsyncCreateResponse, FirewallProtocol, FirewallRule, PortForwardingProtocol, PortForwardingRule,
};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::transport::Transport;
use crate::ClientError;

options! {
    /// Filters shared by `listFirewallRules` and `listEgressFirewallRules`.
    ListFirewallRulesOptions {
        id => "id",
        ip_address_id => "ipaddressid",
        network_id => "networkid",
        account => "account",
        domain_id => "domainid",
        project_id => "projectid",
        keyword => "keyword",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    /// Optional parameters shared by ingress and egress rule creation.
    CreateFirewallRuleOptions {
        start_port => "startport",
        end_port => "endport",
        icmp_code => "icmpcode",
        icmp_type => "icmptype",
        /// `user` or `system`.
        rule_type => "type",
    }
}

impl CreateFirewallRuleOptions {
    /// CIDRs allowed through the rule, sent comma-separated.
    #[must_use]
    pub fn cidrs<I>(mut self, cidrs: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        self.0.set_list("cidrlist", cidrs);
        self
    }
}

options! {
    ListPortForwardingRulesOptions {
        id => "id",
        ip_address_id => "ipaddressid",
        account => "account",
        domain_id => "domainid",
        project_id => "projectid",
        keyword => "keyword",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    CreatePortForwardingRuleOptions {
        /// Whether to open the public port in the firewall as well.
        open_firewall => "openfirewall",
        private_end_port => "privateendport",
        public_end_port => "publicendport",
        network_id => "networkid",
    }
}

impl CreatePortForwardingRuleOptions {
    /// Source CIDRs allowed to use the forwarding, sent comma-separated.
    #[must_use]
    pub fn cidrs<I>(mut self, cidrs: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        self.0.set_list("cidrlist", cidrs);
        self
    }
}

/// Ingress, egress and port forwarding rules on public IP addresses.
///
/// Creating and deleting rules are async operations on the server; the
/// create calls return the job to poll.
#[derive(Debug)]
pub struct FirewallApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> FirewallApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_firewall_rules(
        &self,
        options: ListFirewallRulesOptions,
    ) -> Result<Vec<FirewallRule>, ClientError> {
        self.client.fetch_list(&catalog::LIST_FIREWALL_RULES, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_firewall_rule(&self, id: &str) -> Result<Option<FirewallRule>, ClientError> {
        self.client.fetch_one(&catalog::GET_FIREWALL_RULE, super::by_id(id)).await
    }

    /// Opens an ingress rule on a public IP address.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the rule.
    pub async fn create_firewall_rule(
        &self,
        ip_address_id: &str,
        protocol: FirewallProtocol,
        options: CreateFirewallRuleOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let params = rule_params(ip_address_id, protocol, options);
        self.client.fetch(&catalog::CREATE_FIREWALL_RULE, params).await
    }

    /// Deletes an ingress rule; deleting an unknown rule succeeds.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn delete_firewall_rule(&self, id: &str) -> Result<(), ClientError> {
        self.client.fetch_void(&catalog::DELETE_FIREWALL_RULE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_egress_firewall_rules(
        &self,
        options: ListFirewallRulesOptions,
    ) -> Result<Vec<FirewallRule>, ClientError> {
        self.client.fetch_list(&catalog::LIST_EGRESS_FIREWALL_RULES, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_egress_firewall_rule(&self, id: &str) -> Result<Option<FirewallRule>, ClientError> {
        self.client.fetch_one(&catalog::GET_EGRESS_FIREWALL_RULE, super::by_id(id)).await
    }

    /// Opens an egress rule on a guest network address.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the rule.
    pub async fn create_egress_firewall_rule(
        &self,
        ip_address_id: &str,
        protocol: FirewallProtocol,
        options: CreateFirewallRuleOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let params = rule_params(ip_address_id, protocol, options);
        self.client.fetch(&catalog::CREATE_EGRESS_FIREWALL_RULE, params).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn delete_egress_firewall_rule(&self, id: &str) -> Result<(), ClientError> {
        self.client.fetch_void(&catalog::DELETE_EGRESS_FIREWALL_RULE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_port_forwarding_rules(
        &self,
        options: ListPortForwardingRulesOptions,
    ) -> Result<Vec<PortForwardingRule>, ClientError> {
        self.client.fetch_list(&catalog::LIST_PORT_FORWARDING_RULES, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_port_forwarding_rule(&self, id: &str) -> Result<Option<PortForwardingRule>, ClientError> {
        self.client.fetch_one(&catalog::GET_PORT_FORWARDING_RULE, super::by_id(id)).await
    }

    /// Forwards `public_port` on a public IP address to `private_port` on a
    /// virtual machine.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the rule.
    pub async fn create_port_forwarding_rule(
        &self,
        ip_address_id: &str,
        protocol: PortForwardingProtocol,
        public_port: u16,
        virtual_machine_id: &str,
        private_port: u16,
        options: CreatePortForwardingRuleOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let mut params = QueryParams::new()
            .with("ipaddressid", ip_address_id)
            .with("protocol", protocol)
            .with("publicport", public_port)
            .with("virtualmachineid", virtual_machine_id)
            .with("privateport", private_port);
        params.merge(options.into());
        self.client.fetch(&catalog::CREATE_PORT_FORWARDING_RULE, params).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn delete_port_forwarding_rule(&self, id: &str) -> Result<(), ClientError> {
        self.client.fetch_void(&catalog::DELETE_PORT_FORWARDING_RULE, super::by_id(id)).await
    }
}

fn rule_params(ip_address_id: &str, protocol: FirewallProtocol, options: CreateFirewallRuleOptions) -> QueryParams {
    let mut params = QueryParams::new().with("ipaddressid", ip_address_id).with("protocol", protocol);
    params.merge(options.into());
    params
}
