use std::fmt::Display;

use cloudstack_core::{JobId, SecurityGroup};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListSecurityGroupsOptions {
        account => "account",
        domain_id => "domainid",
        id => "id",
        keyword => "keyword",
        security_group_name => "securitygroupname",
        virtual_machine_id => "virtualmachineid",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    CreateSecurityGroupOptions {
        account => "account",
        domain_id => "domainid",
        description => "description",
    }
}

options! {
    /// Scopes an operation to an account other than the caller's.
    AccountInDomainOptions {
        account => "account",
        domain_id => "domainid",
    }
}

/// Security groups and their ingress rules, for zones using basic
/// networking.
#[derive(Debug)]
pub struct SecurityGroupApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> SecurityGroupApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_security_groups(
        &self,
        options: ListSecurityGroupsOptions,
    ) -> Result<Vec<SecurityGroup>, ClientError> {
        self.client.fetch_list(&catalog::LIST_SECURITY_GROUPS, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_security_group(&self, id: &str) -> Result<Option<SecurityGroup>, ClientError> {
        self.client.fetch_one(&catalog::GET_SECURITY_GROUP, super::by_id(id)).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_security_group_by_name(&self, name: &str) -> Result<Option<SecurityGroup>, ClientError> {
        let params = QueryParams::new().with("securitygroupname", name);
        self.client.fetch_one(&catalog::GET_SECURITY_GROUP_BY_NAME, params).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the name is taken or invalid.
    pub async fn create_security_group(
        &self,
        name: &str,
        options: CreateSecurityGroupOptions,
    ) -> Result<SecurityGroup, ClientError> {
        let mut params = QueryParams::new().with("name", name);
        params.merge(options.into());
        self.client.fetch(&catalog::CREATE_SECURITY_GROUP, params).await
    }

    /// Allows traffic on `start_port..=end_port` from `cidrs` into the group.
    /// Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the rule.
    pub async fn authorize_ingress_ports_to_cidrs<I>(
        &self,
        security_group_id: &str,
        protocol: &str,
        start_port: u16,
        end_port: u16,
        cidrs: I,
        options: AccountInDomainOptions,
    ) -> Result<JobId, ClientError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut params = ports(security_group_id, protocol, start_port, end_port);
        params.set_list("cidrlist", cidrs);
        self.authorize(params, options).await
    }

    /// Allows traffic on `start_port..=end_port` from members of other
    /// groups, given as `(account, group name)` pairs. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the rule.
    pub async fn authorize_ingress_ports_to_security_groups<I, A, G>(
        &self,
        security_group_id: &str,
        protocol: &str,
        start_port: u16,
        end_port: u16,
        account_groups: I,
        options: AccountInDomainOptions,
    ) -> Result<JobId, ClientError>
    where
        I: IntoIterator<Item = (A, G)>,
        A: Display,
        G: Display,
    {
        let mut params = ports(security_group_id, protocol, start_port, end_port);
        set_user_security_groups(&mut params, account_groups);
        self.authorize(params, options).await
    }

    /// Allows ICMP of one type and code from `cidrs`. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the rule.
    pub async fn authorize_ingress_icmp_to_cidrs<I>(
        &self,
        security_group_id: &str,
        icmp_code: i32,
        icmp_type: i32,
        cidrs: I,
        options: AccountInDomainOptions,
    ) -> Result<JobId, ClientError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut params = icmp(security_group_id, icmp_code, icmp_type);
        params.set_list("cidrlist", cidrs);
        self.authorize(params, options).await
    }

    /// Allows ICMP of one type and code from members of other groups.
    /// Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the rule.
    pub async fn authorize_ingress_icmp_to_security_groups<I, A, G>(
        &self,
        security_group_id: &str,
        icmp_code: i32,
        icmp_type: i32,
        account_groups: I,
        options: AccountInDomainOptions,
    ) -> Result<JobId, ClientError>
    where
        I: IntoIterator<Item = (A, G)>,
        A: Display,
        G: Display,
    {
        let mut params = icmp(security_group_id, icmp_code, icmp_type);
        set_user_security_groups(&mut params, account_groups);
        self.authorize(params, options).await
    }

    async fn authorize(&self, mut params: QueryParams, options: AccountInDomainOptions) -> Result<JobId, ClientError> {
        params.merge(options.into());
        self.client.fetch(&catalog::AUTHORIZE_SECURITY_GROUP_INGRESS, params).await
    }

    /// Removes one ingress rule. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the rule does not exist.
    pub async fn revoke_security_group_ingress(
        &self,
        rule_id: &str,
        options: AccountInDomainOptions,
    ) -> Result<JobId, ClientError> {
        let mut params = super::by_id(rule_id);
        params.merge(options.into());
        self.client.fetch(&catalog::REVOKE_SECURITY_GROUP_INGRESS, params).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn delete_security_group(&self, id: &str) -> Result<(), ClientError> {
        self.client.fetch_void(&catalog::DELETE_SECURITY_GROUP, super::by_id(id)).await
    }
}

fn ports(security_group_id: &str, protocol: &str, start_port: u16, end_port: u16) -> QueryParams {
    QueryParams::new()
        .with("securitygroupid", security_group_id)
        .with("protocol", protocol)
        .with("startport", start_port)
        .with("endport", end_port)
}

fn icmp(security_group_id: &str, icmp_code: i32, icmp_type: i32) -> QueryParams {
    QueryParams::new()
        .with("protocol", "ICMP")
        .with("securitygroupid", security_group_id)
        .with("icmpcode", icmp_code)
        .with("icmptype", icmp_type)
}

/// Encodes `(account, group)` pairs as `usersecuritygrouplist[n].account`
/// and `usersecuritygrouplist[n].group`.
fn set_user_security_groups<I, A, G>(params: &mut QueryParams, account_groups: I)
where
    I: IntoIterator<Item = (A, G)>,
    A: Display,
    G: Display,
{
    for (i, (account, group)) in account_groups.into_iter().enumerate() {
        params.set(format!("usersecuritygrouplist[{i}].account"), account);
        params.set(format!("usersecuritygrouplist[{i}].group"), group);
    }
}
