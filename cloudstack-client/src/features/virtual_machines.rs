use cloudstack_core::{AsyncCreateResponse, JobId, VirtualMachine};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::transport::Transport;
use crate::ClientError;

options! {
    DeployVirtualMachineOptions {
        account => "account",
        disk_offering_id => "diskofferingid",
        display_name => "displayname",
        domain_id => "domainid",
        group => "group",
        host_id => "hostid",
        hypervisor => "hypervisor",
        ip_address => "ipaddress",
        keypair => "keypair",
        name => "name",
        /// Disk size in GB, for custom disk offerings.
        size => "size",
        /// Base64-encoded user data.
        user_data => "userdata",
    }
}

impl DeployVirtualMachineOptions {
    /// Networks to attach, sent comma-separated.
    #[must_use]
    pub fn network_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        self.0.set_list("networkids", ids);
        self
    }

    /// Security groups to join, sent comma-separated.
    #[must_use]
    pub fn security_group_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        self.0.set_list("securitygroupids", ids);
        self
    }

    #[must_use]
    pub fn security_group_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        self.0.set_list("securitygroupnames", names);
        self
    }
}

options! {
    ListVirtualMachinesOptions {
        account => "account",
        domain_id => "domainid",
        group_id => "groupid",
        host_id => "hostid",
        hypervisor => "hypervisor",
        id => "id",
        keyword => "keyword",
        name => "name",
        network_id => "networkid",
        pod_id => "podid",
        state => "state",
        storage_id => "storageid",
        zone_id => "zoneid",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    StopVirtualMachineOptions {
        /// Stops the machine even if the hypervisor does not respond.
        forced => "forced",
    }
}

/// Virtual machine lifecycle. Every state change runs as an async job.
#[derive(Debug)]
pub struct VirtualMachineApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> VirtualMachineApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// Creates and starts a virtual machine. Returns the job to poll and
    /// the new machine's id.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the request.
    pub async fn deploy_virtual_machine(
        &self,
        zone_id: &str,
        service_offering_id: &str,
        template_id: &str,
        options: DeployVirtualMachineOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let mut params = QueryParams::new()
            .with("zoneid", zone_id)
            .with("serviceofferingid", service_offering_id)
            .with("templateid", template_id);
        params.merge(options.into());
        self.client.fetch(&catalog::DEPLOY_VIRTUAL_MACHINE, params).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_virtual_machines(
        &self,
        options: ListVirtualMachinesOptions,
    ) -> Result<Vec<VirtualMachine>, ClientError> {
        self.client.fetch_list(&catalog::LIST_VIRTUAL_MACHINES, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_virtual_machine(&self, id: &str) -> Result<Option<VirtualMachine>, ClientError> {
        self.client.fetch_one(&catalog::GET_VIRTUAL_MACHINE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn start_virtual_machine(&self, id: &str) -> Result<JobId, ClientError> {
        self.client.fetch(&catalog::START_VIRTUAL_MACHINE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn stop_virtual_machine(&self, id: &str, options: StopVirtualMachineOptions) -> Result<JobId, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch(&catalog::STOP_VIRTUAL_MACHINE, params).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn reboot_virtual_machine(&self, id: &str) -> Result<JobId, ClientError> {
        self.client.fetch(&catalog::REBOOT_VIRTUAL_MACHINE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn destroy_virtual_machine(&self, id: &str) -> Result<JobId, ClientError> {
        self.client.fetch(&catalog::DESTROY_VIRTUAL_MACHINE, super::by_id(id)).await
    }

    /// Generates a new password for a stopped, password-enabled machine.
    /// The job result carries the machine with its new password.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn reset_password_for_virtual_machine(&self, id: &str) -> Result<JobId, ClientError> {
        self.client.fetch(&catalog::RESET_PASSWORD_FOR_VIRTUAL_MACHINE, super::by_id(id)).await
    }
}
