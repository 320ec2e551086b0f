use cloudstack_core::{Cluster, ClusterType, Host, JobId, StoragePool};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListHostsOptions {
        allocation_state => "allocationstate",
        cluster_id => "clusterid",
        id => "id",
        keyword => "keyword",
        name => "name",
        pod_id => "podid",
        state => "state",
        host_type => "type",
        virtual_machine_id => "virtualmachineid",
        zone_id => "zoneid",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    AddHostOptions {
        allocation_state => "allocationstate",
        cluster_id => "clusterid",
        /// Creates the cluster if it does not exist yet.
        cluster_name => "clustername",
        pod_id => "podid",
    }
}

options! {
    UpdateHostOptions {
        allocation_state => "allocationstate",
        os_category_id => "oscategoryid",
    }
}

options! {
    DeleteHostOptions {
        /// Destroys every virtual machine still on the host.
        forced => "forced",
        forced_destroy_local_storage => "forcedestroylocalstorage",
    }
}

options! {
    AddSecondaryStorageOptions {
        zone_id => "zoneid",
    }
}

options! {
    ListClustersOptions {
        allocation_state => "allocationstate",
        cluster_type => "clustertype",
        hypervisor => "hypervisor",
        id => "id",
        keyword => "keyword",
        managed_state => "managedstate",
        name => "name",
        pod_id => "podid",
        zone_id => "zoneid",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    AddClusterOptions {
        allocation_state => "allocationstate",
        pod_id => "podid",
        /// vCenter or cluster manager URL, for externally managed clusters.
        url => "url",
        username => "username",
        password => "password",
    }
}

options! {
    UpdateClusterOptions {
        allocation_state => "allocationstate",
        cluster_name => "clustername",
        cluster_type => "clustertype",
        hypervisor => "hypervisor",
        managed_state => "managedstate",
    }
}

options! {
    ListStoragePoolsOptions {
        cluster_id => "clusterid",
        id => "id",
        ip_address => "ipaddress",
        keyword => "keyword",
        name => "name",
        path => "path",
        pod_id => "podid",
        zone_id => "zoneid",
        page => "page",
        page_size => "pagesize",
    }
}

macro_rules! host_tags {
    ($($name:ident),*) => {$(
        impl $name {
            /// Host tags, sent comma-separated. An empty set clears the tags.
            #[must_use]
            pub fn host_tags<I>(mut self, tags: I) -> Self
            where
                I: IntoIterator,
                I::Item: std::fmt::Display,
            {
                self.0.set_list("hosttags", tags);
                self
            }
        }
    )*};
}

host_tags!(AddHostOptions, UpdateHostOptions);

/// Hypervisor hosts and the storage attached to them. Root admin only.
#[derive(Debug)]
pub struct HostApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> HostApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_hosts(&self, options: ListHostsOptions) -> Result<Vec<Host>, ClientError> {
        self.client.fetch_list(&catalog::LIST_HOSTS, options.into()).await
    }

    /// Registers a hypervisor host reachable at `url`.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the host.
    pub async fn add_host(
        &self,
        zone_id: &str,
        url: &str,
        hypervisor: &str,
        username: &str,
        password: &str,
        options: AddHostOptions,
    ) -> Result<Host, ClientError> {
        let mut params = QueryParams::new()
            .with("zoneid", zone_id)
            .with("url", url)
            .with("hypervisor", hypervisor)
            .with("username", username)
            .with("password", password);
        params.merge(options.into());
        self.client.fetch(&catalog::ADD_HOST, params).await
    }

    /// # Errors
    /// Returns [`ClientError::NotFound`] if the host does not exist.
    pub async fn update_host(&self, id: &str, options: UpdateHostOptions) -> Result<Host, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch(&catalog::UPDATE_HOST, params).await
    }

    /// Changes the credentials the management server uses for a host.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the update.
    pub async fn update_host_password(&self, host_id: &str, username: &str, password: &str) -> Result<(), ClientError> {
        let params = QueryParams::new()
            .with("hostid", host_id)
            .with("username", username)
            .with("password", password);
        self.client.fetch_void(&catalog::UPDATE_HOST_PASSWORD, params).await
    }

    /// Removes a host; removing an unknown host succeeds.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn delete_host(&self, id: &str, options: DeleteHostOptions) -> Result<(), ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch_void(&catalog::DELETE_HOST, params).await
    }

    /// Starts migrating guests off a host. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn prepare_host_for_maintenance(&self, id: &str) -> Result<JobId, ClientError> {
        self.client.fetch(&catalog::PREPARE_HOST_FOR_MAINTENANCE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn cancel_host_maintenance(&self, id: &str) -> Result<JobId, ClientError> {
        self.client.fetch(&catalog::CANCEL_HOST_MAINTENANCE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn reconnect_host(&self, id: &str) -> Result<JobId, ClientError> {
        self.client.fetch(&catalog::RECONNECT_HOST, super::by_id(id)).await
    }

    /// Adds secondary storage at `url`, e.g. `nfs://server/export`.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the storage.
    pub async fn add_secondary_storage(
        &self,
        url: &str,
        options: AddSecondaryStorageOptions,
    ) -> Result<Host, ClientError> {
        let mut params = QueryParams::new().with("url", url);
        params.merge(options.into());
        self.client.fetch(&catalog::ADD_SECONDARY_STORAGE, params).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_clusters(&self, options: ListClustersOptions) -> Result<Vec<Cluster>, ClientError> {
        self.client.fetch_list(&catalog::LIST_CLUSTERS, options.into()).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the cluster.
    pub async fn add_cluster(
        &self,
        zone_id: &str,
        cluster_name: &str,
        cluster_type: ClusterType,
        hypervisor: &str,
        options: AddClusterOptions,
    ) -> Result<Cluster, ClientError> {
        let mut params = QueryParams::new()
            .with("zoneid", zone_id)
            .with("clustername", cluster_name)
            .with("clustertype", cluster_type)
            .with("hypervisor", hypervisor);
        params.merge(options.into());
        self.client.fetch(&catalog::ADD_CLUSTER, params).await
    }

    /// # Errors
    /// Returns [`ClientError::NotFound`] if the cluster does not exist.
    pub async fn update_cluster(&self, id: &str, options: UpdateClusterOptions) -> Result<Cluster, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch(&catalog::UPDATE_CLUSTER, params).await
    }

    /// Changes the credentials of every host in a cluster.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the update.
    pub async fn update_cluster_password(
        &self,
        cluster_id: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let params = QueryParams::new()
            .with("clusterid", cluster_id)
            .with("username", username)
            .with("password", password);
        self.client.fetch_void(&catalog::UPDATE_CLUSTER_PASSWORD, params).await
    }

    /// Removes a cluster; removing an unknown cluster succeeds.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn delete_cluster(&self, id: &str) -> Result<(), ClientError> {
        self.client.fetch_void(&catalog::DELETE_CLUSTER, super::by_id(id)).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_storage_pools(
        &self,
        options: ListStoragePoolsOptions,
    ) -> Result<Vec<StoragePool>, ClientError> {
        self.client.fetch_list(&catalog::LIST_STORAGE_POOLS, options.into()).await
    }
}
