use cloudstack_core::{Pod, Zone};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListZonesOptions {
        /// Only zones the caller may deploy into.
        available => "available",
        domain_id => "domainid",
        id => "id",
        keyword => "keyword",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    ListPodsOptions {
        allocation_state => "allocationstate",
        id => "id",
        keyword => "keyword",
        name => "name",
        zone_id => "zoneid",
        page => "page",
        page_size => "pagesize",
    }
}

/// Zones and the pods inside them.
#[derive(Debug)]
pub struct ZoneApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> ZoneApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_zones(&self, options: ListZonesOptions) -> Result<Vec<Zone>, ClientError> {
        self.client.fetch_list(&catalog::LIST_ZONES, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_zone(&self, id: &str) -> Result<Option<Zone>, ClientError> {
        self.client.fetch_one(&catalog::GET_ZONE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_pods(&self, options: ListPodsOptions) -> Result<Vec<Pod>, ClientError> {
        self.client.fetch_list(&catalog::LIST_PODS, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_pod(&self, id: &str) -> Result<Option<Pod>, ClientError> {
        self.client.fetch_one(&catalog::GET_POD, super::by_id(id)).await
    }
}
