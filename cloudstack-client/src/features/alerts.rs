use cloudstack_core::Alert;

use crate::catalog;
use crate::client::CloudStackClient;
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListAlertsOptions {
        id => "id",
        keyword => "keyword",
        /// Numeric alert type.
        alert_type => "type",
        page => "page",
        page_size => "pagesize",
    }
}

/// System alerts raised by the management server.
#[derive(Debug)]
pub struct AlertApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> AlertApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_alerts(&self, options: ListAlertsOptions) -> Result<Vec<Alert>, ClientError> {
        self.client.fetch_list(&catalog::LIST_ALERTS, options.into()).await
    }
}
