use cloudstack_core::Domain;

use crate::catalog;
use crate::client::CloudStackClient;
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListDomainsOptions {
        id => "id",
        keyword => "keyword",
        level => "level",
        name => "name",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    ListDomainChildrenOptions {
        /// Parent domain; defaults to the caller's domain.
        parent_domain_id => "id",
        recursive => "isrecursive",
        keyword => "keyword",
        name => "name",
        page => "page",
        page_size => "pagesize",
    }
}

#[derive(Debug)]
pub struct DomainApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> DomainApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_domains(&self, options: ListDomainsOptions) -> Result<Vec<Domain>, ClientError> {
        self.client.fetch_list(&catalog::LIST_DOMAINS, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_domain(&self, id: &str) -> Result<Option<Domain>, ClientError> {
        self.client.fetch_one(&catalog::GET_DOMAIN, super::by_id(id)).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_domain_children(
        &self,
        options: ListDomainChildrenOptions,
    ) -> Result<Vec<Domain>, ClientError> {
        self.client.fetch_list(&catalog::LIST_DOMAIN_CHILDREN, options.into()).await
    }
}
