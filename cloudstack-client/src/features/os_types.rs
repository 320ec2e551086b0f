use cloudstack_core::{OsCategory, OsType};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListOsTypesOptions {
        id => "id",
        os_category_id => "oscategoryid",
        keyword => "keyword",
        page => "page",
        page_size => "pagesize",
    }
}

#[derive(Debug)]
pub struct OsTypeApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> OsTypeApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_os_types(&self, options: ListOsTypesOptions) -> Result<Vec<OsType>, ClientError> {
        self.client.fetch_list(&catalog::LIST_OS_TYPES, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_os_type(&self, id: &str) -> Result<Option<OsType>, ClientError> {
        self.client.fetch_one(&catalog::GET_OS_TYPE, super::by_id(id)).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_os_categories(&self) -> Result<Vec<OsCategory>, ClientError> {
        self.client.fetch_list(&catalog::LIST_OS_CATEGORIES, QueryParams::new()).await
    }
}
