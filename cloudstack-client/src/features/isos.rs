use cloudstack_core::{AsyncCreateResponse, ExtractMode, Iso, TemplatePermission};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::features::{AccountInDomainOptions, UpdatePermissionsOptions};
use crate::transport::Transport;
use crate::ClientError;

options! {
    ListIsosOptions {
        account => "account",
        bootable => "bootable",
        domain_id => "domainid",
        hypervisor => "hypervisor",
        id => "id",
        /// `featured`, `self`, `selfexecutable`, `executable` or `community`.
        iso_filter => "isofilter",
        public => "ispublic",
        ready => "isready",
        keyword => "keyword",
        name => "name",
        zone_id => "zoneid",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    RegisterIsoOptions {
        account => "account",
        domain_id => "domainid",
        bootable => "bootable",
        extractable => "isextractable",
        featured => "isfeatured",
        public => "ispublic",
        os_type_id => "ostypeid",
    }
}

options! {
    UpdateIsoOptions {
        bootable => "bootable",
        display_text => "displaytext",
        format => "format",
        name => "name",
        os_type_id => "ostypeid",
        password_enabled => "passwordenabled",
    }
}

options! {
    DeleteIsoOptions {
        zone_id => "zoneid",
    }
}

options! {
    ExtractIsoOptions {
        url => "url",
    }
}

/// ISO images and their attachment to virtual machines.
#[derive(Debug)]
pub struct IsoApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> IsoApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// Registers an ISO downloadable from `url` in a zone.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the request.
    pub async fn register_iso(
        &self,
        name: &str,
        url: &str,
        display_text: &str,
        zone_id: &str,
        options: RegisterIsoOptions,
    ) -> Result<Iso, ClientError> {
        let mut params = QueryParams::new()
            .with("name", name)
            .with("url", url)
            .with("displaytext", display_text)
            .with("zoneid", zone_id);
        params.merge(options.into());
        self.client.fetch(&catalog::REGISTER_ISO, params).await
    }

    /// Attaches an ISO to a virtual machine. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn attach_iso(&self, id: &str, virtual_machine_id: &str) -> Result<AsyncCreateResponse, ClientError> {
        let params = super::by_id(id).with("virtualmachineid", virtual_machine_id);
        self.client.fetch(&catalog::ATTACH_ISO, params).await
    }

    /// Detaches whatever ISO the virtual machine has mounted.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server refuses.
    pub async fn detach_iso(&self, virtual_machine_id: &str) -> Result<AsyncCreateResponse, ClientError> {
        let params = QueryParams::new().with("virtualmachineid", virtual_machine_id);
        self.client.fetch(&catalog::DETACH_ISO, params).await
    }

    /// # Errors
    /// Returns [`ClientError::NotFound`] if the ISO does not exist.
    pub async fn update_iso(&self, id: &str, options: UpdateIsoOptions) -> Result<Iso, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch(&catalog::UPDATE_ISO, params).await
    }

    /// # Errors
    /// Returns [`ClientError::NotFound`] if the ISO does not exist.
    pub async fn delete_iso(&self, id: &str, options: DeleteIsoOptions) -> Result<AsyncCreateResponse, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch(&catalog::DELETE_ISO, params).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the copy.
    pub async fn copy_iso(
        &self,
        id: &str,
        source_zone_id: &str,
        dest_zone_id: &str,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let params = super::by_id(id).with("sourcezoneid", source_zone_id).with("destzoneid", dest_zone_id);
        self.client.fetch(&catalog::COPY_ISO, params).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the ISO cannot be extracted.
    pub async fn extract_iso(
        &self,
        id: &str,
        mode: ExtractMode,
        zone_id: &str,
        options: ExtractIsoOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let mut params = super::by_id(id).with("mode", mode).with("zoneid", zone_id);
        params.merge(options.into());
        self.client.fetch(&catalog::EXTRACT_ISO, params).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the change.
    pub async fn update_iso_permissions(&self, id: &str, options: UpdatePermissionsOptions) -> Result<(), ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch_void(&catalog::UPDATE_ISO_PERMISSIONS, params).await
    }

    /// # Errors
    /// Returns [`ClientError::NotFound`] if the ISO does not exist.
    pub async fn list_iso_permissions(
        &self,
        id: &str,
        options: AccountInDomainOptions,
    ) -> Result<Vec<TemplatePermission>, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch_list(&catalog::LIST_ISO_PERMISSIONS, params).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_isos(&self, options: ListIsosOptions) -> Result<Vec<Iso>, ClientError> {
        self.client.fetch_list(&catalog::LIST_ISOS, options.into()).await
    }

    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_iso(&self, id: &str) -> Result<Option<Iso>, ClientError> {
        self.client.fetch_one(&catalog::GET_ISO, super::by_id(id)).await
    }
}
