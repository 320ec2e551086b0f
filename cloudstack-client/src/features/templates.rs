use cloudstack_core::{
    AsyncCreateResponse, ExtractMode, Template, TemplateFilter, TemplateFormat, TemplatePermission,
};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::features::AccountInDomainOptions;
use crate::transport::Transport;
use crate::ClientError;

/// The three values every new template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMetadata {
    pub name: String,
    pub os_type_id: String,
    pub display_text: String,
}

impl TemplateMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>, os_type_id: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self { name: name.into(), os_type_id: os_type_id.into(), display_text: display_text.into() }
    }

    fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("name", &self.name)
            .with("ostypeid", &self.os_type_id)
            .with("displaytext", &self.display_text)
    }
}

options! {
    /// Source and flags for `createTemplate`. Set either a volume or a
    /// snapshot as the source.
    CreateTemplateOptions {
        bits => "bits",
        featured => "isfeatured",
        public => "ispublic",
        password_enabled => "passwordenabled",
        requires_hvm => "requireshvm",
        snapshot_id => "snapshotid",
        volume_id => "volumeid",
        virtual_machine_id => "virtualmachineid",
    }
}

options! {
    RegisterTemplateOptions {
        account => "account",
        bits => "bits",
        checksum => "checksum",
        domain_id => "domainid",
        extractable => "isextractable",
        featured => "isfeatured",
        public => "ispublic",
        password_enabled => "passwordenabled",
        requires_hvm => "requireshvm",
    }
}

options! {
    UpdateTemplateOptions {
        bootable => "bootable",
        display_text => "displaytext",
        format => "format",
        name => "name",
        os_type_id => "ostypeid",
        password_enabled => "passwordenabled",
    }
}

options! {
    DeleteTemplateOptions {
        /// Deletes only the copy in this zone.
        zone_id => "zoneid",
    }
}

options! {
    /// Filters for `listTemplates`. The filter defaults to
    /// [`TemplateFilter::Executable`].
    ListTemplatesOptions {
        template_filter => "templatefilter",
        account => "account",
        domain_id => "domainid",
        hypervisor => "hypervisor",
        id => "id",
        keyword => "keyword",
        name => "name",
        zone_id => "zoneid",
        page => "page",
        page_size => "pagesize",
    }
}

options! {
    ExtractTemplateOptions {
        /// Upload target for [`ExtractMode::FtpUpload`].
        url => "url",
    }
}

options! {
    /// Changes to apply with `updateTemplatePermissions` or
    /// `updateIsoPermissions`.
    UpdatePermissionsOptions {
        extractable => "isextractable",
        featured => "isfeatured",
        public => "ispublic",
        /// A [`PermissionOperation`](cloudstack_core::PermissionOperation).
        op => "op",
    }
}

impl UpdatePermissionsOptions {
    /// Accounts the operation applies to, sent comma-separated.
    #[must_use]
    pub fn accounts<I>(mut self, accounts: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        self.0.set_list("accounts", accounts);
        self
    }
}

/// Template registration, copying and sharing.
#[derive(Debug)]
pub struct TemplateApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> TemplateApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// Creates a template from a volume or snapshot. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the request.
    pub async fn create_template(
        &self,
        metadata: &TemplateMetadata,
        options: CreateTemplateOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let mut params = metadata.params();
        params.merge(options.into());
        self.client.fetch(&catalog::CREATE_TEMPLATE, params).await
    }

    /// Registers a template the server downloads from `url`.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the request.
    pub async fn register_template(
        &self,
        metadata: &TemplateMetadata,
        format: TemplateFormat,
        hypervisor: &str,
        url: &str,
        zone_id: &str,
        options: RegisterTemplateOptions,
    ) -> Result<Template, ClientError> {
        let mut params = QueryParams::new()
            .with("format", format)
            .with("hypervisor", hypervisor)
            .with("url", url)
            .with("zoneid", zone_id);
        params.merge(metadata.params());
        params.merge(options.into());
        self.client.fetch(&catalog::REGISTER_TEMPLATE, params).await
    }

    /// # Errors
    /// Returns [`ClientError::NotFound`] if the template does not exist.
    pub async fn update_template(&self, id: &str, options: UpdateTemplateOptions) -> Result<Template, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch(&catalog::UPDATE_TEMPLATE, params).await
    }

    /// Copies a template between zones. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the copy.
    pub async fn copy_template(
        &self,
        id: &str,
        source_zone_id: &str,
        dest_zone_id: &str,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let params = super::by_id(id).with("sourcezoneid", source_zone_id).with("destzoneid", dest_zone_id);
        self.client.fetch(&catalog::COPY_TEMPLATE, params).await
    }

    /// Deletes a template from every zone, or from one with
    /// [`DeleteTemplateOptions::zone_id`]. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the template does not exist.
    pub async fn delete_template(
        &self,
        id: &str,
        options: DeleteTemplateOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch(&catalog::DELETE_TEMPLATE, params).await
    }

    /// Lists templates; without a filter only executable templates are
    /// returned.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields an empty list.
    pub async fn list_templates(&self, options: ListTemplatesOptions) -> Result<Vec<Template>, ClientError> {
        let mut params = QueryParams::new().with("templatefilter", TemplateFilter::Executable);
        params.merge(options.into());
        self.client.fetch_list(&catalog::LIST_TEMPLATES, params).await
    }

    /// Finds an executable template in one zone.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404, which yields `None`.
    pub async fn get_template_in_zone(&self, id: &str, zone_id: &str) -> Result<Option<Template>, ClientError> {
        let params = QueryParams::new()
            .with("templatefilter", TemplateFilter::Executable)
            .with("id", id)
            .with("zoneid", zone_id);
        self.client.fetch_one(&catalog::GET_TEMPLATE_IN_ZONE, params).await
    }

    /// # Errors
    /// Returns the mapped [`ClientError`] if the server rejects the change.
    pub async fn update_template_permissions(
        &self,
        id: &str,
        options: UpdatePermissionsOptions,
    ) -> Result<(), ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch_void(&catalog::UPDATE_TEMPLATE_PERMISSIONS, params).await
    }

    /// # Errors
    /// Returns [`ClientError::NotFound`] if the template does not exist.
    pub async fn list_template_permissions(
        &self,
        id: &str,
        options: AccountInDomainOptions,
    ) -> Result<Vec<TemplatePermission>, ClientError> {
        let mut params = super::by_id(id);
        params.merge(options.into());
        self.client.fetch_list(&catalog::LIST_TEMPLATE_PERMISSIONS, params).await
    }

    /// Starts an extraction of a template. Returns the job to poll.
    ///
    /// # Errors
    /// Returns the mapped [`ClientError`] if the template cannot be extracted.
    pub async fn extract_template(
        &self,
        id: &str,
        mode: ExtractMode,
        zone_id: &str,
        options: ExtractTemplateOptions,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let mut params = super::by_id(id).with("mode", mode).with("zoneid", zone_id);
        params.merge(options.into());
        self.client.fetch(&catalog::EXTRACT_TEMPLATE, params).await
    }
}
