use cloudstack_core::{Account, AsyncCreateResponse};

use crate::catalog;
use crate::client::CloudStackClient;
use crate::command::QueryParams;
use crate::transport::Transport;
use crate::ClientError;

options! {
    /// Filters for `listAccounts`.
    ListAccountsOptions {
        /// Numeric [`AccountType`](cloudstack_core::AccountType) code.
        account_type => "accounttype",
        domain_id => "domainid",
        id => "id",
        cleanup_required => "iscleanuprequired",
        keyword => "keyword",
        name => "name",
        state => "state",
        recursive => "isrecursive",
        page => "page",
        page_size => "pagesize",
    }
}

/// Account administration.
#[derive(Debug)]
pub struct AccountApi<'a, T: Transport> {
    client: &'a CloudStackClient<T>,
}

impl<'a, T: Transport> AccountApi<'a, T> {
    pub(crate) fn new(client: &'a CloudStackClient<T>) -> Self {
        Self { client }
    }

    /// Lists accounts; a 404 yields an empty list.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn list_accounts(&self, options: ListAccountsOptions) -> Result<Vec<Account>, ClientError> {
        self.client.fetch_list(&catalog::LIST_ACCOUNTS, options.into()).await
    }

    /// Fetches one account; a 404 yields `None`.
    ///
    /// # Errors
    /// Returns any [`ClientError`] other than a 404.
    pub async fn get_account(&self, id: &str) -> Result<Option<Account>, ClientError> {
        self.client.fetch_one(&catalog::GET_ACCOUNT, super::by_id(id)).await
    }

    /// Re-enables a disabled or locked account.
    ///
    /// # Errors
    /// Returns [`ClientError::NotFound`] if the account does not exist.
    pub async fn enable_account(&self, account: &str, domain_id: &str) -> Result<Account, ClientError> {
        self.client.fetch(&catalog::ENABLE_ACCOUNT, account_in_domain(account, domain_id)).await
    }

    /// Disables an account, stopping its virtual machines.
    ///
    /// With `only_lock` the account is locked instead: its users cannot log
    /// in but its resources keep running. Poll the returned job for the
    /// updated [`Account`].
    ///
    /// # Errors
    /// Returns [`ClientError::NotFound`] if the account does not exist.
    pub async fn disable_account(
        &self,
        account: &str,
        domain_id: &str,
        only_lock: bool,
    ) -> Result<AsyncCreateResponse, ClientError> {
        let params = account_in_domain(account, domain_id).with("lock", only_lock);
        self.client.fetch(&catalog::DISABLE_ACCOUNT, params).await
    }

    /// Locks an account.
    ///
    /// # Errors
    /// Returns [`ClientError::NotFound`] if the account does not exist.
    pub async fn lock_account(&self, account: &str, domain_id: &str) -> Result<Account, ClientError> {
        self.client.fetch(&catalog::LOCK_ACCOUNT, account_in_domain(account, domain_id)).await
    }
}

fn account_in_domain(account: &str, domain_id: &str) -> QueryParams {
    QueryParams::new().with("account", account).with("domainid", domain_id)
}
