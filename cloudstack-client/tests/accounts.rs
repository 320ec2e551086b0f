//! Expectation tests for the account commands.

mod common;

use cloudstack_client::{ClientError, ListAccountsOptions};
use cloudstack_core::{Account, AccountState, AccountType, JobStatus};

use common::{client, not_found, ok, ExpectTransport};

const LIST_ACCOUNTS: &str = "http://localhost:8080/client/api?response=json&command=listAccounts&listAll=true&apiKey=identity&signature=yMZYMZxzFlaUsbfxtuppMwNhpXI%3D";
const GET_ACCOUNT: &str = "http://localhost:8080/client/api?response=json&command=listAccounts&listAll=true&id=505&apiKey=identity&signature=MjkEl2xQbz5AemYhWPIm5ePLFyQ%3D";
const ENABLE_ACCOUNT: &str = "http://localhost:8080/client/api?response=json&command=enableAccount&account=1&domainid=2&apiKey=identity&signature=a2QSwibdhEfgmfLNEPtDQZnS2nU%3D";
const DISABLE_ACCOUNT: &str = "http://localhost:8080/client/api?response=json&command=disableAccount&account=1&domainid=2&lock=false&apiKey=identity&signature=OeeW9vuk0LFO3AY32FA5f4dBOHc%3D";
const LOCK_ACCOUNT: &str = "http://localhost:8080/client/api?response=json&command=lockAccount&account=1&domainid=2&apiKey=identity&signature=XyIn9ths5wWe/%2BEuihwe8SoPYIQ%3D";
const QUERY_JOB: &str = "http://localhost:8080/client/api?response=json&command=queryAsyncJobResult&jobid=50006&apiKey=identity&signature=rkKuaC4wukB2QOK5%2BDOWPaXNnm8%3D";

#[tokio::test]
async fn list_accounts_decodes_limits_and_users() {
    let transport = ExpectTransport::new().expect(LIST_ACCOUNTS, ok(include_str!("fixtures/listaccountsresponse.json")));
    let (client, _) = client(transport);

    let accounts = match client.accounts().list_accounts(ListAccountsOptions::new()).await {
        Ok(a) => a,
        Err(e) => panic!("listAccounts failed: {e}"),
    };

    assert_eq!(accounts.len(), 1);
    let account = &accounts[0];
    assert_eq!(account.id, "505");
    assert_eq!(account.account_type, Some(AccountType::User));
    assert_eq!(account.state, Some(AccountState::Enabled));
    assert_eq!(account.vm_limit, None, "Unlimited decodes to no limit");
    assert_eq!(account.vms, 2);
    assert_eq!(account.received_bytes, 318_483);
    assert_eq!(account.users.len(), 1);
    assert_eq!(account.users[0].username.as_deref(), Some("acme"));
}

#[tokio::test]
async fn list_accounts_absorbs_not_found() {
    let (client, _) = client(ExpectTransport::new().expect(LIST_ACCOUNTS, not_found()));

    match client.accounts().list_accounts(ListAccountsOptions::new()).await {
        Ok(accounts) => assert!(accounts.is_empty()),
        Err(e) => panic!("404 must become an empty list: {e}"),
    }
}

#[tokio::test]
async fn get_account_takes_first_match() {
    let transport = ExpectTransport::new().expect(GET_ACCOUNT, ok(include_str!("fixtures/listaccountsresponse.json")));
    let (client, _) = client(transport);

    match client.accounts().get_account("505").await {
        Ok(Some(account)) => assert_eq!(account.name.as_deref(), Some("acme")),
        other => panic!("expected the account, got {other:?}"),
    }
}

#[tokio::test]
async fn get_account_absorbs_not_found() {
    let (client, _) = client(ExpectTransport::new().expect(GET_ACCOUNT, not_found()));

    match client.accounts().get_account("505").await {
        Ok(None) => {}
        other => panic!("404 must become None, got {other:?}"),
    }
}

#[tokio::test]
async fn enable_account_propagates_not_found() {
    let (client, _) = client(ExpectTransport::new().expect(ENABLE_ACCOUNT, not_found()));

    match client.accounts().enable_account("1", "2").await {
        Err(ClientError::NotFound { command, .. }) => assert_eq!(command, "enableAccount"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn enable_account_returns_the_account() {
    let body = r#"{"enableaccountresponse":{"account":{"id":1,"name":"admin","accounttype":1,"state":"enabled"}}}"#;
    let (client, _) = client(ExpectTransport::new().expect(ENABLE_ACCOUNT, ok(body)));

    match client.accounts().enable_account("1", "2").await {
        Ok(account) => {
            assert_eq!(account.account_type, Some(AccountType::Admin));
            assert_eq!(account.state, Some(AccountState::Enabled));
        }
        Err(e) => panic!("enableAccount failed: {e}"),
    }
}

#[tokio::test]
async fn lock_account_returns_locked_state() {
    let body = r#"{"lockaccountresponse":{"account":{"id":1,"name":"admin","state":"locked"}}}"#;
    let (client, _) = client(ExpectTransport::new().expect(LOCK_ACCOUNT, ok(body)));

    match client.accounts().lock_account("1", "2").await {
        Ok(account) => assert_eq!(account.state, Some(AccountState::Locked)),
        Err(e) => panic!("lockAccount failed: {e}"),
    }
}

#[tokio::test]
async fn disabled_account_is_reported_by_its_job() {
    let transport = ExpectTransport::new()
        .expect(DISABLE_ACCOUNT, ok(include_str!("fixtures/disableaccountresponse.json")))
        .expect(QUERY_JOB, ok(include_str!("fixtures/queryasyncjobresultresponse-disableaccount.json")));
    let (client, transport) = client(transport);

    let created = match client.accounts().disable_account("1", "2", false).await {
        Ok(c) => c,
        Err(e) => panic!("disableAccount failed: {e}"),
    };
    assert_eq!(created.job_id.as_str(), "50006");

    let job = match client.jobs().wait::<Account>(&created.job_id).await {
        Ok(j) => j,
        Err(e) => panic!("job must succeed: {e}"),
    };
    assert_eq!(job.status, JobStatus::Succeeded);
    let account = match job.result {
        Some(a) => a,
        None => panic!("a succeeded job carries its account"),
    };
    assert_eq!(account.state, Some(AccountState::Disabled));
    assert_eq!(transport.calls().len(), 2);
}
