//! Expectation tests for templates and ISOs.

mod common;

use cloudstack_client::{
    AccountInDomainOptions, ClientError, CreateTemplateOptions, DeleteIsoOptions, DeleteTemplateOptions,
    ExtractIsoOptions, ExtractTemplateOptions, ListTemplatesOptions, RegisterIsoOptions, RegisterTemplateOptions,
    TemplateMetadata, UpdateIsoOptions, UpdatePermissionsOptions, UpdateTemplateOptions,
};
use cloudstack_core::{ExtractMode, PermissionOperation, TemplateFilter, TemplateFormat, TemplateType};

use common::{client, not_found, ok, ExpectTransport};

const LIST_TEMPLATES: &str = "http://localhost:8080/client/api?response=json&command=listTemplates&listAll=true&templatefilter=executable&apiKey=identity&signature=eGd/yCmUVjnvPFMiZifgmPUzG80%3D";
const LIST_FEATURED_TEMPLATES: &str = "http://localhost:8080/client/api?response=json&command=listTemplates&listAll=true&templatefilter=featured&zoneid=1&apiKey=identity&signature=Wuyuy9F5xxSeAhiPRsz0/fIkU2o%3D";
const GET_TEMPLATE_IN_ZONE: &str = "http://localhost:8080/client/api?response=json&command=listTemplates&listAll=true&templatefilter=executable&id=5&zoneid=1&apiKey=identity&signature=v9SUIJY61FazYG3NceI1nodGdOA%3D";
const LIST_TEMPLATE_PERMISSIONS: &str = "http://localhost:8080/client/api?response=json&command=listTemplatePermissions&listAll=true&id=17&apiKey=identity&signature=teEkUb8iME0ptzdbbhdXjdmQ62g%3D";
const UPDATE_TEMPLATE_PERMISSIONS: &str = "http://localhost:8080/client/api?response=json&command=updateTemplatePermissions&id=17&accounts=5,6&isextractable=true&isfeatured=true&ispublic=true&op=add&apiKey=identity&signature=kmCxo3Qa2PVQlnWbzPrrTsp%2BzJA%3D";
const EXTRACT_TEMPLATE: &str = "http://localhost:8080/client/api?response=json&command=extractTemplate&id=3&mode=HTTP_DOWNLOAD&zoneid=5&url=http%3A//example.com/&apiKey=identity&signature=YwghBYq1yNxk3FitWw%2BBJmkIG6U%3D";
const CREATE_TEMPLATE: &str = "http://localhost:8080/client/api?response=json&command=createTemplate&name=thename&ostypeid=10&displaytext=description&volumeid=7&apiKey=identity&signature=u2Q3w14T/Q9x0MJQ2XaZZShE0Bo%3D";
const REGISTER_TEMPLATE: &str = "http://localhost:8080/client/api?response=json&command=registerTemplate&format=QCOW2&hypervisor=xen&url=http%3A//example.com/&zoneid=20&name=thename&ostypeid=10&displaytext=description&apiKey=identity&signature=qTXdtWs89AftMqgHy8pFBsUV0JM%3D";
const UPDATE_TEMPLATE: &str = "http://localhost:8080/client/api?response=json&command=updateTemplate&id=17&name=renamed&apiKey=identity&signature=2gQi0kkNoQACZr9RZVWxiVGlzmI%3D";
const DELETE_TEMPLATE: &str = "http://localhost:8080/client/api?response=json&command=deleteTemplate&id=17&zoneid=8&apiKey=identity&signature=wuY9oy8iEEKEJSAtP9QW9fuTvl0%3D";
const COPY_TEMPLATE: &str = "http://localhost:8080/client/api?response=json&command=copyTemplate&id=17&sourcezoneid=18&destzoneid=19&apiKey=identity&signature=acpX/dmeUpPTeRUHc96MssiYnQs%3D";
const REGISTER_ISO: &str = "http://localhost:8080/client/api?response=json&command=registerIso&name=bob%27s%20iso&url=http%3A//example.com/&displaytext=bob%27s%20copy%20of%20linux&zoneid=9&account=fred&domainid=5&bootable=true&isextractable=true&isfeatured=true&ispublic=true&ostypeid=7&apiKey=identity&signature=fVXAgmWir3BMZ4LGan6Kb6dk3xw%3D";
const DETACH_ISO: &str = "http://localhost:8080/client/api?response=json&command=detachIso&virtualmachineid=3&apiKey=identity&signature=wx74KL4twCmwP4nJJfgGoVy2p%2Bk%3D";
const DELETE_ISO: &str = "http://localhost:8080/client/api?response=json&command=deleteIso&id=3&zoneid=5&apiKey=identity&signature=f4wt9N/eTvKvbkvE1LyWq0pUjX8%3D";
const COPY_ISO: &str = "http://localhost:8080/client/api?response=json&command=copyIso&id=3&sourcezoneid=5&destzoneid=7&apiKey=identity&signature=T12ZAe0LvEfhCvntkBuRHplxwKk%3D";
const EXTRACT_ISO: &str = "http://localhost:8080/client/api?response=json&command=extractIso&id=3&mode=HTTP_DOWNLOAD&zoneid=5&url=http%3A//example.com/&apiKey=identity&signature=FWCFh1b4mwdUz1eZ/P9J0Jm7gaI%3D";
const UPDATE_ISO_PERMISSIONS: &str = "http://localhost:8080/client/api?response=json&command=updateIsoPermissions&id=3&accounts=fred,bob&isextractable=true&isfeatured=true&ispublic=true&op=add&apiKey=identity&signature=plI/k6c%2BHBcPWEATKVsNuisWAYI%3D";
const ATTACH_ISO: &str = "http://localhost:8080/client/api?response=json&command=attachIso&id=3&virtualmachineid=5&apiKey=identity&signature=6sKlbIrLMBvBeUD9M0E14fvP7zk%3D";
const UPDATE_ISO: &str = "http://localhost:8080/client/api?response=json&command=updateIso&id=3&name=bob&apiKey=identity&signature=1a2MHBVSLkqdbOjFUDfd4IW9vNA%3D";
const LIST_ISO_PERMISSIONS: &str = "http://localhost:8080/client/api?response=json&command=listIsoPermissions&listAll=true&id=3&apiKey=identity&signature=%2BDjzHbhQLbu6oDhgkAPI1u1NXq8%3D";

#[tokio::test]
async fn list_templates_defaults_to_executable() {
    let transport =
        ExpectTransport::new().expect(LIST_TEMPLATES, ok(include_str!("fixtures/listtemplatesresponse.json")));
    let (client, _) = client(transport);

    let templates = match client.templates().list_templates(ListTemplatesOptions::new()).await {
        Ok(t) => t,
        Err(e) => panic!("listTemplates failed: {e}"),
    };

    assert_eq!(templates.len(), 2);
    let builtin = &templates[0];
    assert_eq!(builtin.id, "2");
    assert_eq!(builtin.format, Some(TemplateFormat::Vhd));
    assert_eq!(builtin.template_type, Some(TemplateType::Builtin));
    assert_eq!(builtin.size, Some(21_474_836_480));
    assert!(builtin.cross_zones);
    assert!(builtin.featured);
    assert_eq!(templates[1].template_type, Some(TemplateType::User));
    assert!(templates[1].password_enabled);
}

#[tokio::test]
async fn list_templates_keeps_an_explicit_filter() {
    let (client, transport) = client(ExpectTransport::new().expect(LIST_FEATURED_TEMPLATES, not_found()));

    let options = ListTemplatesOptions::new().template_filter(TemplateFilter::Featured).zone_id(1);
    match client.templates().list_templates(options).await {
        Ok(templates) => assert!(templates.is_empty()),
        Err(e) => panic!("404 must become an empty list: {e}"),
    }
    assert_eq!(transport.calls(), vec![LIST_FEATURED_TEMPLATES.to_owned()]);
}

#[tokio::test]
async fn get_template_in_zone_absorbs_not_found() {
    let (client, _) = client(ExpectTransport::new().expect(GET_TEMPLATE_IN_ZONE, not_found()));

    match client.templates().get_template_in_zone("5", "1").await {
        Ok(None) => {}
        other => panic!("404 must become None, got {other:?}"),
    }
}

#[tokio::test]
async fn template_permissions_do_not_absorb_not_found() {
    let (client, _) = client(ExpectTransport::new().expect(LIST_TEMPLATE_PERMISSIONS, not_found()));

    match client.templates().list_template_permissions("17", AccountInDomainOptions::new()).await {
        Err(e) => assert!(e.is_not_found(), "expected NotFound, got {e:?}"),
        Ok(p) => panic!("listTemplatePermissions must surface a 404, got {p:?}"),
    }
}

#[tokio::test]
async fn template_permissions_decode_a_single_object() {
    let body = r#"{"listtemplatepermissionsresponse":{"templatepermission":{"id":17,"ispublic":true,"domainid":1,"account":["fred","bob"]}}}"#;
    let (client, _) = client(ExpectTransport::new().expect(LIST_TEMPLATE_PERMISSIONS, ok(body)));

    let permissions = match client.templates().list_template_permissions("17", AccountInDomainOptions::new()).await {
        Ok(p) => p,
        Err(e) => panic!("listTemplatePermissions failed: {e}"),
    };
    assert_eq!(permissions.len(), 1);
    assert!(permissions[0].public);
    assert_eq!(permissions[0].accounts, vec!["fred".to_owned(), "bob".to_owned()]);
}

#[tokio::test]
async fn update_template_permissions_joins_accounts() {
    let (client, _) = client(ExpectTransport::new().expect(UPDATE_TEMPLATE_PERMISSIONS, ok("")));

    let options = UpdatePermissionsOptions::new()
        .accounts([5, 6])
        .extractable(true)
        .featured(true)
        .public(true)
        .op(PermissionOperation::Add);
    if let Err(e) = client.templates().update_template_permissions("17", options).await {
        panic!("updateTemplatePermissions failed: {e}");
    }
}

#[tokio::test]
async fn extract_template_encodes_the_upload_url() {
    let body = r#"{"extracttemplateresponse":{"jobid":4}}"#;
    let (client, _) = client(ExpectTransport::new().expect(EXTRACT_TEMPLATE, ok(body)));

    let options = ExtractTemplateOptions::new().url("http://example.com/");
    match client.templates().extract_template("3", ExtractMode::HttpDownload, "5", options).await {
        Ok(created) => assert_eq!(created.job_id.as_str(), "4"),
        Err(e) => panic!("extractTemplate failed: {e}"),
    }
}

#[tokio::test]
async fn iso_commands_unwrap_their_envelopes() {
    let transport = ExpectTransport::new()
        .expect(ATTACH_ISO, ok(r#"{"attachisoresponse":{"jobid":1045}}"#))
        .expect(UPDATE_ISO, ok(r#"{"updateisoresponse":{"id":3,"name":"bob","bootable":true,"ispublic":false}}"#));
    let (client, _) = client(transport);

    match client.isos().attach_iso("3", "5").await {
        Ok(created) => assert_eq!(created.job_id.as_str(), "1045"),
        Err(e) => panic!("attachIso failed: {e}"),
    }
    match client.isos().update_iso("3", UpdateIsoOptions::new().name("bob")).await {
        Ok(iso) => {
            assert_eq!(iso.name.as_deref(), Some("bob"));
            assert!(iso.bootable);
        }
        Err(e) => panic!("updateIso failed: {e}"),
    }
}

#[tokio::test]
async fn iso_permissions_surface_server_errors() {
    let body = r#"{"listisopermissionsresponse":{"errorcode":431,"errortext":"Unable to find ISO with id 3"}}"#;
    let (client, _) = client(ExpectTransport::new().expect(LIST_ISO_PERMISSIONS, common::status(431, body)));

    match client.isos().list_iso_permissions("3", AccountInDomainOptions::new()).await {
        Err(ClientError::Client { status, message, .. }) => {
            assert_eq!(status, 431);
            assert_eq!(message, "Unable to find ISO with id 3");
        }
        other => panic!("expected a client error, got {other:?}"),
    }
}

#[tokio::test]
async fn template_lifecycle() {
    let template = r#"{"id":17,"name":"thename","displaytext":"description","ostypeid":10,"format":"QCOW2",
        "hypervisor":"XenServer","zoneid":20,"isready":false,"status":"Download pending"}"#;
    let transport = ExpectTransport::new()
        .expect(CREATE_TEMPLATE, ok(r#"{"createtemplateresponse":{"id":17,"jobid":1140}}"#))
        .expect(
            REGISTER_TEMPLATE,
            ok(&format!(r#"{{"registertemplateresponse":{{"count":1,"template":[{template}]}}}}"#)),
        )
        .expect(
            UPDATE_TEMPLATE,
            ok(r#"{"updatetemplateresponse":{"template":{"id":17,"name":"renamed","format":"QCOW2"}}}"#),
        )
        .expect(COPY_TEMPLATE, ok(r#"{"copytemplateresponse":{"id":17,"jobid":1141}}"#))
        .expect(DELETE_TEMPLATE, ok(r#"{"deletetemplateresponse":{"jobid":1142}}"#));
    let (client, transport) = client(transport);
    let templates = client.templates();
    let metadata = TemplateMetadata::new("thename", "10", "description");

    match templates.create_template(&metadata, CreateTemplateOptions::new().volume_id(7)).await {
        Ok(created) => {
            assert_eq!(created.id.as_deref(), Some("17"));
            assert_eq!(created.job_id.as_str(), "1140");
        }
        Err(e) => panic!("createTemplate failed: {e}"),
    }

    let registered = match templates
        .register_template(
            &metadata,
            TemplateFormat::Qcow2,
            "xen",
            "http://example.com/",
            "20",
            RegisterTemplateOptions::new(),
        )
        .await
    {
        Ok(t) => t,
        Err(e) => panic!("registerTemplate failed: {e}"),
    };
    assert_eq!(registered.format, Some(TemplateFormat::Qcow2));
    assert!(!registered.ready);

    match templates.update_template("17", UpdateTemplateOptions::new().name("renamed")).await {
        Ok(t) => assert_eq!(t.name.as_deref(), Some("renamed")),
        Err(e) => panic!("updateTemplate failed: {e}"),
    }
    match templates.copy_template("17", "18", "19").await {
        Ok(created) => assert_eq!(created.job_id.as_str(), "1141"),
        Err(e) => panic!("copyTemplate failed: {e}"),
    }
    match templates.delete_template("17", DeleteTemplateOptions::new().zone_id(8)).await {
        Ok(created) => {
            assert_eq!(created.id, None);
            assert_eq!(created.job_id.as_str(), "1142");
        }
        Err(e) => panic!("deleteTemplate failed: {e}"),
    }
    assert_eq!(transport.calls().len(), 5);
}

#[tokio::test]
async fn register_iso_escapes_quotes_and_spaces() {
    let body = r#"{"registerisoresponse":{"count":1,"iso":[{"id":3,"name":"bob's iso",
        "displaytext":"bob's copy of linux","bootable":true,"ispublic":true,"isfeatured":true,
        "isextractable":true,"ostypeid":7,"zoneid":9,"account":"fred","domainid":5}]}}"#;
    let (client, _) = client(ExpectTransport::new().expect(REGISTER_ISO, ok(body)));

    let options = RegisterIsoOptions::new()
        .account("fred")
        .domain_id(5)
        .bootable(true)
        .extractable(true)
        .featured(true)
        .public(true)
        .os_type_id(7);
    let iso = match client
        .isos()
        .register_iso("bob's iso", "http://example.com/", "bob's copy of linux", "9", options)
        .await
    {
        Ok(i) => i,
        Err(e) => panic!("registerIso failed: {e}"),
    };
    assert_eq!(iso.id, "3");
    assert_eq!(iso.display_text.as_deref(), Some("bob's copy of linux"));
    assert_eq!(iso.os_type_id.as_deref(), Some("7"));
    assert!(iso.bootable);
}

#[tokio::test]
async fn iso_jobs_return_receipts() {
    let transport = ExpectTransport::new()
        .expect(DETACH_ISO, ok(r#"{"detachisoresponse":{"jobid":1046}}"#))
        .expect(COPY_ISO, ok(r#"{"copyisoresponse":{"id":3,"jobid":1047}}"#))
        .expect(EXTRACT_ISO, ok(r#"{"extractisoresponse":{"id":3,"jobid":1048}}"#))
        .expect(DELETE_ISO, ok(r#"{"deleteisoresponse":{"jobid":1049}}"#));
    let (client, transport) = client(transport);
    let isos = client.isos();

    match isos.detach_iso("3").await {
        Ok(created) => assert_eq!(created.job_id.as_str(), "1046"),
        Err(e) => panic!("detachIso failed: {e}"),
    }
    match isos.copy_iso("3", "5", "7").await {
        Ok(created) => assert_eq!(created.job_id.as_str(), "1047"),
        Err(e) => panic!("copyIso failed: {e}"),
    }
    let options = ExtractIsoOptions::new().url("http://example.com/");
    match isos.extract_iso("3", ExtractMode::HttpDownload, "5", options).await {
        Ok(created) => {
            assert_eq!(created.id.as_deref(), Some("3"));
            assert_eq!(created.job_id.as_str(), "1048");
        }
        Err(e) => panic!("extractIso failed: {e}"),
    }
    match isos.delete_iso("3", DeleteIsoOptions::new().zone_id(5)).await {
        Ok(created) => assert_eq!(created.job_id.as_str(), "1049"),
        Err(e) => panic!("deleteIso failed: {e}"),
    }
    assert_eq!(transport.calls().len(), 4);
}

#[tokio::test]
async fn update_iso_permissions_joins_account_names() {
    let (client, _) = client(ExpectTransport::new().expect(UPDATE_ISO_PERMISSIONS, ok("")));

    let options = UpdatePermissionsOptions::new()
        .accounts(["fred", "bob"])
        .extractable(true)
        .featured(true)
        .public(true)
        .op(PermissionOperation::Add);
    if let Err(e) = client.isos().update_iso_permissions("3", options).await {
        panic!("updateIsoPermissions failed: {e}");
    }
}
