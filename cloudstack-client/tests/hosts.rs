//! Expectation tests for hosts, clusters and storage pools.

mod common;

use cloudstack_client::{
    AddClusterOptions, AddHostOptions, AddSecondaryStorageOptions, DeleteHostOptions, ListClustersOptions,
    ListHostsOptions, ListStoragePoolsOptions, UpdateClusterOptions, UpdateHostOptions,
};
use cloudstack_core::{AllocationState, ClusterType, HostState, HostType, ManagedState};

use common::{client, not_found, ok, ExpectTransport};

const LIST_HOSTS: &str = "http://localhost:8080/client/api?response=json&command=listHosts&listAll=true&apiKey=identity&signature=NnYyyEy30G3V2dcIt7w4WZ68AU8%3D";
const ADD_HOST: &str = "http://localhost:8080/client/api?response=json&command=addHost&zoneid=1&url=http%3A//example.com&hypervisor=XenServer&username=fred&password=sekrit&hosttags=&allocationstate=Enabled&clusterid=1&clustername=Xen%20Clust%201&podid=1&apiKey=identity&signature=ExGaljKKQIlVbWk5hd0BnnjmBzs%3D";
const DELETE_HOST: &str = "http://localhost:8080/client/api?response=json&command=deleteHost&id=42&forced=true&apiKey=identity&signature=wfi36qQqCwGxzd/pPCKfbUepbdg%3D";
const PREPARE_MAINTENANCE: &str = "http://localhost:8080/client/api?response=json&command=prepareHostForMaintenance&id=42&apiKey=identity&signature=m8GfTv%2BrZ5mo0pU1%2BlKSUnprv3Y%3D";
const CANCEL_MAINTENANCE: &str = "http://localhost:8080/client/api?response=json&command=cancelHostMaintenance&id=42&apiKey=identity&signature=UwFHsHk1HLTCUhLhTQZ4Y82EIs8%3D";
const UPDATE_HOST_PASSWORD: &str = "http://localhost:8080/client/api?response=json&command=updateHostPassword&hostid=42&username=fred&password=sekrit&apiKey=identity&signature=RAbftN9PbV9fCgxUgIVsV%2Bebb88%3D";
const DELETE_HOST_FORCED: &str = "http://localhost:8080/client/api?response=json&command=deleteHost&id=1&forced=true&forcedestroylocalstorage=true&apiKey=identity&signature=ZdvO1BWBkdPiDAjsVlKtqDe6N7k%3D";
const UPDATE_HOST: &str = "http://localhost:8080/client/api?response=json&command=updateHost&id=1&allocationstate=Enabled&hosttags=&oscategoryid=5&apiKey=identity&signature=qTxNq9yQG8S108giqS/ROFzgev8%3D";
const RECONNECT_HOST: &str = "http://localhost:8080/client/api?response=json&command=reconnectHost&id=1&apiKey=identity&signature=wJEF02vwdyOnJOTa%2BWMMK906aRU%3D";
const ADD_SECONDARY_STORAGE: &str = "http://localhost:8080/client/api?response=json&command=addSecondaryStorage&url=nfs%3A//10.26.26.165/mnt/nfs/cs_sec&zoneid=1&apiKey=identity&signature=MccRKx1yPP43ImiO70WlhVDlAIA%3D";
const LIST_CLUSTERS: &str = "http://localhost:8080/client/api?response=json&command=listClusters&listAll=true&apiKey=identity&signature=lbimqg0OKIq8sgQBpNmi4oQNFog%3D";
const ADD_CLUSTER: &str = "http://localhost:8080/client/api?response=json&command=addCluster&zoneid=1&clustername=Xen%20Clust%201&clustertype=CloudManaged&hypervisor=XenServer&allocationstate=Enabled&podid=1&url=http%3A//example.com/cluster&username=fred&password=sekrit&apiKey=identity&signature=2uIQ5qF0bVycXK111wxvogWp1Yw%3D";
const UPDATE_CLUSTER: &str = "http://localhost:8080/client/api?response=json&command=updateCluster&id=1&allocationstate=Enabled&clustername=Xen%20Clust%201&clustertype=CloudManaged&hypervisor=XenServer&managedstate=Managed&apiKey=identity&signature=/wbuYKwInciSXWkUf05lEfJZShQ%3D";
const UPDATE_CLUSTER_PASSWORD: &str = "http://localhost:8080/client/api?response=json&command=updateHostPassword&clusterid=1&username=fred&password=sekrit&apiKey=identity&signature=xwc83%2BoYK0cuAiFQAlg/7/1IVHE%3D";
const DELETE_CLUSTER: &str = "http://localhost:8080/client/api?response=json&command=deleteCluster&id=1&apiKey=identity&signature=CKH26MFgKGY7Sosd17LjBMNa3AI%3D";
const LIST_STORAGE_POOLS: &str = "http://localhost:8080/client/api?response=json&command=listStoragePools&listAll=true&zoneid=1&apiKey=identity&signature=PPBoI8FykrUaPGkl6WU87vTodu8%3D";

#[tokio::test]
async fn list_hosts_decodes_routing_and_storage_hosts() {
    let transport = ExpectTransport::new().expect(LIST_HOSTS, ok(include_str!("fixtures/listhostsresponse.json")));
    let (client, _) = client(transport);

    let hosts = match client.hosts().list_hosts(ListHostsOptions::new()).await {
        Ok(h) => h,
        Err(e) => panic!("listHosts failed: {e}"),
    };

    assert_eq!(hosts.len(), 2);
    let routing = &hosts[0];
    assert_eq!(routing.id, "1");
    assert_eq!(routing.state, Some(HostState::Up));
    assert_eq!(routing.host_type, Some(HostType::Routing));
    assert_eq!(routing.cpu_number, 24);
    assert_eq!(routing.memory_total, 100_549_733_760);
    assert_eq!(routing.cluster_type, Some(ClusterType::CloudManaged));
    assert_eq!(routing.management_server_id.as_deref(), Some("223098941760041"));
    assert!(routing.tags.is_empty());
    assert!(routing.created.is_some());

    let storage = &hosts[1];
    assert_eq!(storage.host_type, Some(HostType::SecondaryStorage));
    assert_eq!(storage.state, Some(HostState::Alert));
    assert!(storage.disconnected.is_some());
}

#[tokio::test]
async fn add_host_signs_the_full_option_set() {
    let transport = ExpectTransport::new().expect(ADD_HOST, ok(include_str!("fixtures/addhostresponse.json")));
    let (client, _) = client(transport);

    let options = AddHostOptions::new()
        .host_tags(Vec::<String>::new())
        .allocation_state(AllocationState::Enabled)
        .cluster_id(1)
        .cluster_name("Xen Clust 1")
        .pod_id(1);
    let host = match client
        .hosts()
        .add_host("1", "http://example.com", "XenServer", "fred", "sekrit", options)
        .await
    {
        Ok(h) => h,
        Err(e) => panic!("addHost failed: {e}"),
    };

    assert_eq!(host.id, "9");
    assert_eq!(host.state, Some(HostState::Connecting));
    assert_eq!(host.cluster_name.as_deref(), Some("Xen Clust 1"));
}

#[tokio::test]
async fn delete_host_tolerates_missing_host() {
    let (client, _) = client(ExpectTransport::new().expect(DELETE_HOST, not_found()));

    if let Err(e) = client.hosts().delete_host("42", DeleteHostOptions::new().forced(true)).await {
        panic!("deleting a missing host must succeed: {e}");
    }
}

#[tokio::test]
async fn maintenance_commands_return_job_ids() {
    let transport = ExpectTransport::new()
        .expect(PREPARE_MAINTENANCE, ok(r#"{"preparehostformaintenanceresponse":{"jobid":"98a7"}}"#))
        .expect(CANCEL_MAINTENANCE, ok(r#"{"cancelhostmaintenanceresponse":{"jobid":3061}}"#));
    let (client, _) = client(transport);

    match client.hosts().prepare_host_for_maintenance("42").await {
        Ok(job) => assert_eq!(job.as_str(), "98a7"),
        Err(e) => panic!("prepareHostForMaintenance failed: {e}"),
    }
    match client.hosts().cancel_host_maintenance("42").await {
        Ok(job) => assert_eq!(job.as_str(), "3061"),
        Err(e) => panic!("cancelHostMaintenance failed: {e}"),
    }
}

#[tokio::test]
async fn update_host_password_ignores_the_body() {
    let (client, _) = client(ExpectTransport::new().expect(UPDATE_HOST_PASSWORD, ok("not json at all")));

    if let Err(e) = client.hosts().update_host_password("42", "fred", "sekrit").await {
        panic!("updateHostPassword discards its response: {e}");
    }
}

#[tokio::test]
async fn list_storage_pools_accepts_a_single_object() {
    let body = r#"{"liststoragepoolsresponse":{"count":1,"storagepool":{"id":201,"zoneid":1,"zonename":"Dev Zone 1",
        "podid":1,"podname":"Dev Pod 1","name":"NFS Pri 1","ipaddress":"10.26.26.165","path":"/mnt/nfs/cs_pri",
        "created":"2011-11-26T23:33:54+0200","type":"NetworkFilesystem","clusterid":1,"clustername":"Xen Cluster 1",
        "disksizetotal":898356445184,"disksizeallocated":18276679680,"tags":"","state":"Up"}}}"#;
    let (client, _) = client(ExpectTransport::new().expect(LIST_STORAGE_POOLS, ok(body)));

    let pools = match client.hosts().list_storage_pools(ListStoragePoolsOptions::new().zone_id(1)).await {
        Ok(p) => p,
        Err(e) => panic!("listStoragePools failed: {e}"),
    };
    assert_eq!(pools.len(), 1);
    assert_eq!(pools[0].name.as_deref(), Some("NFS Pri 1"));
    assert_eq!(pools[0].disk_size_total, 898_356_445_184);
    assert!(pools[0].tags.is_empty());
}

#[tokio::test]
async fn list_hosts_always_asks_for_json() {
    let (client, transport) = client(ExpectTransport::new().expect(LIST_HOSTS, not_found()));

    match client.hosts().list_hosts(ListHostsOptions::new().param("response", "xml")).await {
        Ok(hosts) => assert!(hosts.is_empty()),
        Err(e) => panic!("listHosts failed: {e}"),
    }
    assert_eq!(transport.calls(), vec![LIST_HOSTS.to_owned()]);
}

#[tokio::test]
async fn delete_host_sends_the_local_storage_flag() {
    let (client, _) = client(ExpectTransport::new().expect(DELETE_HOST_FORCED, ok("")));

    let options = DeleteHostOptions::new().forced(true).forced_destroy_local_storage(true);
    if let Err(e) = client.hosts().delete_host("1", options).await {
        panic!("deleteHost failed: {e}");
    }
}

#[tokio::test]
async fn update_host_clears_tags_with_an_empty_list() {
    let body = r#"{"updatehostresponse":{"host":{"id":1,"name":"xenserver-1","state":"Up","type":"Routing",
        "allocationstate":"Enabled","oscategoryid":5,"hosttags":""}}}"#;
    let (client, _) = client(ExpectTransport::new().expect(UPDATE_HOST, ok(body)));

    let options = UpdateHostOptions::new()
        .allocation_state(AllocationState::Enabled)
        .host_tags(Vec::<String>::new())
        .os_category_id(5);
    let host = match client.hosts().update_host("1", options).await {
        Ok(h) => h,
        Err(e) => panic!("updateHost failed: {e}"),
    };
    assert_eq!(host.id, "1");
    assert_eq!(host.os_category_id.as_deref(), Some("5"));
    assert!(host.tags.is_empty());
}

#[tokio::test]
async fn reconnect_host_returns_a_job_id() {
    let body = r#"{"reconnecthostresponse":{"jobid":3062}}"#;
    let (client, _) = client(ExpectTransport::new().expect(RECONNECT_HOST, ok(body)));

    match client.hosts().reconnect_host("1").await {
        Ok(job) => assert_eq!(job.as_str(), "3062"),
        Err(e) => panic!("reconnectHost failed: {e}"),
    }
}

#[tokio::test]
async fn add_secondary_storage_decodes_the_storage_host() {
    let body = r#"{"addsecondarystorageresponse":{"host":{"id":2,"name":"nfs://10.26.26.165/mnt/nfs/cs_sec",
        "state":"Alert","type":"SecondaryStorage","ipaddress":"nfs","zoneid":1,"zonename":"San Jose 1"}}}"#;
    let (client, _) = client(ExpectTransport::new().expect(ADD_SECONDARY_STORAGE, ok(body)));

    let options = AddSecondaryStorageOptions::new().zone_id(1);
    match client.hosts().add_secondary_storage("nfs://10.26.26.165/mnt/nfs/cs_sec", options).await {
        Ok(host) => {
            assert_eq!(host.id, "2");
            assert_eq!(host.host_type, Some(HostType::SecondaryStorage));
        }
        Err(e) => panic!("addSecondaryStorage failed: {e}"),
    }
}

#[tokio::test]
async fn list_clusters_decodes_states() {
    let body = r#"{"listclustersresponse":{"count":1,"cluster":[{"id":1,"name":"Xen Clust 1","podid":1,
        "podname":"San Jose 1 Pod 1","zoneid":1,"zonename":"San Jose 1","hypervisortype":"XenServer",
        "clustertype":"CloudManaged","allocationstate":"Enabled","managedstate":"Managed"}]}}"#;
    let (client, _) = client(ExpectTransport::new().expect(LIST_CLUSTERS, ok(body)));

    let clusters = match client.hosts().list_clusters(ListClustersOptions::new()).await {
        Ok(c) => c,
        Err(e) => panic!("listClusters failed: {e}"),
    };
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].hypervisor.as_deref(), Some("XenServer"));
    assert_eq!(clusters[0].cluster_type, Some(ClusterType::CloudManaged));
    assert_eq!(clusters[0].managed_state, Some(ManagedState::Managed));
}

#[tokio::test]
async fn cluster_lifecycle() {
    let cluster = r#"{"id":1,"name":"Xen Clust 1","podid":1,"zoneid":1,"hypervisortype":"XenServer",
        "clustertype":"CloudManaged","allocationstate":"Enabled","managedstate":"Managed"}"#;
    let transport = ExpectTransport::new()
        .expect(ADD_CLUSTER, ok(&format!(r#"{{"addclusterresponse":{{"count":1,"cluster":[{cluster}]}}}}"#)))
        .expect(UPDATE_CLUSTER, ok(&format!(r#"{{"updateclusterresponse":{{"cluster":{cluster}}}}}"#)))
        .expect(UPDATE_CLUSTER_PASSWORD, ok(""))
        .expect(DELETE_CLUSTER, not_found());
    let (client, transport) = client(transport);
    let hosts = client.hosts();

    let options = AddClusterOptions::new()
        .allocation_state(AllocationState::Enabled)
        .pod_id(1)
        .url("http://example.com/cluster")
        .username("fred")
        .password("sekrit");
    match hosts.add_cluster("1", "Xen Clust 1", ClusterType::CloudManaged, "XenServer", options).await {
        Ok(c) => assert_eq!(c.name.as_deref(), Some("Xen Clust 1")),
        Err(e) => panic!("addCluster failed: {e}"),
    }

    let options = UpdateClusterOptions::new()
        .allocation_state(AllocationState::Enabled)
        .cluster_name("Xen Clust 1")
        .cluster_type(ClusterType::CloudManaged)
        .hypervisor("XenServer")
        .managed_state(ManagedState::Managed);
    match hosts.update_cluster("1", options).await {
        Ok(c) => assert_eq!(c.allocation_state, Some(AllocationState::Enabled)),
        Err(e) => panic!("updateCluster failed: {e}"),
    }

    if let Err(e) = hosts.update_cluster_password("1", "fred", "sekrit").await {
        panic!("updateHostPassword for a cluster failed: {e}");
    }
    if let Err(e) = hosts.delete_cluster("1").await {
        panic!("deleting a missing cluster must succeed: {e}");
    }
    assert_eq!(transport.calls().len(), 4);
}
