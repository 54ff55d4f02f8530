//! Resolver tests against a mocked item query.

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use netmon_rpc::{ItemQuery, Params, RpcError};
use netmon_topology::{
    NeighborResolver, SiteCodeMatcher, SiteFamily, SiteFamilyTable, TopologyError,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

mock! {
    pub Items {}

    #[async_trait]
    impl ItemQuery for Items {
        async fn query_items(&self, params: Params) -> netmon_rpc::Result<Vec<Value>>;
    }
}

fn alias(key: &str, value: &str) -> Value {
    json!({"itemid": "1", "key_": key, "prevvalue": value, "hostid": "10084"})
}

fn host_params() -> Params {
    Params::new().with("hostids", "10084")
}

#[tokio::test]
async fn test_single_query_with_caller_params() {
    let mut query = MockItems::new();
    query
        .expect_query_items()
        .with(eq(host_params()))
        .times(1)
        .returning(|_| {
            Ok(vec![
                alias("alias[Gi0/1]", "PRDNETRHP-SITEA"),
                alias("alias_admin[Gi0/2]", "ignored"),
            ])
        });

    let resolver = NeighborResolver::new(query);
    let interfaces = resolver
        .resolve_neighbor_interfaces("PRDNETRHP-SITEA", host_params())
        .await
        .unwrap();
    assert_eq!(interfaces, vec!["Gi0/1".to_string()]);
}

#[tokio::test]
async fn test_production_tag_links() {
    let mut query = MockItems::new();
    query.expect_query_items().times(1).returning(|_| {
        Ok(vec![
            alias("alias[GigabitEthernet1/0/1]", "PRDNETRHP510-CORE1"),
            alias("alias[GigabitEthernet1/0/2]", "PRDNETRHP510-CORE1"),
            alias("alias[Aggregation7]", "PRDNETRHP510-CORE1"),
            alias("alias[GigabitEthernet1/0/9]", "ABCDEFGHI520-EDGE"),
        ])
    });

    let resolver = NeighborResolver::new(query);
    let interfaces = resolver
        .resolve_neighbor_interfaces("PRDNETRHP520-OTHER", Params::new())
        .await
        .unwrap();
    assert_eq!(interfaces, vec!["Aggregation7".to_string()]);
}

#[tokio::test]
async fn test_transport_failure_unchanged() {
    let mut query = MockItems::new();
    query.expect_query_items().times(1).returning(|_| {
        Err(RpcError::Api {
            code: -32602,
            message: "Invalid params.".to_string(),
            data: "Session terminated, re-login, please.".to_string(),
        })
    });

    let resolver = NeighborResolver::new(query);
    let err = resolver
        .find_family_interfaces("SITE510", Params::new())
        .await
        .unwrap_err();
    match err {
        TopologyError::Collaborator(RpcError::Api { code, .. }) => assert_eq!(code, -32602),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_custom_family_table() {
    let table = SiteFamilyTable::new(vec![SiteFamily::new("700", ["700", "701"])]).unwrap();

    let mut query = MockItems::new();
    query.expect_query_items().times(1).returning(|_| {
        Ok(vec![
            alias("alias[Gi0/1]", "EDGE701"),
            alias("alias[Gi0/2]", "EDGE511"),
        ])
    });

    let resolver = NeighborResolver::with_matcher(query, SiteCodeMatcher::new(table));
    let interfaces = resolver
        .find_family_interfaces("CORE700", Params::new())
        .await
        .unwrap();
    assert_eq!(interfaces, vec!["Gi0/1".to_string()]);
}

#[tokio::test]
async fn test_site_summary_end_to_end() {
    let mut query = MockItems::new();
    query.expect_query_items().times(1).returning(|_| {
        Ok(vec![
            alias("alias[Gi0/1]", "ZZZZSITE0510-CORE"),
            alias("alias[Gi0/2]", "PRDNETRHP511-X"),
            alias("alias[Gi0/3]", "Portable-17"),
            alias("alias[Gi0/4]", "AAAASITE0520-EDGE"),
            alias("alias[Gi0/5]", "PRDNETRHP520-Y"),
            alias("alias[Gi0/6]", "ZZZZSITE0510-EDGE"),
        ])
    });

    let resolver = NeighborResolver::new(query);
    let sites = resolver.summarize_neighbor_sites(Params::new()).await.unwrap();
    assert_eq!(
        sites,
        vec![
            "AAAASITE0520".to_string(),
            "PRDNETRHP500".to_string(),
            "ZZZZSITE0510".to_string(),
        ]
    );
}
