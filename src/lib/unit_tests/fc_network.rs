// SPDX-License-Identifier: Apache-2.0

use crate::unit_tests::testlib::{MockClient, FAKE_MSG_ERROR};
use crate::{reconcile, DesiredState, ErrorKind, FcNetwork};

const FACT_NAME: &str = "fc_network";

const EXISTING_FC_NETWORK: &str = r#"---
collections:
  fc-networks:
  - name: New FC Network 2
    uri: /rest/fc-networks/0da350eb-2206-408f-900d-7c3f4d075421
    connectionTemplateUri: null
    autoLoginRedistribution: true
    fabricType: FabricAttach
"#;

fn default_fc_network() -> FcNetwork {
    serde_yaml::from_str(
        r#"---
name: New FC Network 2
connectionTemplateUri: null
autoLoginRedistribution: true
fabricType: FabricAttach
"#,
    )
    .unwrap()
}

#[test]
fn test_fc_network_create() {
    let mut client = MockClient::default();

    let result =
        reconcile(&mut client, DesiredState::Present, default_fc_network())
            .unwrap();

    assert!(result.changed);
    assert_eq!(result.msg, "FC Network created successfully.");
    assert_eq!(result.fact(FACT_NAME), client.last_returned());
    let fc_net = result.fact(FACT_NAME).unwrap();
    assert_eq!(fc_net["fabricType"], "FabricAttach");
    assert!(fc_net["uri"].as_str().unwrap().starts_with("/rest/fc-networks/"));
}

#[test]
fn test_fc_network_already_present() {
    let mut client = MockClient::new(EXISTING_FC_NETWORK);

    let result = reconcile(
        &mut client,
        DesiredState::Present,
        FcNetwork::new("New FC Network 2"),
    )
    .unwrap();

    assert!(!result.changed);
    assert_eq!(result.msg, "FC Network is already present.");
    assert_eq!(
        result.fact(FACT_NAME).unwrap()["uri"],
        "/rest/fc-networks/0da350eb-2206-408f-900d-7c3f4d075421"
    );
    assert!(client.mutation_calls().is_empty());
}

#[test]
fn test_fc_network_full_template_already_present() {
    let mut client = MockClient::new(EXISTING_FC_NETWORK);

    let result =
        reconcile(&mut client, DesiredState::Present, default_fc_network())
            .unwrap();

    assert!(!result.changed);
    assert!(client.mutation_calls().is_empty());
}

#[test]
fn test_fc_network_update() {
    let mut client = MockClient::new(EXISTING_FC_NETWORK);
    let mut desired = default_fc_network();
    desired.new_name = Some("Renamed FC Network".to_string());
    desired
        ._other
        .insert("fabricType".to_string(), "DirectAttach".into());

    let result =
        reconcile(&mut client, DesiredState::Present, desired).unwrap();

    assert!(result.changed);
    assert_eq!(result.msg, "FC Network updated successfully.");
    let fc_net = result.fact(FACT_NAME).unwrap();
    assert_eq!(fc_net["name"], "Renamed FC Network");
    assert_eq!(fc_net["fabricType"], "DirectAttach");
}

#[test]
fn test_fc_network_delete() {
    let mut client = MockClient::new(EXISTING_FC_NETWORK);

    let result = reconcile(
        &mut client,
        DesiredState::Absent,
        FcNetwork::new("New FC Network 2"),
    )
    .unwrap();

    assert!(result.changed);
    assert_eq!(result.msg, "FC Network deleted successfully.");
    assert_eq!(result.facts.as_ref(), client.last_returned());
    let task = result.facts.unwrap();
    assert_eq!(task["category"], "tasks");
    assert_eq!(task["taskState"], "Completed");
    assert_eq!(task["associatedResource"]["resourceName"], "New FC Network 2");
}

#[test]
fn test_fc_network_already_absent() {
    let mut client = MockClient::default();

    let result = reconcile(
        &mut client,
        DesiredState::Absent,
        FcNetwork::new("New FC Network 2"),
    )
    .unwrap();

    assert!(!result.changed);
    assert_eq!(result.msg, "FC Network is already absent.");
    assert_eq!(result.facts, None);
}

#[test]
fn test_fc_network_create_failure() {
    let mut client = MockClient::default().failing_on("create");

    let result =
        reconcile(&mut client, DesiredState::Present, default_fc_network());

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ExternalError);
        assert_eq!(e.msg(), FAKE_MSG_ERROR);
    }
}

#[test]
fn test_fc_network_delete_failure() {
    let mut client = MockClient::new(EXISTING_FC_NETWORK).failing_on("delete");

    let result = reconcile(
        &mut client,
        DesiredState::Absent,
        FcNetwork::new("New FC Network 2"),
    );

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ExternalError);
        assert_eq!(e.msg(), FAKE_MSG_ERROR);
    }
}
