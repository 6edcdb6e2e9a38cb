// SPDX-License-Identifier: Apache-2.0

use serde_json::json;

use crate::{Collection, ErrorKind, InMemoryAppliance, OneViewClient};

#[test]
fn test_offline_load_assigns_uri() {
    let mut appliance: InMemoryAppliance = serde_yaml::from_str(
        r#"---
collections:
  ethernet-networks:
  - name: vlan 100
  - name: vlan 200
    uri: /rest/ethernet-networks/200
"#,
    )
    .unwrap();
    appliance.normalize();

    let nets = appliance
        .get_by_name(Collection::EthernetNetworks, "vlan 100")
        .unwrap();
    assert_eq!(nets.len(), 1);
    assert!(nets[0]["uri"]
        .as_str()
        .unwrap()
        .starts_with("/rest/ethernet-networks/"));
    assert_eq!(nets[0]["category"], "ethernet-networks");
    assert_eq!(
        appliance
            .get(Collection::EthernetNetworks, "/rest/ethernet-networks/200")
            .unwrap()
            .unwrap()["name"],
        "vlan 200"
    );
}

#[test]
fn test_offline_yaml_round_trip_keeps_resources() {
    let mut appliance = InMemoryAppliance::new();
    appliance
        .create(Collection::FcNetworks, &json!({"name": "fc1"}))
        .unwrap();

    let content = serde_yaml::to_string(&appliance).unwrap();
    let loaded: InMemoryAppliance = serde_yaml::from_str(&content).unwrap();

    assert_eq!(loaded, appliance);
}

#[test]
fn test_offline_create_name_conflict() {
    let mut appliance = InMemoryAppliance::new();
    appliance
        .create(Collection::FcNetworks, &json!({"name": "fc1"}))
        .unwrap();

    let result =
        appliance.create(Collection::FcNetworks, &json!({"name": "fc1"}));

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ExternalError);
    }
}

#[test]
fn test_offline_update_keeps_identity() {
    let mut appliance = InMemoryAppliance::new();
    let created = appliance
        .create(Collection::FcNetworks, &json!({"name": "fc1"}))
        .unwrap();
    let uri = created["uri"].as_str().unwrap().to_string();

    let updated = appliance
        .update(
            Collection::FcNetworks,
            &uri,
            &json!({"name": "fc2", "uri": "/rest/fc-networks/other"}),
        )
        .unwrap();

    assert_eq!(updated["uri"], uri.as_str());
    assert_eq!(updated["created"], created["created"]);
    assert_eq!(updated["name"], "fc2");
    assert!(appliance
        .get_by_name(Collection::FcNetworks, "fc1")
        .unwrap()
        .is_empty());
}

#[test]
fn test_offline_unknown_uri() {
    let mut appliance = InMemoryAppliance::new();

    let result =
        appliance.delete(Collection::FcNetworks, "/rest/fc-networks/1");

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::ExternalError);
        assert_eq!(e.msg(), "Resource not found: /rest/fc-networks/1");
    }
}

#[test]
fn test_offline_set_scopes() {
    let mut appliance = InMemoryAppliance::new();
    let created = appliance
        .add(
            Collection::LogicalInterconnectGroups,
            json!({
                "name": "lig1",
                "uri": "/rest/logical-interconnect-groups/1",
            }),
        )
        .unwrap();
    assert_eq!(created["scopeUris"], json!([]));

    let resource = appliance
        .set_scopes(
            Collection::LogicalInterconnectGroups,
            "/rest/logical-interconnect-groups/1",
            &["/rest/scopes/a".to_string()],
        )
        .unwrap();

    assert_eq!(resource["scopeUris"], json!(["/rest/scopes/a"]));
}
