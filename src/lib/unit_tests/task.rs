// SPDX-License-Identifier: Apache-2.0

use crate::unit_tests::testlib::{MockClient, APPLIANCE_YAML};
use crate::{parse_tasks, DesiredState, ErrorKind, ResourceKind, Task};

#[test]
fn test_task_parse_single_and_list() {
    let tasks = parse_tasks(
        r#"---
resource: fc_network
state: absent
data:
  name: fc1
"#,
    )
    .unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].resource, ResourceKind::FcNetwork);
    assert_eq!(tasks[0].state, DesiredState::Absent);

    let tasks = parse_tasks(
        r#"---
- resource: logical_interconnect_group
  state: present
  data:
    name: lig1
- resource: fc_network
  state: present
  data:
    name: fc1
"#,
    )
    .unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].resource, ResourceKind::LogicalInterconnectGroup);
}

#[test]
fn test_task_invalid_state() {
    let result = parse_tasks(
        r#"---
resource: fc_network
state: compliant
data:
  name: fc1
"#,
    );

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_task_data_without_name() {
    let mut client = MockClient::new(APPLIANCE_YAML);
    let tasks = parse_tasks(
        r#"---
resource: logical_interconnect_group
state: present
data:
  enclosureType: C7000
"#,
    )
    .unwrap();

    let result = tasks[0].run(&mut client);

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
    assert!(client.calls().is_empty());
}

#[test]
fn test_task_run_lig_with_uplink_set() {
    let mut client = MockClient::new(APPLIANCE_YAML);
    let tasks = parse_tasks(
        r#"---
- resource: logical_interconnect_group
  state: present
  data:
    name: Test Logical Interconnect Group
    uplinkSets:
    - name: e23 uplink set
      mode: Auto
      networkType: Ethernet
      networkUris:
      - Ethernet Network 1
- resource: logical_interconnect_group
  state: absent
  data:
    name: Test Logical Interconnect Group
"#,
    )
    .unwrap();

    let result = tasks[0].run(&mut client).unwrap();
    assert!(result.changed);
    let lig = result.fact("logical_interconnect_group").unwrap();
    assert_eq!(
        lig["uplinkSets"][0]["networkUris"],
        serde_json::json!(["/rest/ethernet-networks/aaa"])
    );
    assert_eq!(lig["uplinkSets"][0]["mode"], "Auto");

    let result = tasks[1].run(&mut client).unwrap();
    assert!(result.changed);
    assert_eq!(result.msg, "Logical Interconnect Group deleted successfully.");
}

#[test]
fn test_task_run_fc_network_absent() {
    let mut client = MockClient::new(APPLIANCE_YAML);
    let task = Task::new(
        ResourceKind::FcNetwork,
        DesiredState::Absent,
        serde_json::json!({"name": "FC Network 1"}),
    );

    let result = task.run(&mut client).unwrap();

    assert!(result.changed);
    assert_eq!(result.msg, "FC Network deleted successfully.");
    assert_eq!(
        client.mutation_calls(),
        vec!["delete /rest/fc-networks/fff".to_string()]
    );
    assert_eq!(result.facts.as_ref(), client.last_returned());
}
