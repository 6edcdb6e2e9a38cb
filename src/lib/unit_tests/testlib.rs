// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use serde_json::Value;

use crate::{
    Collection, ErrorKind, InMemoryAppliance, OneViewClient, OneViewError,
};

pub(crate) const FAKE_MSG_ERROR: &str = "Fake message error";

const MUTATIONS: [&str; 4] = ["create", "update", "delete", "set_scopes"];

/// OneView client recording every call, optionally failing the named
/// operation with [FAKE_MSG_ERROR].
#[derive(Debug, Default)]
pub(crate) struct MockClient {
    pub(crate) appliance: InMemoryAppliance,
    pub(crate) fail_on: Option<&'static str>,
    calls: RefCell<Vec<String>>,
    returned: Vec<Value>,
}

impl MockClient {
    pub(crate) fn new(appliance_yaml: &str) -> Self {
        let mut appliance: InMemoryAppliance =
            serde_yaml::from_str(appliance_yaml).unwrap();
        appliance.normalize();
        Self {
            appliance,
            ..Default::default()
        }
    }

    pub(crate) fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn mutation_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| MUTATIONS.iter().any(|m| c.starts_with(m)))
            .collect()
    }

    /// Value returned by the latest successful mutation call.
    pub(crate) fn last_returned(&self) -> Option<&Value> {
        self.returned.last()
    }

    pub(crate) fn lookup_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with("get_by_name"))
            .count()
    }

    fn record(
        &self,
        operation: &str,
        detail: String,
    ) -> Result<(), OneViewError> {
        self.calls.borrow_mut().push(format!("{operation} {detail}"));
        if self.fail_on == Some(operation) {
            Err(OneViewError::new(
                ErrorKind::ExternalError,
                FAKE_MSG_ERROR.to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl OneViewClient for MockClient {
    fn get_by_name(
        &self,
        collection: Collection,
        name: &str,
    ) -> Result<Vec<Value>, OneViewError> {
        self.record("get_by_name", format!("{collection} {name}"))?;
        self.appliance.get_by_name(collection, name)
    }

    fn get_all(
        &self,
        collection: Collection,
    ) -> Result<Vec<Value>, OneViewError> {
        self.record("get_all", collection.to_string())?;
        self.appliance.get_all(collection)
    }

    fn get(
        &self,
        collection: Collection,
        uri: &str,
    ) -> Result<Option<Value>, OneViewError> {
        self.record("get", uri.to_string())?;
        self.appliance.get(collection, uri)
    }

    fn create(
        &mut self,
        collection: Collection,
        data: &Value,
    ) -> Result<Value, OneViewError> {
        self.record("create", collection.to_string())?;
        let ret = self.appliance.create(collection, data)?;
        self.returned.push(ret.clone());
        Ok(ret)
    }

    fn update(
        &mut self,
        collection: Collection,
        uri: &str,
        data: &Value,
    ) -> Result<Value, OneViewError> {
        self.record("update", uri.to_string())?;
        let ret = self.appliance.update(collection, uri, data)?;
        self.returned.push(ret.clone());
        Ok(ret)
    }

    fn delete(
        &mut self,
        collection: Collection,
        uri: &str,
    ) -> Result<Value, OneViewError> {
        self.record("delete", uri.to_string())?;
        let ret = self.appliance.delete(collection, uri)?;
        self.returned.push(ret.clone());
        Ok(ret)
    }

    fn set_scopes(
        &mut self,
        collection: Collection,
        uri: &str,
        scope_uris: &[String],
    ) -> Result<Value, OneViewError> {
        self.record("set_scopes", uri.to_string())?;
        let ret = self.appliance.set_scopes(collection, uri, scope_uris)?;
        self.returned.push(ret.clone());
        Ok(ret)
    }
}

pub(crate) const APPLIANCE_YAML: &str = r#"---
collections:
  interconnect-types:
  - name: HP VC Flex-10/10D Module
    uri: /rest/interconnect-types/123
  ethernet-networks:
  - name: Ethernet Network 1
    uri: /rest/ethernet-networks/aaa
  - name: Ethernet Network 2
    uri: /rest/ethernet-networks/bbb
  fc-networks:
  - name: FC Network 1
    uri: /rest/fc-networks/fff
"#;
