// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Collection, ErrorKind, OneViewClient, OneViewError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
/// A OneView appliance kept in memory, used when no real appliance is
/// reachable and as the backing store of `ovstatectl`.
///
/// It can be serialized to and deserialized from a document like:
///
/// ```yaml
/// collections:
///   interconnect-types:
///   - name: HP VC Flex-10/10D Module
///     uri: /rest/interconnect-types/9d31081c-e010-4005-bf0b-e64b0ca04af5
///   ethernet-networks:
///   - name: vlan 100
/// ```
///
/// Resources without `uri` get one assigned on load by
/// [InMemoryAppliance::normalize].
pub struct InMemoryAppliance {
    #[serde(default)]
    pub collections: BTreeMap<Collection, Vec<Value>>,
}

impl InMemoryAppliance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `resource` as is, assigning the appliance managed properties
    /// which are missing. Returns the stored resource.
    pub fn add(
        &mut self,
        collection: Collection,
        resource: Value,
    ) -> Result<Value, OneViewError> {
        let mut resource = into_object(resource)?;
        if !resource.contains_key("uri") {
            resource
                .insert("uri".to_string(), Value::String(gen_uri(collection)));
        }
        fill_managed_properties(collection, &mut resource);
        let resource = Value::Object(resource);
        self.collections
            .entry(collection)
            .or_default()
            .push(resource.clone());
        Ok(resource)
    }

    /// Assign `uri` and other appliance managed properties to resources
    /// loaded from file without them.
    pub fn normalize(&mut self) {
        for (collection, resources) in self.collections.iter_mut() {
            for resource in resources.iter_mut() {
                if let Some(obj) = resource.as_object_mut() {
                    if !obj.contains_key("uri") {
                        obj.insert(
                            "uri".to_string(),
                            Value::String(gen_uri(*collection)),
                        );
                    }
                    fill_managed_properties(*collection, obj);
                }
            }
        }
    }

    fn resources(&self, collection: Collection) -> &[Value] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn find_mut(
        &mut self,
        collection: Collection,
        uri: &str,
    ) -> Result<&mut Value, OneViewError> {
        self.collections
            .get_mut(&collection)
            .and_then(|rs| rs.iter_mut().find(|r| has_uri(r, uri)))
            .ok_or_else(|| resource_not_found(uri))
    }

    fn check_name_conflict(
        &self,
        collection: Collection,
        resource: &Map<String, Value>,
        self_uri: Option<&str>,
    ) -> Result<(), OneViewError> {
        let name = match resource.get("name").and_then(Value::as_str) {
            Some(n) => n,
            None => {
                return Err(external_error(format!(
                    "The name property of {collection} resource is required"
                )));
            }
        };
        if self.resources(collection).iter().any(|r| {
            r.get("name").and_then(Value::as_str) == Some(name)
                && self_uri.map(|u| !has_uri(r, u)).unwrap_or(true)
        }) {
            Err(external_error(format!(
                "The {collection} resource name {name} is already in use"
            )))
        } else {
            Ok(())
        }
    }
}

impl OneViewClient for InMemoryAppliance {
    fn get_by_name(
        &self,
        collection: Collection,
        name: &str,
    ) -> Result<Vec<Value>, OneViewError> {
        Ok(self
            .resources(collection)
            .iter()
            .filter(|r| r.get("name").and_then(Value::as_str) == Some(name))
            .cloned()
            .collect())
    }

    fn get_all(
        &self,
        collection: Collection,
    ) -> Result<Vec<Value>, OneViewError> {
        Ok(self.resources(collection).to_vec())
    }

    fn get(
        &self,
        collection: Collection,
        uri: &str,
    ) -> Result<Option<Value>, OneViewError> {
        Ok(self
            .resources(collection)
            .iter()
            .find(|r| has_uri(r, uri))
            .cloned())
    }

    fn create(
        &mut self,
        collection: Collection,
        data: &Value,
    ) -> Result<Value, OneViewError> {
        let mut resource = into_object(data.clone())?;
        self.check_name_conflict(collection, &resource, None)?;
        resource.insert("uri".to_string(), Value::String(gen_uri(collection)));
        resource.insert("created".to_string(), Value::String(now()));
        fill_managed_properties(collection, &mut resource);
        touch(&mut resource);
        let resource = Value::Object(resource);
        self.collections
            .entry(collection)
            .or_default()
            .push(resource.clone());
        Ok(resource)
    }

    fn update(
        &mut self,
        collection: Collection,
        uri: &str,
        data: &Value,
    ) -> Result<Value, OneViewError> {
        let mut resource = into_object(data.clone())?;
        self.check_name_conflict(collection, &resource, Some(uri))?;
        let stored = self.find_mut(collection, uri)?;
        resource.insert("uri".to_string(), Value::String(uri.to_string()));
        if let Some(created) = stored.get("created") {
            resource.insert("created".to_string(), created.clone());
        }
        fill_managed_properties(collection, &mut resource);
        touch(&mut resource);
        *stored = Value::Object(resource);
        Ok(stored.clone())
    }

    fn delete(
        &mut self,
        collection: Collection,
        uri: &str,
    ) -> Result<Value, OneViewError> {
        let resources = self
            .collections
            .get_mut(&collection)
            .ok_or_else(|| resource_not_found(uri))?;
        let index = resources
            .iter()
            .position(|r| has_uri(r, uri))
            .ok_or_else(|| resource_not_found(uri))?;
        let resource = resources.remove(index);
        Ok(gen_delete_task(collection, &resource, uri))
    }

    fn set_scopes(
        &mut self,
        collection: Collection,
        uri: &str,
        scope_uris: &[String],
    ) -> Result<Value, OneViewError> {
        let stored = self.find_mut(collection, uri)?;
        if let Some(obj) = stored.as_object_mut() {
            obj.insert(
                "scopeUris".to_string(),
                Value::Array(
                    scope_uris.iter().cloned().map(Value::String).collect(),
                ),
            );
            touch(obj);
        }
        Ok(stored.clone())
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, OneViewError> {
    match value {
        Value::Object(o) => Ok(o),
        v => Err(external_error(format!(
            "Expecting a resource object, but got {v}"
        ))),
    }
}

fn has_uri(resource: &Value, uri: &str) -> bool {
    resource.get("uri").and_then(Value::as_str) == Some(uri)
}

fn gen_uri(collection: Collection) -> String {
    format!("{}/{}", collection.uri_prefix(), uuid::Uuid::new_v4())
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn fill_managed_properties(
    collection: Collection,
    resource: &mut Map<String, Value>,
) {
    resource
        .entry("category")
        .or_insert_with(|| Value::String(collection.category().to_string()));
    if !matches!(resource.get("scopeUris"), Some(Value::Array(_))) {
        resource.insert("scopeUris".to_string(), Value::Array(Vec::new()));
    }
}

// Bump the modification time and eTag
fn touch(resource: &mut Map<String, Value>) {
    let now = now();
    resource.insert("eTag".to_string(), Value::String(now.clone()));
    resource.insert("modified".to_string(), Value::String(now));
}

fn gen_delete_task(
    collection: Collection,
    resource: &Value,
    uri: &str,
) -> Value {
    let resource_name = resource.get("name").cloned().unwrap_or(Value::Null);
    serde_json::json!({
        "associatedResource": {
            "associationType": "MANAGED_BY",
            "resourceCategory": collection.category(),
            "resourceName": resource_name,
            "resourceUri": uri,
        },
        "category": "tasks",
        "name": "Delete",
        "owner": "administrator",
        "taskErrors": [],
        "taskOutput": [],
        "taskState": "Completed",
        "type": "TaskResourceV2",
        "uri": format!("/rest/tasks/{}", uuid::Uuid::new_v4()),
        "userInitiated": true,
    })
}

fn resource_not_found(uri: &str) -> OneViewError {
    external_error(format!("Resource not found: {uri}"))
}

fn external_error(msg: String) -> OneViewError {
    let e = OneViewError::new(ErrorKind::ExternalError, msg);
    log::error!("{}", e);
    e
}
