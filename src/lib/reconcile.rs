// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{get_first_by_name, resource_uri};
use crate::compare::is_same_resource;
use crate::{Collection, ErrorKind, OneViewClient, OneViewError};

const NEW_NAME_KEY: &str = "newName";
const SCOPE_URIS_KEY: &str = "scopeUris";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    /// Resource should exist and be compliant with the desired properties.
    Present,
    /// Resource should not exist.
    Absent,
}

impl std::fmt::Display for DesiredState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Present => "present",
                Self::Absent => "absent",
            }
        )
    }
}

/// User facing messages of each reconcile outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub already_present: &'static str,
    pub already_absent: &'static str,
}

/// A OneView resource kind which can be reconciled by [reconcile].
pub trait ManagedResource: Serialize + Clone {
    const COLLECTION: Collection;
    /// Key of the resource in [ReconcileResult::facts].
    const FACT_NAME: &'static str;
    const MESSAGES: ResourceMessages;

    fn name(&self) -> &str;

    fn new_name(&self) -> Option<&str>;

    fn take_scope_uris(&mut self) -> Option<Vec<String>>;

    /// Replace name based references to other resources with their URIs.
    fn resolve_references<C>(&self, _client: &C) -> Result<Self, OneViewError>
    where
        C: OneViewClient + ?Sized,
    {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ReconcileResult {
    pub changed: bool,
    pub msg: String,
    #[serde(
        rename = "ansible_facts",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    /// For `present`, an object holding the resource under the fact name of
    /// its kind. For removal, the task descriptor returned by OneView.
    pub facts: Option<Value>,
}

impl ReconcileResult {
    fn new(changed: bool, msg: &str, facts: Option<Value>) -> Self {
        Self {
            changed,
            msg: msg.to_string(),
            facts,
        }
    }

    fn present<R: ManagedResource>(
        changed: bool,
        msg: &str,
        resource: Value,
    ) -> Self {
        let mut facts = Map::new();
        facts.insert(R::FACT_NAME.to_string(), resource);
        Self::new(changed, msg, Some(Value::Object(facts)))
    }

    /// The resource stored under `fact_name`, only exists for `present`.
    pub fn fact(&self, fact_name: &str) -> Option<&Value> {
        self.facts.as_ref().and_then(|f| f.get(fact_name))
    }
}

/// Converge the OneView resource named `desired.name()` to `state`.
///
/// Calls to the client are done in sequence and any failure is returned as
/// is, changes done by previous calls are not reverted.
pub fn reconcile<R, C>(
    client: &mut C,
    state: DesiredState,
    desired: R,
) -> Result<ReconcileResult, OneViewError>
where
    R: ManagedResource,
    C: OneViewClient + ?Sized,
{
    log::debug!(
        "Reconciling {} {} to state {state}",
        R::COLLECTION,
        desired.name()
    );
    match state {
        DesiredState::Present => {
            let current = get_current_for_present(&*client, &desired)?;
            resource_present(client, desired, current)
        }
        DesiredState::Absent => {
            let current =
                get_first_by_name(&*client, R::COLLECTION, desired.name())?;
            resource_absent::<R, C>(client, current)
        }
    }
}

// Once renamed, the resource can only be found by its new name, so search
// that as well to make the rename idempotent.
fn get_current_for_present<R, C>(
    client: &C,
    desired: &R,
) -> Result<Option<Value>, OneViewError>
where
    R: ManagedResource,
    C: OneViewClient + ?Sized,
{
    if let Some(cur) = get_first_by_name(client, R::COLLECTION, desired.name())?
    {
        return Ok(Some(cur));
    }
    match desired.new_name() {
        Some(new_name) if new_name != desired.name() => {
            get_first_by_name(client, R::COLLECTION, new_name)
        }
        _ => Ok(None),
    }
}

fn resource_present<R, C>(
    client: &mut C,
    mut desired: R,
    current: Option<Value>,
) -> Result<ReconcileResult, OneViewError>
where
    R: ManagedResource,
    C: OneViewClient + ?Sized,
{
    let scope_uris = desired.take_scope_uris();
    let desired = desired.resolve_references(&*client)?;
    let payload = gen_payload(&desired)?;
    let msgs = R::MESSAGES;

    let (mut changed, mut msg, resource) = match current {
        None => {
            log::info!("Creating {} {}", R::COLLECTION, desired.name());
            let resource = client.create(R::COLLECTION, &payload)?;
            (true, msgs.created, resource)
        }
        Some(current) => {
            let merged = merge_top_level(&current, payload);
            if is_same_resource(&merged, &current) {
                (false, msgs.already_present, current)
            } else {
                let uri = resource_uri(&current)?;
                log::info!("Updating {} {uri}", R::COLLECTION);
                let resource = client.update(R::COLLECTION, uri, &merged)?;
                (true, msgs.updated, resource)
            }
        }
    };

    let resource = match scope_uris {
        Some(scope_uris) => {
            match resource_scopes_set::<R, C>(
                client,
                &resource,
                &scope_uris,
            )? {
                Some(new_resource) => {
                    changed = true;
                    msg = msgs.updated;
                    new_resource
                }
                None => resource,
            }
        }
        None => resource,
    };
    Ok(ReconcileResult::present::<R>(changed, msg, resource))
}

fn resource_absent<R, C>(
    client: &mut C,
    current: Option<Value>,
) -> Result<ReconcileResult, OneViewError>
where
    R: ManagedResource,
    C: OneViewClient + ?Sized,
{
    match current {
        Some(current) => {
            let uri = resource_uri(&current)?;
            log::info!("Deleting {} {uri}", R::COLLECTION);
            let task = client.delete(R::COLLECTION, uri)?;
            Ok(ReconcileResult::new(true, R::MESSAGES.deleted, Some(task)))
        }
        None => Ok(ReconcileResult::new(
            false,
            R::MESSAGES.already_absent,
            None,
        )),
    }
}

// Return the updated resource if the scopes were changed.
fn resource_scopes_set<R, C>(
    client: &mut C,
    resource: &Value,
    scope_uris: &[String],
) -> Result<Option<Value>, OneViewError>
where
    R: ManagedResource,
    C: OneViewClient + ?Sized,
{
    let desired: HashSet<&str> =
        scope_uris.iter().map(String::as_str).collect();
    let up_to_date = match resource.get(SCOPE_URIS_KEY) {
        Some(Value::Array(cur)) => {
            cur.iter().filter_map(Value::as_str).collect::<HashSet<&str>>()
                == desired
        }
        _ => false,
    };
    if up_to_date {
        return Ok(None);
    }
    let uri = resource_uri(resource)?;
    log::info!("Setting scopes {scope_uris:?} to {} {uri}", R::COLLECTION);
    Ok(Some(client.set_scopes(R::COLLECTION, uri, scope_uris)?))
}

// The payload never holds `scopeUris` or `newName`, the latter has been
// applied as `name` instead.
fn gen_payload<R: ManagedResource>(desired: &R) -> Result<Value, OneViewError> {
    let mut payload = serde_json::to_value(desired)?;
    let obj = match payload.as_object_mut() {
        Some(o) => o,
        None => {
            let e = OneViewError::new(
                ErrorKind::Bug,
                format!("Desired state is not an object: {payload}"),
            );
            log::error!("{}", e);
            return Err(e);
        }
    };
    obj.remove(SCOPE_URIS_KEY);
    if let Some(new_name) = obj.remove(NEW_NAME_KEY) {
        obj.insert("name".to_string(), new_name);
    }
    Ok(payload)
}

// Desired top level properties replace the current ones as a whole.
fn merge_top_level(current: &Value, payload: Value) -> Value {
    let mut merged = current.clone();
    if let (Some(merged_obj), Value::Object(payload_obj)) =
        (merged.as_object_mut(), payload)
    {
        for (key, value) in payload_obj {
            merged_obj.insert(key, value);
        }
    }
    merged
}
