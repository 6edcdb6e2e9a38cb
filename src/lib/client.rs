// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

use crate::{Collection, ErrorKind, OneViewError};

/// The narrow view of a OneView appliance this crate relies on.
///
/// Every operation is a single blocking call. Implementations report any
/// transport, authentication or appliance side failure as
/// [ErrorKind::ExternalError]; callers propagate them untouched without
/// retrying.
pub trait OneViewClient {
    /// Resources of `collection` whose `name` property equals `name`.
    /// An empty vector means nothing matched, it is not an error.
    fn get_by_name(
        &self,
        collection: Collection,
        name: &str,
    ) -> Result<Vec<Value>, OneViewError>;

    fn get_all(&self, collection: Collection)
        -> Result<Vec<Value>, OneViewError>;

    fn get(
        &self,
        collection: Collection,
        uri: &str,
    ) -> Result<Option<Value>, OneViewError>;

    fn create(
        &mut self,
        collection: Collection,
        data: &Value,
    ) -> Result<Value, OneViewError>;

    /// Replace the resource identified by `uri` with `data`.
    fn update(
        &mut self,
        collection: Collection,
        uri: &str,
        data: &Value,
    ) -> Result<Value, OneViewError>;

    /// Returns the task descriptor of the removal.
    fn delete(
        &mut self,
        collection: Collection,
        uri: &str,
    ) -> Result<Value, OneViewError>;

    /// Replace the scope associations of the resource identified by `uri`
    /// with exactly `scope_uris`.
    fn set_scopes(
        &mut self,
        collection: Collection,
        uri: &str,
        scope_uris: &[String],
    ) -> Result<Value, OneViewError>;
}

/// First resource of `collection` named `name`, if any.
pub(crate) fn get_first_by_name<C>(
    client: &C,
    collection: Collection,
    name: &str,
) -> Result<Option<Value>, OneViewError>
where
    C: OneViewClient + ?Sized,
{
    let mut matches = client.get_by_name(collection, name)?;
    log::debug!(
        "Found {} resource(s) named {name:?} in {collection}",
        matches.len()
    );
    Ok(if matches.is_empty() {
        None
    } else {
        Some(matches.swap_remove(0))
    })
}

pub(crate) fn resource_uri(resource: &Value) -> Result<&str, OneViewError> {
    match resource.get("uri").and_then(Value::as_str) {
        Some(uri) => Ok(uri),
        None => {
            let e = OneViewError::new(
                ErrorKind::Bug,
                format!("Resource has no uri property: {resource}"),
            );
            log::error!("{}", e);
            Err(e)
        }
    }
}
