//! Manifest Model Loader
//!
//! Validates a raw manifest document and normalizes it into an `AbiModel`.
//! Name and hash overrides are applied here so every later stage sees the
//! final values; nothing downstream re-validates the document shape.

use crate::document::{ManifestDocument, RawEvent, RawManifest, RawMethod, RawParameter};
use crate::errors::{TypePath, TypegenError, TypegenResult};
use manifest_types::{AbiModel, AbiType, Event, GenerationOptions, Method, Parameter, TypeParseError};
use serde::Deserialize;
use tracing::{debug, warn};

/* Build the ABI model for one generation run */
pub fn load_model(document: &ManifestDocument, options: &GenerationOptions) -> TypegenResult<AbiModel> {
    if !document.body.is_object() {
        return Err(malformed("manifest", "expected a JSON object"));
    }

    let raw = RawManifest::deserialize(&document.body)
        .map_err(|e| malformed("manifest", e.to_string()))?;

    let contract_name = match &options.name_override {
        Some(name) => name.clone(),
        None if raw.name.trim().is_empty() => {
            return Err(malformed("name", "contract name is empty"));
        }
        None => raw.name.clone(),
    };

    /* An explicit --hash wins over the hash the node was queried with */
    let script_hash = options.hash_override.or(document.source_hash);
    if options.embed_hash && script_hash.is_none() {
        return Err(TypegenError::MissingHash);
    }

    let methods = raw
        .abi
        .methods
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let location = format!("abi.methods[{}]", index);
            let method = RawMethod::deserialize(value).map_err(|e| malformed(&location, e.to_string()))?;
            load_method(method, &location, options)
        })
        .collect::<TypegenResult<Vec<_>>>()?;

    let events = raw
        .abi
        .events
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let location = format!("abi.events[{}]", index);
            let event = RawEvent::deserialize(value).map_err(|e| malformed(&location, e.to_string()))?;
            load_event(event, &location, options)
        })
        .collect::<TypegenResult<Vec<_>>>()?;

    let model = AbiModel {
        contract_name,
        script_hash,
        supported_standards: raw.supported_standards,
        methods,
        events,
    };

    debug!(
        "loaded manifest '{}': {} method(s) ({} safe), {} event(s), script hash {}",
        model.contract_name,
        model.methods.len(),
        model.safe_methods().count(),
        model.events.len(),
        model.script_hash.map(|h| h.to_string()).unwrap_or_else(|| "<none>".to_string())
    );

    Ok(model)
}

fn load_method(raw: RawMethod, location: &str, options: &GenerationOptions) -> TypegenResult<Method> {
    if raw.name.trim().is_empty() {
        return Err(malformed(location, "method name is empty"));
    }

    let parameters = load_parameters(&raw.parameters, options, |index, name| TypePath::Parameter {
        method: raw.name.clone(),
        index,
        name: name.to_string(),
    })?;

    let return_type = resolve_type(
        &raw.return_type,
        TypePath::ReturnValue { method: raw.name.clone() },
        options,
    )?;

    Ok(Method {
        name: raw.name,
        parameters,
        return_type,
        safe: raw.safe,
        offset: raw.offset,
    })
}

fn load_event(raw: RawEvent, location: &str, options: &GenerationOptions) -> TypegenResult<Event> {
    if raw.name.trim().is_empty() {
        return Err(malformed(location, "event name is empty"));
    }

    let parameters = load_parameters(&raw.parameters, options, |index, name| TypePath::EventParameter {
        event: raw.name.clone(),
        index,
        name: name.to_string(),
    })?;

    Ok(Event { name: raw.name, parameters })
}

fn load_parameters(
    raw: &[RawParameter],
    options: &GenerationOptions,
    path_for: impl Fn(usize, &str) -> TypePath,
) -> TypegenResult<Vec<Parameter>> {
    raw.iter()
        .enumerate()
        .map(|(position, param)| {
            let ty = resolve_type(&param.type_name, path_for(position, &param.name), options)?;
            Ok(Parameter {
                name: param.name.clone(),
                ty,
                position,
            })
        })
        .collect()
}

/* Parse a type descriptor, applying the unknown-type policy */
fn resolve_type(raw: &str, path: TypePath, options: &GenerationOptions) -> TypegenResult<AbiType> {
    match AbiType::parse(raw) {
        Ok(ty) => Ok(ty),
        Err(TypeParseError::Unknown { name }) if options.allow_unknown_types => {
            warn!("{}: unknown type '{}' mapped to Any", path, name);
            Ok(AbiType::Any)
        }
        Err(TypeParseError::Unknown { name }) => Err(TypegenError::UnsupportedType {
            path,
            type_name: raw.to_string(),
            reason: format!("unknown type name '{}'", name),
        }),
        Err(TypeParseError::Malformed { reason }) => Err(TypegenError::MalformedType {
            path,
            raw: raw.to_string(),
            reason,
        }),
    }
}

fn malformed(location: &str, reason: impl Into<String>) -> TypegenError {
    TypegenError::MalformedManifest {
        location: location.to_string(),
        reason: reason.into(),
    }
}
