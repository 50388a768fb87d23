use super::names::{IdentifierKind, resolve_identifier, resolve_method_names, resolve_parameter_names};
use super::prelude::PRELUDE_EXPORTS;
use super::types::{MappedType, collect_aliases, encode_expr, map_type};
use manifest_loader::{TypePath, TypegenError, TypegenResult};
use manifest_types::{AbiModel, AbiType, GenerationOptions, Parameter, ScriptHash};
use std::collections::{BTreeSet, HashSet};

/* Everything the renderers need, resolved once so client and impl agree */
#[derive(Debug, Clone)]
pub struct ContractPlan {
  pub class_name: String,
  pub manifest_name: String,
  pub script_hash: Option<ScriptHash>,
  pub embed_hash: bool,
  pub supported_standards: Vec<String>,
  pub methods: Vec<MethodPlan>,
  pub events: Vec<EventPlan>,
  /* Hash aliases referenced by method signatures */
  pub aliases: BTreeSet<&'static str>,
}

impl ContractPlan {
  pub fn impl_class_name(&self) -> String {
    format!("{}Impl", self.class_name)
  }

  pub fn events_table_name(&self) -> String {
    format!("{}Events", self.class_name)
  }
}

#[derive(Debug, Clone)]
pub struct MethodPlan {
  pub ident: String,
  /* Manifest method name sent as the operation */
  pub operation: String,
  pub signature: String,
  pub safe: bool,
  pub offset: Option<u32>,
  pub params: Vec<ParamPlan>,
  pub result: MappedType,
}

impl MethodPlan {
  /* `to: Hash160, amount: bigint` */
  pub fn params_decl(&self) -> String {
    self
      .params
      .iter()
      .map(|p| format!("{}: {}", p.ident, p.mapped.type_expr))
      .collect::<Vec<_>>()
      .join(", ")
  }

  /* Ordered argument encoding shared by both emission strategies */
  pub fn args_literal(&self) -> String {
    let args: Vec<String> = self.params.iter().map(|p| encode_expr(&p.ty, &p.ident)).collect();
    format!("[{}]", args.join(", "))
  }
}

#[derive(Debug, Clone)]
pub struct ParamPlan {
  pub ident: String,
  pub ty: AbiType,
  pub mapped: MappedType,
}

#[derive(Debug, Clone)]
pub struct EventPlan {
  pub interface_name: String,
  pub key: String,
  pub raw_name: String,
  pub fields: Vec<ParamPlan>,
}

pub fn build_plan(model: &AbiModel, options: &GenerationOptions) -> TypegenResult<ContractPlan> {
  let class_name = resolve_identifier(
    &model.contract_name,
    IdentifierKind::Contract,
    options.name_override.as_deref(),
  )?;

  let method_names = resolve_method_names(&model.methods)?;
  let mut aliases = BTreeSet::new();

  let mut methods = Vec::with_capacity(model.methods.len());
  for (method, ident) in model.methods.iter().zip(method_names) {
    let params = plan_params(&method.parameters, |index, name| TypePath::Parameter {
      method: method.name.clone(),
      index,
      name: name.to_string(),
    })?;

    let result = map_type(&method.return_type).map_err(|e| {
      e.at(TypePath::ReturnValue {
        method: method.name.clone(),
      })
    })?;

    for param in &params {
      collect_aliases(&param.ty, &mut aliases);
    }
    collect_aliases(&method.return_type, &mut aliases);

    methods.push(MethodPlan {
      ident,
      operation: method.name.clone(),
      signature: method.signature(),
      safe: method.safe,
      offset: method.offset,
      params,
      result,
    });
  }

  /* Event interfaces share the module namespace with the prelude and the classes */
  let mut taken: HashSet<String> = PRELUDE_EXPORTS.iter().map(|s| s.to_string()).collect();
  taken.insert(class_name.clone());
  taken.insert(format!("{}Impl", class_name));
  taken.insert(format!("{}Events", class_name));

  let mut events = Vec::with_capacity(model.events.len());
  for event in &model.events {
    let key = resolve_identifier(&event.name, IdentifierKind::Contract, None)?;
    let mut interface_name = format!("{}Event", key);
    while taken.contains(&interface_name) {
      interface_name.push('_');
    }
    taken.insert(interface_name.clone());

    let fields = plan_params(&event.parameters, |index, name| TypePath::EventParameter {
      event: event.name.clone(),
      index,
      name: name.to_string(),
    })?;

    events.push(EventPlan {
      key,
      interface_name,
      raw_name: event.name.clone(),
      fields,
    });
  }
  dedupe_event_keys(&mut events);

  Ok(ContractPlan {
    class_name,
    manifest_name: model.contract_name.clone(),
    script_hash: model.script_hash,
    embed_hash: options.embed_hash,
    supported_standards: model.supported_standards.clone(),
    methods,
    events,
    aliases,
  })
}

fn plan_params(
  parameters: &[Parameter],
  path_for: impl Fn(usize, &str) -> TypePath,
) -> TypegenResult<Vec<ParamPlan>> {
  let idents = resolve_parameter_names(parameters.iter().map(|p| p.name.as_str()))?;

  parameters
    .iter()
    .zip(idents)
    .map(|(param, ident)| {
      if param.ty == AbiType::Void {
        return Err(TypegenError::UnsupportedType {
          path: path_for(param.position, &param.name),
          type_name: param.ty.to_string(),
          reason: "Void is not a value type".to_string(),
        });
      }
      let mapped = map_type(&param.ty).map_err(|e| e.at(path_for(param.position, &param.name)))?;
      Ok(ParamPlan {
        ident,
        ty: param.ty.clone(),
        mapped,
      })
    })
    .collect()
}

/* Two events resolving to the same key keep distinct table entries */
fn dedupe_event_keys(events: &mut [EventPlan]) {
  let mut taken: HashSet<String> = HashSet::new();
  for event in events.iter_mut() {
    let base = event.key.clone();
    let mut n = 2;
    while taken.contains(&event.key) {
      event.key = format!("{}_{}", base, n);
      n += 1;
    }
    taken.insert(event.key.clone());
  }
}
