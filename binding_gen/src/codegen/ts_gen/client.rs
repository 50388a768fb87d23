use super::helpers::{emit_doc, sanitize_comment, ts_string_literal};
use super::plan::{ContractPlan, EventPlan, MethodPlan};
use super::prelude::PRELUDE;

pub const TOOL_NAME: &str = "n3-typegen";

/* Header comment shared by both modules */
pub fn emit_header(plan: &ContractPlan, description: &str) -> String {
  let mut output = String::new();
  output.push_str(&format!("/* Auto-generated by {}: {} */\n", TOOL_NAME, description));
  output.push_str("/* WARNING: Do not modify this file directly. It is generated from the contract manifest. */\n");
  output.push_str(&format!("/* Contract: {} */\n", sanitize_comment(&plan.manifest_name)));
  if !plan.supported_standards.is_empty() {
    output.push_str(&format!(
      "/* Supported standards: {} */\n",
      sanitize_comment(&plan.supported_standards.join(", "))
    ));
  }
  if let Some(hash) = &plan.script_hash {
    output.push_str(&format!("/* Script hash: {} */\n", hash));
  }
  output.push('\n');
  output
}

/* Typed client module: header, prelude, events, client class */
pub fn emit_client_module(plan: &ContractPlan) -> String {
  let mut output = emit_header(plan, "typed contract client");
  output.push_str(PRELUDE);

  if !plan.events.is_empty() {
    output.push('\n');
    output.push_str(&emit_events(plan));
  }

  output.push('\n');
  output.push_str(&format!("export class {} {{\n", plan.class_name));
  output.push_str(&emit_class_fields(plan, &plan.class_name));

  for method in &plan.methods {
    output.push('\n');
    output.push_str(&emit_client_method(method));
  }

  output.push_str("}\n");
  output
}

/* Static hash, invoker/scriptHash fields and constructor of `class_name` */
pub fn emit_class_fields(plan: &ContractPlan, class_name: &str) -> String {
  let mut output = String::new();
  let mut hash_param = "scriptHash: Hash160".to_string();

  if plan.embed_hash {
    if let Some(hash) = &plan.script_hash {
      /* The impl class reuses the client's constant */
      let value = if class_name == plan.class_name {
        ts_string_literal(&hash.to_string())
      } else {
        format!("{}.SCRIPT_HASH", plan.class_name)
      };
      output.push_str(&format!("  static readonly SCRIPT_HASH: Hash160 = {};\n\n", value));
      hash_param = format!("scriptHash: Hash160 = {}.SCRIPT_HASH", class_name);
    }
  }

  output.push_str("  private readonly invoker: ContractInvoker;\n");
  output.push_str("  readonly scriptHash: Hash160;\n\n");
  output.push_str(&format!("  constructor(invoker: ContractInvoker, {}) {{\n", hash_param));
  output.push_str("    this.invoker = invoker;\n");
  output.push_str("    this.scriptHash = scriptHash;\n");
  output.push_str("  }\n");
  output
}

/* Doc block for a generated method */
pub fn method_doc(method: &MethodPlan) -> Vec<String> {
  let mut lines = vec![method.signature.clone()];
  if method.safe {
    lines.push("Safe: does not modify contract state.".to_string());
  }
  if let Some(offset) = method.offset {
    lines.push(format!("Script offset: {}", offset));
  }
  lines
}

fn emit_client_method(method: &MethodPlan) -> String {
  let result_type = &method.result.type_expr;
  let mut output = emit_doc(&method_doc(method), "  ");
  output.push_str(&format!(
    "  {}({}): Promise<{}> {{\n",
    method.ident,
    method.params_decl(),
    result_type
  ));
  output.push_str(&format!("    return this.invoker.invoke<{}>(\n", result_type));
  output.push_str(&format!(
    "      {{ scriptHash: this.scriptHash, operation: {}, args: {} }},\n",
    ts_string_literal(&method.operation),
    method.args_literal()
  ));
  output.push_str(&format!("      {},\n", method.result.decode.to_ts()));
  output.push_str("    );\n");
  output.push_str("  }\n");
  output
}

fn emit_events(plan: &ContractPlan) -> String {
  let mut output = String::new();

  for event in &plan.events {
    output.push_str(&emit_event_interface(event));
    output.push('\n');
  }

  output.push_str(&format!("export const {} = {{\n", plan.events_table_name()));
  for event in &plan.events {
    output.push_str(&format!("  {}: {},\n", event.key, ts_string_literal(&event.raw_name)));
  }
  output.push_str("} as const;\n");
  output
}

fn emit_event_interface(event: &EventPlan) -> String {
  let mut output = emit_doc(&[format!("Payload of the '{}' event", event.raw_name)], "");
  output.push_str(&format!("export interface {} {{\n", event.interface_name));
  for field in &event.fields {
    output.push_str(&format!("  {}: {};\n", field.ident, field.mapped.type_expr));
  }
  output.push_str("}\n");
  output
}
