use super::client::{emit_class_fields, emit_header, method_doc};
use super::helpers::{emit_doc, ts_string_literal};
use super::plan::{ContractPlan, MethodPlan};
use std::collections::BTreeSet;

/* Impl module: every method goes through one generic invokeMethod */
pub fn emit_impl_module(plan: &ContractPlan) -> String {
  let mut output = emit_header(plan, "generic invoker implementation");
  output.push_str(&emit_imports(plan));
  output.push('\n');

  let class_name = plan.impl_class_name();
  output.push_str(&format!("export class {} {{\n", class_name));
  output.push_str(&emit_class_fields(plan, &class_name));
  output.push('\n');
  output.push_str(
    "  protected invokeMethod<T>(operation: string, args: ContractArg[], decoder: ResultDecoder): Promise<T> {\n",
  );
  output.push_str("    return this.invoker.invoke<T>({ scriptHash: this.scriptHash, operation, args }, decoder);\n");
  output.push_str("  }\n");

  for method in &plan.methods {
    output.push('\n');
    output.push_str(&emit_impl_method(method));
  }

  output.push_str("}\n");
  output
}

fn emit_imports(plan: &ContractPlan) -> String {
  let module = ts_string_literal(&format!("./{}", plan.class_name));
  let mut output = String::new();

  let mut values = Vec::new();
  if plan.methods.iter().any(|m| !m.params.is_empty()) {
    values.push("Encode".to_string());
  }
  if plan.embed_hash && plan.script_hash.is_some() {
    values.push(plan.class_name.clone());
  }
  if !values.is_empty() {
    output.push_str(&format!("import {{ {} }} from {};\n", values.join(", "), module));
  }

  let mut types: BTreeSet<&str> = ["ContractArg", "ContractInvoker", "Hash160", "ResultDecoder"].into_iter().collect();
  types.extend(plan.aliases.iter().copied());
  output.push_str(&format!(
    "import type {{ {} }} from {};\n",
    types.into_iter().collect::<Vec<_>>().join(", "),
    module
  ));
  output
}

fn emit_impl_method(method: &MethodPlan) -> String {
  let result_type = &method.result.type_expr;
  let mut output = emit_doc(&method_doc(method), "  ");
  output.push_str(&format!(
    "  {}({}): Promise<{}> {{\n",
    method.ident,
    method.params_decl(),
    result_type
  ));
  output.push_str(&format!(
    "    return this.invokeMethod<{}>({}, {}, {});\n",
    result_type,
    ts_string_literal(&method.operation),
    method.args_literal(),
    method.result.decode.to_ts()
  ));
  output.push_str("  }\n");
  output
}
