/* TypeScript binding generation tests */

use assert_matches::assert_matches;
use binding_gen::codegen::ts_gen::plan::build_plan;
use binding_gen::{EmittedModule, generate, write_modules};
use manifest_loader::manifest_types::{AbiModel, GenerationOptions, ScriptHash};
use manifest_loader::{ManifestDocument, TypePath, TypegenError, TypegenResult, load_model};
use serde_json::json;
use std::path::{Path, PathBuf};

const TOKEN_HASH: &str = "0x1234567890abcdef1234567890abcdef12345678";

fn token_manifest() -> serde_json::Value {
  json!({
    "name": "Token",
    "abi": {
      "methods": [
        {
          "name": "transfer",
          "parameters": [
            { "name": "to", "type": "Hash160" },
            { "name": "amount", "type": "Integer" }
          ],
          "returntype": "Boolean",
          "safe": false
        }
      ]
    }
  })
}

fn sample_token_fixture() -> ManifestDocument {
  let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../manifest_loader/tests/fixtures/sample_token.manifest.json");
  let text = std::fs::read_to_string(path).unwrap();
  ManifestDocument::parse(&text, None).unwrap()
}

fn model_for(body: serde_json::Value, options: &GenerationOptions) -> AbiModel {
  load_model(&ManifestDocument::new(body, None), options).unwrap()
}

/* Load, generate and write in one go, the way the binary does */
fn run_pipeline(body: serde_json::Value, options: &GenerationOptions) -> TypegenResult<Vec<PathBuf>> {
  let model = load_model(&ManifestDocument::new(body, None), options)?;
  let modules = generate(&model, options)?;
  write_modules(&options.output_dir, &modules)
}

fn module<'a>(modules: &'a [EmittedModule], file_name: &str) -> &'a str {
  &modules
    .iter()
    .find(|m| m.file_name == file_name)
    .unwrap_or_else(|| panic!("module {} not emitted", file_name))
    .source_text
}

/* Lines declaring a contract method inside the client class */
fn method_declarations(source: &str) -> Vec<&str> {
  let class_body = &source[source.find("export class ").unwrap()..];
  class_body
    .lines()
    .filter(|line| line.starts_with("  ") && !line.starts_with("   "))
    .filter(|line| line.contains("): Promise<") && line.ends_with(" {"))
    .filter(|line| !line.contains("invokeMethod<T>"))
    .collect()
}

#[test]
fn scenario_a_plain_client() {
  let options = GenerationOptions::default();
  let model = model_for(token_manifest(), &options);
  let modules = generate(&model, &options).unwrap();

  assert_eq!(modules.len(), 1);
  assert_eq!(modules[0].file_name, "Token.ts");

  let client = module(&modules, "Token.ts");
  assert!(client.contains("export class Token {"));
  assert!(client.contains("  transfer(to: Hash160, amount: bigint): Promise<boolean> {"));
  assert!(client.contains("  constructor(invoker: ContractInvoker, scriptHash: Hash160) {"));
  assert!(!client.contains("SCRIPT_HASH"));
  assert!(!client.contains("/* Script hash:"));
  assert!(client.contains(
    "{ scriptHash: this.scriptHash, operation: \"transfer\", args: [Encode.hash160(to), Encode.integer(amount)] },"
  ));
  assert!(client.contains("      \"Boolean\",\n"));
}

#[test]
fn scenario_b_embedded_hash() {
  let options = GenerationOptions {
    hash_override: Some(TOKEN_HASH.parse().unwrap()),
    embed_hash: true,
    ..GenerationOptions::default()
  };
  let model = model_for(token_manifest(), &options);
  let modules = generate(&model, &options).unwrap();
  let client = module(&modules, "Token.ts");

  assert!(client.contains(&format!("  static readonly SCRIPT_HASH: Hash160 = \"{}\";", TOKEN_HASH)));
  assert!(client.contains("  constructor(invoker: ContractInvoker, scriptHash: Hash160 = Token.SCRIPT_HASH) {"));
  assert!(client.contains(&format!("/* Script hash: {} */", TOKEN_HASH)));
}

#[test]
fn known_hash_without_embedding_only_annotates() {
  let options = GenerationOptions {
    hash_override: Some(TOKEN_HASH.parse().unwrap()),
    ..GenerationOptions::default()
  };
  let model = model_for(token_manifest(), &options);
  let client = module(&generate(&model, &options).unwrap(), "Token.ts").to_string();

  assert!(client.contains(&format!("/* Script hash: {} */", TOKEN_HASH)));
  assert!(!client.contains("SCRIPT_HASH"));
}

#[test]
fn scenario_c_impl_module() {
  let options = GenerationOptions {
    generate_impl: true,
    ..GenerationOptions::default()
  };
  let model = model_for(token_manifest(), &options);
  let modules = generate(&model, &options).unwrap();

  assert_eq!(modules.len(), 2);
  let implementation = module(&modules, "TokenImpl.ts");
  assert!(implementation.contains("import { Encode } from \"./Token\";"));
  assert!(implementation.contains(
    "import type { ContractArg, ContractInvoker, Hash160, ResultDecoder } from \"./Token\";"
  ));
  assert!(implementation.contains("export class TokenImpl {"));
  assert!(implementation.contains(
    "  protected invokeMethod<T>(operation: string, args: ContractArg[], decoder: ResultDecoder): Promise<T> {"
  ));
  assert!(implementation.contains(
    "    return this.invokeMethod<boolean>(\"transfer\", [Encode.hash160(to), Encode.integer(amount)], \"Boolean\");"
  ));
}

#[test]
fn impl_module_reuses_embedded_hash() {
  let options = GenerationOptions {
    hash_override: Some(TOKEN_HASH.parse().unwrap()),
    embed_hash: true,
    generate_impl: true,
    ..GenerationOptions::default()
  };
  let model = model_for(token_manifest(), &options);
  let modules = generate(&model, &options).unwrap();
  let implementation = module(&modules, "TokenImpl.ts");

  assert!(implementation.contains("import { Encode, Token } from \"./Token\";"));
  assert!(implementation.contains("  static readonly SCRIPT_HASH: Hash160 = Token.SCRIPT_HASH;"));
  assert!(implementation.contains("scriptHash: Hash160 = TokenImpl.SCRIPT_HASH) {"));
}

#[test]
fn scenario_d_unknown_type_writes_nothing() {
  let dir = tempfile::tempdir().unwrap();
  let options = GenerationOptions {
    output_dir: dir.path().join("contracts"),
    generate_impl: true,
    ..GenerationOptions::default()
  };
  let mut manifest = token_manifest();
  manifest["abi"]["methods"][0]["parameters"][1]["type"] = json!("FooBar");

  let err = run_pipeline(manifest, &options).unwrap_err();
  assert_matches!(
    err,
    TypegenError::UnsupportedType { path: TypePath::Parameter { ref method, index: 1, .. }, ref type_name, .. }
      if method == "transfer" && type_name == "FooBar"
  );
  assert!(!options.output_dir.exists());
}

#[test]
fn pipeline_writes_both_modules() {
  let dir = tempfile::tempdir().unwrap();
  let options = GenerationOptions {
    output_dir: dir.path().join("src/contracts"),
    generate_impl: true,
    ..GenerationOptions::default()
  };

  let written = run_pipeline(token_manifest(), &options).unwrap();
  assert_eq!(
    written,
    vec![options.output_dir.join("Token.ts"), options.output_dir.join("TokenImpl.ts")]
  );
  assert!(written.iter().all(|p| Path::new(p).is_file()));
}

#[test]
fn every_manifest_method_becomes_one_member() {
  let options = GenerationOptions::default();
  let model = load_model(&sample_token_fixture(), &options).unwrap();
  let modules = generate(&model, &options).unwrap();
  let client = module(&modules, "SampleToken.ts");

  let declarations = method_declarations(client);
  assert_eq!(declarations.len(), model.methods.len());
  assert_eq!(
    declarations,
    vec![
      "  symbol(): Promise<string> {",
      "  decimals(): Promise<bigint> {",
      "  totalSupply(): Promise<bigint> {",
      "  balanceOf(account: Hash160): Promise<bigint> {",
      "  transfer(from: Hash160, to: Hash160, amount: bigint, data: unknown): Promise<boolean> {",
    ]
  );
  assert!(client.contains("args: [Encode.hash160(from), Encode.hash160(to), Encode.integer(amount), Encode.any(data)]"));
  assert!(client.contains("   * Safe: does not modify contract state.\n"));
  assert!(client.contains("/* Supported standards: NEP-17 */"));
}

#[test]
fn events_get_payload_interfaces() {
  let options = GenerationOptions::default();
  let model = load_model(&sample_token_fixture(), &options).unwrap();
  let client = module(&generate(&model, &options).unwrap(), "SampleToken.ts").to_string();

  assert!(client.contains("export interface TransferEvent {\n  from: Hash160;\n  to: Hash160;\n  amount: bigint;\n}"));
  assert!(client.contains("export const SampleTokenEvents = {\n  Transfer: \"Transfer\",\n} as const;"));
  /* Events precede the class */
  assert!(client.find("TransferEvent").unwrap() < client.find("export class SampleToken").unwrap());
}

#[test]
fn generation_is_idempotent() {
  let options = GenerationOptions {
    hash_override: Some(TOKEN_HASH.parse().unwrap()),
    embed_hash: true,
    generate_impl: true,
    ..GenerationOptions::default()
  };
  let model = load_model(&sample_token_fixture(), &options).unwrap();
  assert_eq!(generate(&model, &options).unwrap(), generate(&model, &options).unwrap());
}

#[test]
fn client_and_impl_build_identical_descriptors() {
  let options = GenerationOptions {
    generate_impl: true,
    ..GenerationOptions::default()
  };
  let model = load_model(&sample_token_fixture(), &options).unwrap();
  let modules = generate(&model, &options).unwrap();
  let client = module(&modules, "SampleToken.ts");
  let implementation = module(&modules, "SampleTokenImpl.ts");

  let plan = build_plan(&model, &options).unwrap();
  for method in &plan.methods {
    let operation = format!("\"{}\"", method.operation);
    let args = method.args_literal();
    let decoder = method.result.decode.to_ts();
    assert!(client.contains(&format!("operation: {}, args: {} }},\n      {},", operation, args, decoder)));
    assert!(implementation.contains(&format!("({}, {}, {});", operation, args, decoder)));
  }
}

#[test]
fn overloads_resolve_to_distinct_members() {
  let options = GenerationOptions::default();
  let model = model_for(
    json!({
      "name": "Overloaded",
      "abi": {
        "methods": [
          { "name": "transfer", "parameters": [{ "name": "to", "type": "Hash160" }, { "name": "amount", "type": "Integer" }], "returntype": "Boolean" },
          { "name": "transfer", "parameters": [{ "name": "from", "type": "Hash160" }, { "name": "to", "type": "Hash160" }, { "name": "amount", "type": "Integer" }], "returntype": "Boolean" },
          { "name": "reset", "parameters": [], "returntype": "Void" }
        ]
      }
    }),
    &options,
  );
  let client = module(&generate(&model, &options).unwrap(), "Overloaded.ts").to_string();

  assert!(client.contains("  transferWithHash160Integer(to: Hash160, amount: bigint): Promise<boolean> {"));
  assert!(client.contains("  transferWithHash160Hash160Integer(from: Hash160, to: Hash160, amount: bigint): Promise<boolean> {"));
  assert_eq!(client.matches("operation: \"transfer\"").count(), 2);
  assert!(client.contains("  reset(): Promise<void> {"));
  assert!(client.contains("      null,\n"));
}

#[test]
fn containers_map_through_to_signatures() {
  let options = GenerationOptions::default();
  let model = model_for(
    json!({
      "name": "Registry",
      "abi": {
        "methods": [
          {
            "name": "setMany",
            "parameters": [{ "name": "entries", "type": "Map<String,Array<Hash256>>" }],
            "returntype": "Array<PublicKey>"
          }
        ]
      }
    }),
    &options,
  );
  let modules = generate(&model, &options).unwrap();
  let client = module(&modules, "Registry.ts");

  assert!(client.contains("  setMany(entries: Map<string, Hash256[]>): Promise<PublicKey[]> {"));
  assert!(client.contains("args: [Encode.map(entries, Encode.string, (v1) => Encode.array(v1, Encode.hash256))]"));
  assert!(client.contains("      { array: \"PublicKey\" },\n"));
}

#[test]
fn map_with_container_key_is_unsupported() {
  let options = GenerationOptions::default();
  let model = model_for(
    json!({
      "name": "Bad",
      "abi": {
        "methods": [
          { "name": "put", "parameters": [{ "name": "table", "type": "Map<Array<Integer>,String>" }], "returntype": "Void" }
        ]
      }
    }),
    &options,
  );
  let err = generate(&model, &options).unwrap_err();
  assert_matches!(err, TypegenError::UnsupportedType { path: TypePath::Parameter { index: 0, .. }, .. });
}

#[test]
fn void_parameter_is_unsupported() {
  let options = GenerationOptions::default();
  let model = model_for(
    json!({
      "name": "Bad",
      "abi": {
        "methods": [
          { "name": "noop", "parameters": [{ "name": "nothing", "type": "Void" }], "returntype": "Void" }
        ]
      }
    }),
    &options,
  );
  assert_matches!(generate(&model, &options), Err(TypegenError::UnsupportedType { .. }));
}

#[test]
fn invalid_name_override_is_rejected() {
  let options = GenerationOptions {
    name_override: Some("9Token".to_string()),
    ..GenerationOptions::default()
  };
  let model = model_for(token_manifest(), &options);
  assert_matches!(
    generate(&model, &options),
    Err(TypegenError::InvalidIdentifier { ref raw }) if raw == "9Token"
  );
}

#[test]
fn contract_named_after_global_is_suffixed() {
  let options = GenerationOptions {
    generate_impl: true,
    ..GenerationOptions::default()
  };

  for name in ["Promise", "Map", "Array"] {
    let model = model_for(
      json!({
        "name": name,
        "abi": {
          "methods": [
            { "name": "table", "parameters": [{ "name": "m", "type": "Map<String,Integer>" }], "returntype": "Boolean" }
          ]
        }
      }),
      &options,
    );
    let modules = generate(&model, &options).unwrap();
    let class_name = format!("{}_", name);

    let names: Vec<&str> = modules.iter().map(|m| m.file_name.as_str()).collect();
    assert_eq!(names, vec![format!("{}.ts", class_name), format!("{}Impl.ts", class_name)]);

    let client = module(&modules, &format!("{}.ts", class_name));
    assert!(client.contains(&format!("export class {} {{", class_name)));
    assert!(client.contains("  table(m: Map<string, bigint>): Promise<boolean> {"));
  }
}

#[test]
fn global_name_override_is_rejected() {
  let options = GenerationOptions {
    name_override: Some("Promise".to_string()),
    ..GenerationOptions::default()
  };
  let model = model_for(token_manifest(), &options);
  assert_matches!(
    generate(&model, &options),
    Err(TypegenError::InvalidIdentifier { ref raw }) if raw == "Promise"
  );
}

#[test]
fn interop_arguments_keep_their_tag() {
  let options = GenerationOptions::default();
  let model = model_for(
    json!({
      "name": "Iterators",
      "abi": {
        "methods": [
          { "name": "drain", "parameters": [{ "name": "iterator", "type": "InteropInterface" }], "returntype": "InteropInterface" }
        ]
      }
    }),
    &options,
  );
  let modules = generate(&model, &options).unwrap();
  let client = module(&modules, "Iterators.ts");

  assert!(client.contains("interop: (value: unknown): ContractArg => ({ type: \"InteropInterface\", value }),"));
  assert!(client.contains("args: [Encode.interop(iterator)]"));
  assert!(client.contains("      \"InteropInterface\",\n"));
}

#[test]
fn name_override_names_class_and_files() {
  let options = GenerationOptions {
    name_override: Some("MyToken".to_string()),
    generate_impl: true,
    ..GenerationOptions::default()
  };
  let model = model_for(token_manifest(), &options);
  let modules = generate(&model, &options).unwrap();

  let names: Vec<&str> = modules.iter().map(|m| m.file_name.as_str()).collect();
  assert_eq!(names, vec!["MyToken.ts", "MyTokenImpl.ts"]);
  assert!(module(&modules, "MyToken.ts").contains("export class MyToken {"));
  assert!(module(&modules, "MyTokenImpl.ts").contains("from \"./MyToken\";"));
}

#[test]
fn embedding_without_hash_fails() {
  let model = model_for(token_manifest(), &GenerationOptions::default());
  let options = GenerationOptions {
    embed_hash: true,
    ..GenerationOptions::default()
  };
  assert_matches!(generate(&model, &options), Err(TypegenError::MissingHash));
}

#[test]
fn manifest_names_are_sanitized() {
  let options = GenerationOptions::default();
  let hash: ScriptHash = TOKEN_HASH.parse().unwrap();
  let mut model = model_for(
    json!({
      "name": "my-token */ contract",
      "abi": {
        "methods": [
          { "name": "get_owner", "parameters": [{ "name": "token-id", "type": "ByteArray" }], "returntype": "Hash160", "safe": true },
          { "name": "delete", "parameters": [{ "name": "class", "type": "Integer" }], "returntype": "Void" }
        ]
      }
    }),
    &options,
  );
  model.script_hash = Some(hash);

  let client = module(&generate(&model, &options).unwrap(), "MyTokenContract.ts").to_string();
  assert!(client.contains("export class MyTokenContract {"));
  assert!(client.contains("/* Contract: my-token *\\/ contract */"));
  assert!(client.contains("  getOwner(tokenId: Uint8Array): Promise<Hash160> {"));
  assert!(client.contains("operation: \"get_owner\", args: [Encode.byteArray(tokenId)]"));
  assert!(client.contains("  delete_(class_: bigint): Promise<void> {"));
}
