/* Names the client module exports besides the contract class */
pub const PRELUDE_EXPORTS: &[&str] = &[
  "Hash160",
  "Hash256",
  "PublicKey",
  "ContractParamType",
  "ContractArg",
  "ResultDecoder",
  "InvocationDescriptor",
  "ContractInvoker",
  "toHex",
  "Encode",
];

/* Runtime support emitted at the top of every client module */
pub const PRELUDE: &str = r#"/* 0x-prefixed hex strings */
export type Hash160 = string;
export type Hash256 = string;
export type PublicKey = string;

export type ContractParamType =
  | "Any"
  | "Boolean"
  | "Integer"
  | "ByteArray"
  | "String"
  | "Hash160"
  | "Hash256"
  | "PublicKey"
  | "Signature"
  | "Array"
  | "Map"
  | "InteropInterface";

export interface ContractArg {
  type: ContractParamType;
  value: unknown;
}

/* null means the result is not decoded */
export type ResultDecoder =
  | ContractParamType
  | { array: ResultDecoder }
  | { map: [ResultDecoder, ResultDecoder] }
  | null;

export interface InvocationDescriptor {
  scriptHash: Hash160;
  operation: string;
  args: ContractArg[];
}

export interface ContractInvoker {
  invoke<T>(descriptor: InvocationDescriptor, decoder: ResultDecoder): Promise<T>;
}

export function toHex(bytes: Uint8Array): string {
  return Array.from(bytes, (b) => b.toString(16).padStart(2, "0")).join("");
}

export const Encode = {
  integer: (value: bigint): ContractArg => ({ type: "Integer", value: value.toString() }),
  boolean: (value: boolean): ContractArg => ({ type: "Boolean", value }),
  byteArray: (value: Uint8Array): ContractArg => ({ type: "ByteArray", value: toHex(value) }),
  signature: (value: Uint8Array): ContractArg => ({ type: "Signature", value: toHex(value) }),
  string: (value: string): ContractArg => ({ type: "String", value }),
  hash160: (value: Hash160): ContractArg => ({ type: "Hash160", value }),
  hash256: (value: Hash256): ContractArg => ({ type: "Hash256", value }),
  publicKey: (value: PublicKey): ContractArg => ({ type: "PublicKey", value }),
  interop: (value: unknown): ContractArg => ({ type: "InteropInterface", value }),
  any: (value: unknown): ContractArg => ({ type: "Any", value }),
  array: <T>(value: T[], item: (v: T) => ContractArg): ContractArg => ({
    type: "Array",
    value: value.map((v) => item(v)),
  }),
  map: <K, V>(value: Map<K, V>, key: (k: K) => ContractArg, entry: (v: V) => ContractArg): ContractArg => ({
    type: "Map",
    value: Array.from(value, ([k, v]) => ({ key: key(k), value: entry(v) })),
  }),
};
"#;
