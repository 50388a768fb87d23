use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "n3-typegen")]
#[command(about = "Generate typed Neo N3 contract bindings")]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).args(["manifest", "node"])))]
pub struct Cli {
    /// Contract manifest JSON file
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// RPC node URL or configured network alias to fetch the manifest from
    #[arg(long, value_name = "URL", requires = "hash")]
    pub node: Option<String>,

    /// Output directory [default: src/contracts]
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Override the contract name from the manifest
    #[arg(long, value_name = "CONTRACT_NAME")]
    pub name: Option<String>,

    /// Contract script hash; required with --node
    #[arg(long, value_name = "SCRIPT_HASH")]
    pub hash: Option<String>,

    /// Embed the contract hash into the client class
    #[arg(long)]
    pub embed_hash: bool,

    /// Also generate an implementation class using a generic invoker
    #[arg(long = "impl")]
    pub generate_impl: bool,

    /// Map unknown manifest types to `unknown` instead of failing
    #[arg(long)]
    pub allow_unknown_types: bool,

    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
