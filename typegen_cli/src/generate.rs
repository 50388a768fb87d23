use crate::cli::Cli;
use binding_gen::{generate, write_modules};
use manifest_loader::{
    load_model, CompositeFetcher, ManifestDocument, ManifestSource, TypegenConfig, TypegenError, TypegenResult,
};
use manifest_types::{GenerationOptions, ScriptHash, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use tracing::debug;

/* Fetch, load, generate and write; returns the written paths */
pub async fn run(cli: &Cli) -> anyhow::Result<Vec<PathBuf>> {
    let config = match &cli.config {
        Some(path) => TypegenConfig::load(path)?,
        None => TypegenConfig::default(),
    };
    let options = build_options(cli, &config)?;
    let source = manifest_source(cli, &options)?;

    let fetcher = CompositeFetcher::new(&config.rpc).map_err(TypegenError::from)?;
    let fetched = fetcher.fetch(&source).await.map_err(TypegenError::from)?;
    debug!("fetched manifest from {}", fetched.canonical_location);

    let document = ManifestDocument::parse(&fetched.content, fetched.script_hash)?;
    let model = load_model(&document, &options)?;
    let modules = generate(&model, &options)?;

    Ok(write_modules(&options.output_dir, &modules)?)
}

/* CLI flags override the config file */
fn build_options(cli: &Cli, config: &TypegenConfig) -> TypegenResult<GenerationOptions> {
    let output_dir = cli
        .out
        .clone()
        .or_else(|| config.out.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let hash_override = cli.hash.as_deref().map(parse_hash).transpose()?;

    Ok(GenerationOptions {
        output_dir,
        name_override: cli.name.clone(),
        hash_override,
        embed_hash: cli.embed_hash,
        generate_impl: cli.generate_impl,
        allow_unknown_types: cli.allow_unknown_types,
    })
}

fn manifest_source(cli: &Cli, options: &GenerationOptions) -> anyhow::Result<ManifestSource> {
    match (&cli.manifest, &cli.node, options.hash_override) {
        (Some(path), _, _) => Ok(ManifestSource::File { path: path.clone() }),
        (None, Some(url), Some(hash)) => Ok(ManifestSource::Node {
            url: url.clone(),
            hash,
        }),
        (None, Some(_), None) => anyhow::bail!("--node requires --hash to locate the contract"),
        (None, None, _) => anyhow::bail!("Provide either --manifest <path> or --node <url>"),
    }
}

fn parse_hash(raw: &str) -> TypegenResult<ScriptHash> {
    raw.parse().map_err(|e: manifest_types::ScriptHashError| TypegenError::InvalidHash {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
