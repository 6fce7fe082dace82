//! The `export` and `analyze` use cases.

use anyhow::Context;
use assetpack_export::{
    ArchiveExporter, ArchiveOptions, ExportDestination, ExportOutcome, FsAssetSource,
    archive_file_name,
};
use assetpack_graph::ResolvedTarget;
use assetpack_settings::{Overrides, ResolvedConfig};
use assetpack_types::ReportEnvelope;
use camino::Utf8Path;
use rayon::prelude::*;
use std::collections::HashMap;
use time::OffsetDateTime;

use crate::report::build_receipt;

/// Input shared by the export and analyze use cases.
#[derive(Clone, Debug)]
pub struct RunInput<'a> {
    /// Project root; asset paths and the output directory are relative to it.
    pub project_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
    /// A graph file, or a directory searched for graph files.
    pub graph: &'a Utf8Path,
    /// Worker threads across targets; 0 or 1 runs sequentially.
    pub jobs: usize,
}

#[derive(Debug)]
pub struct RunOutput {
    /// One outcome per root target, in input order.
    pub outcomes: Vec<ExportOutcome>,
    pub receipt: ReportEnvelope,
    pub resolved_config: ResolvedConfig,
}

/// Analyze every root target and archive the ones that pass.
pub fn run_export(input: RunInput<'_>) -> anyhow::Result<RunOutput> {
    let started_at = OffsetDateTime::now_utc();
    let (resolved, targets) = prepare(&input)?;

    let destination = ExportDestination::new(
        input
            .project_root
            .join(&resolved.export.output_dir),
    );
    let source = FsAssetSource::new(input.project_root);
    let options = ArchiveOptions {
        asset_prefix: resolved.export.asset_prefix.clone(),
        metadata_suffix: resolved.export.metadata_suffix.clone(),
        compression_level: resolved.export.compression_level,
    };
    let exporter = ArchiveExporter::new(&source, &destination, &options);

    let outcomes = map_targets(&targets, input.jobs, |t| {
        let report = assetpack_domain::analyze(&t.target, &t.deps, &resolved.effective);
        if !report.success() {
            tracing::info!(
                target_name = %t.target.name,
                violations = report.violations().len(),
                "analysis failed, not exporting"
            );
            return ExportOutcome::not_exported(report);
        }
        exporter.export(report, &t.deps)
    })?;

    let receipt = build_receipt(&outcomes, started_at, OffsetDateTime::now_utc());
    Ok(RunOutput {
        outcomes,
        receipt,
        resolved_config: resolved,
    })
}

/// Analyze every root target without writing archives.
pub fn run_analyze(input: RunInput<'_>) -> anyhow::Result<RunOutput> {
    let started_at = OffsetDateTime::now_utc();
    let (resolved, targets) = prepare(&input)?;

    let outcomes = map_targets(&targets, input.jobs, |t| {
        ExportOutcome::not_exported(assetpack_domain::analyze(
            &t.target,
            &t.deps,
            &resolved.effective,
        ))
    })?;

    let receipt = build_receipt(&outcomes, started_at, OffsetDateTime::now_utc());
    Ok(RunOutput {
        outcomes,
        receipt,
        resolved_config: resolved,
    })
}

fn prepare(input: &RunInput<'_>) -> anyhow::Result<(ResolvedConfig, Vec<ResolvedTarget>)> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        assetpack_settings::AssetpackConfigV1::default()
    } else {
        assetpack_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = assetpack_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let targets = assetpack_graph::load_targets(input.graph)
        .with_context(|| format!("load dependency graph {}", input.graph))?;
    check_archive_names(&targets)?;
    tracing::debug!(targets = targets.len(), profile = %resolved.effective.profile, "prepared run");

    Ok((resolved, targets))
}

/// Targets share one output directory, so their archive names must not collide.
/// Compared case-insensitively for case-insensitive filesystems.
fn check_archive_names(targets: &[ResolvedTarget]) -> anyhow::Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for t in targets {
        let file_name = archive_file_name(&t.target.name);
        if let Some(first) = seen.insert(file_name.to_lowercase(), t.target.id.as_str()) {
            anyhow::bail!(
                "targets '{first}' and '{}' would both export to {file_name}",
                t.target.id.as_str()
            );
        }
    }
    Ok(())
}

/// Apply `f` to every target, keeping input order regardless of `jobs`.
fn map_targets<T, F>(targets: &[ResolvedTarget], jobs: usize, f: F) -> anyhow::Result<Vec<T>>
where
    T: Send,
    F: Fn(&ResolvedTarget) -> T + Sync + Send,
{
    if jobs <= 1 || targets.len() <= 1 {
        return Ok(targets.iter().map(f).collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("build worker pool")?;
    Ok(pool.install(|| targets.par_iter().map(f).collect()))
}
