//! Batch point-probe CLI.
//!
//! Probes one or more cube index files at the given points and prints a
//! match record per (element, reference time, valid time) hit, as text or
//! JSON lines.

mod config;
mod output;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use element_catalog::{lookup_by_name, ElementId, NameConvention};
use grid_sample::InterpMethod;
use probe_common::{ProbePoint, TimeBound, TimeWindow};
use probe_engine::{run, PointSet, ProbeInput, ProbeQuery};
use wx_codes::TableVersion;

use config::ProbeDefaults;

#[derive(Parser, Debug)]
#[command(name = "probe-cli")]
#[command(about = "Point probes against cube-indexed forecast grids")]
struct Args {
    /// Cube index files to probe
    #[arg(required = true)]
    cubes: Vec<PathBuf>,

    /// Geographic probe point as LAT,LON (repeatable)
    #[arg(short, long = "point", value_name = "LAT,LON")]
    points: Vec<String>,

    /// Grid-cell probe point as COL,ROW (repeatable, 1-based)
    #[arg(long = "cell", value_name = "COL,ROW")]
    cells: Vec<String>,

    /// Probe every cell of each matched grid
    #[arg(long)]
    all_cells: bool,

    /// Comma-separated element names, any naming convention
    /// (default: every element in the cube)
    #[arg(short, long, value_delimiter = ',')]
    elements: Vec<String>,

    /// Valid-time window start, RFC 3339, inclusive
    #[arg(long)]
    begin: Option<String>,

    /// Valid-time window end, RFC 3339, exclusive
    #[arg(long)]
    end: Option<String>,

    /// Interpolation: nearest or bilinear
    #[arg(short, long)]
    interp: Option<String>,

    /// Decimal places for numeric output
    #[arg(long)]
    decimals: Option<usize>,

    /// Emit JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Defaults file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let defaults = match &args.config {
        Some(path) => ProbeDefaults::load(path)?,
        None => ProbeDefaults::default(),
    };

    let points = build_points(&args)?;
    let query = build_query(&args, &defaults, points)?;
    let decimals = args.decimals.unwrap_or(defaults.decimals);

    info!(cubes = args.cubes.len(), "starting probe");
    let inputs: Vec<ProbeInput> = args.cubes.iter().cloned().map(ProbeInput::Cube).collect();
    let records = run(inputs, &query)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        output::write_json(&mut out, &records)?;
    } else {
        output::write_text(&mut out, &records, decimals)?;
    }
    Ok(())
}

/// Parse "A,B" into two floats.
fn parse_pair(text: &str, what: &str) -> Result<(f64, f64)> {
    let (a, b) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("{} must be of the form A,B: {:?}", what, text))?;
    Ok((
        a.trim().parse().with_context(|| format!("bad {}: {:?}", what, text))?,
        b.trim().parse().with_context(|| format!("bad {}: {:?}", what, text))?,
    ))
}

fn build_points(args: &Args) -> Result<PointSet> {
    if args.all_cells {
        if !args.points.is_empty() || !args.cells.is_empty() {
            bail!("--all-cells cannot be combined with --point/--cell");
        }
        return Ok(PointSet::AllCells);
    }
    let mut points = Vec::new();
    for text in &args.points {
        let (lat, lon) = parse_pair(text, "point")?;
        points.push(ProbePoint::geographic(lat, lon));
    }
    for text in &args.cells {
        let (col, row) = parse_pair(text, "cell")?;
        points.push(ProbePoint::cell(col, row));
    }
    if points.is_empty() {
        bail!("no probe points: give --point, --cell, or --all-cells");
    }
    Ok(PointSet::List(points))
}

/// Resolve one element name, trying every naming convention.
fn resolve_element(name: &str) -> Result<ElementId> {
    for convention in [
        NameConvention::FileAbbreviated,
        NameConvention::InternalShort,
        NameConvention::FileStandard,
    ] {
        let id = lookup_by_name(name, convention);
        if id != ElementId::Undefined {
            return Ok(id);
        }
    }
    bail!("unknown element {:?}", name)
}

fn parse_time(text: &str, what: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .with_context(|| format!("bad {} time: {:?}", what, text))
}

fn build_query(args: &Args, defaults: &ProbeDefaults, points: PointSet) -> Result<ProbeQuery> {
    let mut query = ProbeQuery::new(points);

    let names: &[String] = if args.elements.is_empty() {
        &defaults.elements
    } else {
        &args.elements
    };
    query.elements = if names.is_empty() {
        vec![ElementId::MatchAll]
    } else {
        names
            .iter()
            .map(|n| resolve_element(n))
            .collect::<Result<Vec<_>>>()?
    };

    query.window = TimeWindow {
        start: args
            .begin
            .as_deref()
            .map(|t| parse_time(t, "begin").map(TimeBound::inclusive))
            .transpose()?,
        end: args
            .end
            .as_deref()
            .map(|t| parse_time(t, "end").map(TimeBound::exclusive))
            .transpose()?,
    };

    let interp = args.interp.as_deref().unwrap_or(&defaults.interp);
    query.method = match interp.to_lowercase().as_str() {
        "nearest" => InterpMethod::Nearest,
        "bilinear" => InterpMethod::Bilinear,
        other => bail!("unknown interpolation {:?} (nearest or bilinear)", other),
    };
    query.average_partial = defaults.average_partial;

    query.table_version = match defaults.table_version.to_lowercase().as_str() {
        "v1" => TableVersion::V1,
        "v2" => TableVersion::V2,
        other => bail!("unknown table version {:?} (v1 or v2)", other),
    };

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_parsing() {
        assert_eq!(parse_pair("38.99,-77.01", "point").unwrap(), (38.99, -77.01));
        assert_eq!(parse_pair(" 3 , 7 ", "cell").unwrap(), (3.0, 7.0));
        assert!(parse_pair("38.99", "point").is_err());
        assert!(parse_pair("a,b", "point").is_err());
    }

    #[test]
    fn element_names_resolve_across_conventions() {
        assert_eq!(resolve_element("maxt").unwrap(), ElementId::MaxTemp);
        assert_eq!(resolve_element("MaxT").unwrap(), ElementId::MaxTemp);
        assert_eq!(
            resolve_element("maximum-temperature").unwrap(),
            ElementId::MaxTemp
        );
        assert!(resolve_element("bogus").is_err());
    }
}
