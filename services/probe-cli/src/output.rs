//! Rendering of match records.

use std::io::Write;

use anyhow::Result;
use probe_common::ProbeValue;
use probe_engine::MatchRecord;

/// One probe value as text, numeric values rounded to `decimals` places.
fn render_value(value: &ProbeValue, decimals: usize) -> String {
    match value {
        ProbeValue::Number(v) => format!("{:.*}", decimals, v),
        ProbeValue::Missing => "missing".to_string(),
        ProbeValue::Coded { text, .. } => text.clone(),
        ProbeValue::Undecodable { code, raw } => {
            format!("undecodable({:.0}:{})", code, raw)
        }
    }
}

/// Plain-text rendering, one line per record.
pub fn write_text(out: &mut impl Write, records: &[MatchRecord], decimals: usize) -> Result<()> {
    for record in records {
        let values = record
            .values
            .iter()
            .map(|v| render_value(v, decimals))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "{}[{}] {} ref={} valid={}: {}",
            record.name,
            record.unit,
            record.sector,
            record.ref_time.format("%Y-%m-%dT%H:%M:%SZ"),
            record.valid_time.format("%Y-%m-%dT%H:%M:%SZ"),
            values
        )?;
    }
    Ok(())
}

/// JSON-lines rendering, one record per line.
pub fn write_json(out: &mut impl Write, records: &[MatchRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_rendering() {
        assert_eq!(render_value(&ProbeValue::Number(72.456), 2), "72.46");
        assert_eq!(render_value(&ProbeValue::Number(72.456), 0), "72");
        assert_eq!(render_value(&ProbeValue::Missing, 2), "missing");
        assert_eq!(
            render_value(
                &ProbeValue::Coded {
                    code: 1.0,
                    text: "Hurricane Warning".to_string()
                },
                2
            ),
            "Hurricane Warning"
        );
        assert_eq!(
            render_value(
                &ProbeValue::Undecodable {
                    code: 3.0,
                    raw: "ZZ.Q".to_string()
                },
                2
            ),
            "undecodable(3:ZZ.Q)"
        );
    }
}
