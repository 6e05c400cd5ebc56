use std::path::Path;

use anyhow::{Context, Result};

use stretchy_core::{
    trace::{replay, HeaderFrame, ReplaySummary, ScrollTrace},
    AppConfig, ContentInset, OutputFormat,
};

pub fn run(config: &AppConfig, trace_path: &Path, format: OutputFormat, summary: bool) -> Result<()> {
    let trace = ScrollTrace::load(trace_path)
        .with_context(|| format!("failed to load trace {}", trace_path.display()))?;
    play(config, &trace, format, summary)
}

pub fn drag(
    config: &AppConfig,
    waypoints: Vec<f64>,
    step: Option<f64>,
    inset: Option<f64>,
    format: OutputFormat,
    summary: bool,
) -> Result<()> {
    let mut trace = ScrollTrace::from_waypoints(waypoints, step);
    trace.content_inset_top = inset;
    play(config, &trace, format, summary)
}

fn play(config: &AppConfig, trace: &ScrollTrace, format: OutputFormat, summary: bool) -> Result<()> {
    let bounds = match trace.bounds {
        Some(bounds) => bounds,
        None => config.header.bounds()?,
    };
    let inset = ContentInset::new(
        trace
            .content_inset_top
            .unwrap_or(config.replay.content_inset_top),
    );
    let samples = trace.samples(config.replay.step)?;

    let frames = replay(bounds, inset, trace.start_offset, &samples);
    let summary = if summary {
        ReplaySummary::from_frames(&frames)
    } else {
        None
    };

    match format {
        OutputFormat::Table => print!("{}", render_table(&frames, summary.as_ref())),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "bounds": bounds,
                "content_inset_top": inset.top,
                "frames": frames,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn render_table(frames: &[HeaderFrame], summary: Option<&ReplaySummary>) -> String {
    if frames.is_empty() {
        return "No scroll changes in trace.\n".to_string();
    }

    let mut out = format!(
        "{:>5}  {:>10}  {:>10}  {:>10}  {:>12}\n",
        "#", "old", "new", "height", "overstretch"
    );
    for frame in frames {
        out.push_str(&format!(
            "{:>5}  {:>10.2}  {:>10.2}  {:>10.2}  {:>12.2}\n",
            frame.index, frame.old_offset, frame.new_offset, frame.height, frame.overstretch_offset
        ));
    }

    if let Some(summary) = summary {
        out.push_str(&format!(
            "\nFrames: {}\n  Height range: {:.2} - {:.2}\n  Deepest overstretch: {:.2}\n  Final: height {:.2}, overstretch {:.2}\n",
            summary.frames,
            summary.min_height,
            summary.max_height,
            summary.deepest_overstretch,
            summary.final_height,
            summary.final_overstretch,
        ));
    }

    out
}
