//! Side-by-side read/write latency box plots for two groups of fio jobs.
//!
//! Each panel compares the per-job mean latencies of the baseline and the
//! candidate group. Both panels share one y axis so they can be compared at a
//! glance. Charts are written as PNG files through [`plotters`]' bitmap
//! backend.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;
use common::{
    config::{Labels, PlotConfig, ScaleMode},
    error::{Error, Result},
    stats::{Direction, StatGroup},
    util::{max_of, min_of},
};
use plotters::prelude::*;
use tracing::{debug, info, warn};

const BOX_WIDTH: u32 = 60;
const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

fn render_err(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}

/// Means of `group` in `direction`, or [`Error::EmptyData`] if there are none
fn means(group: &StatGroup, direction: Direction) -> Result<&[f64]> {
    let series = group.series(direction);
    if series.is_empty() {
        return Err(Error::EmptyData {
            group: group.kind(),
            direction,
        });
    }
    Ok(series.means())
}

/// Upper bound of the y axis shared by both panels.
///
/// In [`ScaleMode::Shared`] this is the largest write mean plus the smallest
/// read mean over both groups. [`ScaleMode::Fixed`] uses the largest candidate
/// read mean.
pub fn axis_ceiling(baseline: &StatGroup, candidate: &StatGroup, mode: ScaleMode) -> Result<f64> {
    for group in [baseline, candidate] {
        for direction in [Direction::Read, Direction::Write] {
            means(group, direction)?;
        }
    }

    let ceiling = match mode {
        ScaleMode::Fixed => max_of(means(candidate, Direction::Read)?),
        ScaleMode::Shared => {
            let max_scale = max_of(means(baseline, Direction::Write)?)
                .zip(max_of(means(candidate, Direction::Write)?))
                .map(|(a, b)| a.max(b));
            let min_scale = min_of(means(baseline, Direction::Read)?)
                .zip(min_of(means(candidate, Direction::Read)?))
                .map(|(a, b)| a.min(b));
            max_scale.zip(min_scale).map(|(max, min)| max + min)
        }
    };
    ceiling.ok_or(Error::EmptyData {
        group: candidate.kind(),
        direction: Direction::Read,
    })
}

/// `<output_dir>/<prefix><timestamp>.png`
pub fn output_path(config: &PlotConfig) -> PathBuf {
    let stamp = Local::now().format(TIMESTAMP_FORMAT);
    config
        .output_dir
        .join(format!("{}{stamp}.png", config.prefix))
}

/// Renders both panels and returns the path of the written image
pub fn render(
    baseline: &StatGroup,
    candidate: &StatGroup,
    labels: &Labels,
    config: &PlotConfig,
) -> Result<PathBuf> {
    let ceiling = axis_ceiling(baseline, candidate, config.scale_mode)?;
    let ceiling = if ceiling.is_finite() && ceiling > 0.0 {
        ceiling
    } else {
        warn!("Axis ceiling {ceiling} is unusable, falling back to 1.0");
        1.0
    };
    debug!("Using y axis 0..{ceiling} ({:?})", config.scale_mode);

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)?;
    }
    let path = output_path(config);
    draw(&path, baseline, candidate, labels, config, ceiling as f32)?;
    info!("Wrote latency plot to {}", path.display());
    Ok(path)
}

fn draw(
    path: &Path,
    baseline: &StatGroup,
    candidate: &StatGroup,
    labels: &Labels,
    config: &PlotConfig,
    ceiling: f32,
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let x_axis = [labels.baseline.as_str(), labels.candidate.as_str()];
    let panels = root.split_evenly((1, 2));
    for (panel, direction) in panels.iter().zip([Direction::Read, Direction::Write]) {
        let title = match direction {
            Direction::Read => "Latency for reads",
            Direction::Write => "Latency for writes",
        };
        let mut chart = ChartBuilder::on(panel)
            .caption(title, ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(x_axis[..].into_segmented(), 0f32..ceiling)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(WHITE)
            .y_desc("Latency (µs)")
            .x_label_formatter(&|v| match v {
                SegmentValue::Exact(label) | SegmentValue::CenterOf(label) => label.to_string(),
                SegmentValue::Last => String::new(),
            })
            .label_style(("sans-serif", 20))
            .draw()
            .map_err(render_err)?;

        let baseline_q = Quartiles::new(means(baseline, direction)?);
        let candidate_q = Quartiles::new(means(candidate, direction)?);
        chart
            .draw_series(vec![
                Boxplot::new_vertical(SegmentValue::CenterOf(&x_axis[0]), &baseline_q)
                    .width(BOX_WIDTH)
                    .style(BLUE),
                Boxplot::new_vertical(SegmentValue::CenterOf(&x_axis[1]), &candidate_q)
                    .width(BOX_WIDTH)
                    .style(RED),
            ])
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}
