use crate::histogram::{build_histogram, HistogramBin};
use crate::table::GeneTable;
use fpkm_lens_common::{FpkmLensError, PlotConfig, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

pub const TITLE: &str = "Distribution of gene expression";
pub const X_LABEL: &str = "Expression";
pub const Y_LABEL: &str = "Number of genes";
pub const DEFAULT_OUTPUT: &str = "fpkm_distribution.png";

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Renders `bins` as a bar histogram; overwrites `output_path`.
/// `.svg` goes through the SVG backend, anything else through the bitmap
/// encoder, which picks the format from the extension.
pub fn plot_histogram(bins: &[HistogramBin], output_path: &Path, cfg: &PlotConfig) -> Result<()> {
    if bins.is_empty() {
        return Err(FpkmLensError::Plot("no bins to draw".into()));
    }
    let size = (cfg.width, cfg.height);
    let plot_err = |e: String| FpkmLensError::Plot(format!("{}: {e}", output_path.display()));
    if is_svg(output_path) {
        draw_bars(SVGBackend::new(output_path, size).into_drawing_area(), bins)
            .map_err(|e| plot_err(e.to_string()))?;
    } else {
        draw_bars(BitMapBackend::new(output_path, size).into_drawing_area(), bins)
            .map_err(|e| plot_err(e.to_string()))?;
    }
    debug!(path = %output_path.display(), bins = bins.len(), "histogram rendered");
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    bins: &[HistogramBin],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let x_min = bins[0].range_start;
    let x_max = bins[bins.len() - 1].range_end;
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    let y_top = max_count + max_count / 10 + 1;

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0u64..y_top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(10)
        .x_label_formatter(&|x| format!("{x:.1}"))
        .draw()?;

    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.range_start, 0), (b.range_end, b.count)], SKY_BLUE.filled())
    }))?;
    // edges drawn separately so the fill never covers them
    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.range_start, 0), (b.range_end, b.count)], BLACK.stroke_width(1))
    }))?;

    root.present()?;
    Ok(())
}

/// Bins the configured expression column and writes the chart.
pub fn plot_fpkm_distribution(
    table: &GeneTable,
    output_path: &Path,
    cfg: &PlotConfig,
) -> Result<Vec<HistogramBin>> {
    let values = table.numeric_column(&cfg.column)?;
    let bins = build_histogram(&values, cfg.bins);
    plot_histogram(&bins, output_path, cfg)?;
    Ok(bins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_detection() {
        assert!(is_svg(Path::new("out.svg")));
        assert!(is_svg(Path::new("dir/OUT.SVG")));
        assert!(!is_svg(Path::new("fpkm_distribution.png")));
        assert!(!is_svg(Path::new("noext")));
    }

    #[test]
    fn empty_bins_rejected() {
        let err = plot_histogram(&[], Path::new("x.png"), &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, FpkmLensError::Plot(_)));
    }
}
