pub mod histogram;
pub mod numbers;
pub mod plot;
pub mod report;
pub mod table;

pub use fpkm_lens_common::{FpkmLensError, Result};
pub use histogram::{build_histogram, histogram_to_json, total_count, HistogramBin};
pub use numbers::{
    analyze, first_repeated_abs, negative_cubes, print_analysis, threshold_sum, NumericAnalysis,
    DEFAULT_NUMBERS, DEFAULT_THRESHOLD,
};
pub use plot::{plot_fpkm_distribution, plot_histogram, DEFAULT_OUTPUT};
pub use report::{print_column_summary, print_preview};
pub use table::{summarize_column, ColumnSummary, GeneTable};
