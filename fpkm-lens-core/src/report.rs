use crate::table::{ColumnSummary, GeneTable};

pub fn print_preview(table: &GeneTable, rows: usize) {
    println!("\n✅ File successfully loaded!");
    println!("{}", table.format_preview(rows));
}

fn opt(v: Option<f64>) -> String {
    v.map_or("-".into(), |v| format!("{v:.3}"))
}

pub fn format_column_summary(s: &ColumnSummary) -> Vec<String> {
    vec![
        format!("{:<10} {}", "Column:", s.column),
        format!("{:<10} {}", "Values:", s.count),
        format!("{:<10} {}", "Missing:", s.missing),
        format!("{:<10} {}", "Min:", opt(s.min)),
        format!("{:<10} {}", "Max:", opt(s.max)),
        format!("{:<10} {}", "Mean:", opt(s.mean)),
    ]
}

pub fn print_column_summary(s: &ColumnSummary) {
    println!();
    for line in format_column_summary(s) {
        println!("{line}");
    }
}
