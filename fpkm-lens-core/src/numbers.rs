use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_NUMBERS: [i32; 9] = [15, -5, -12, 7, 10, -7, 3, -10, 4];
pub const DEFAULT_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericAnalysis {
    pub threshold: u32,
    pub threshold_sum: i64,
    pub negative_cubes: Vec<i128>,
    pub first_repeated_abs: Option<u32>, // None = no repeat
}

/// Sum of the entries whose absolute value is at least `threshold`.
pub fn threshold_sum(numbers: &[i32], threshold: u32) -> i64 {
    numbers
        .iter()
        .filter(|n| n.unsigned_abs() >= threshold)
        .map(|&n| i64::from(n))
        .sum()
}

/// Cubes of the negative entries, in input order.
pub fn negative_cubes(numbers: &[i32]) -> Vec<i128> {
    numbers
        .iter()
        .filter(|&&n| n < 0)
        .map(|&n| i128::from(n).pow(3))
        .collect()
}

/// First absolute value seen twice when scanning left to right.
pub fn first_repeated_abs(numbers: &[i32]) -> Option<u32> {
    let mut seen = HashSet::new();
    numbers
        .iter()
        .map(|n| n.unsigned_abs())
        .find(|&abs| !seen.insert(abs))
}

pub fn analyze(numbers: &[i32], threshold: u32) -> NumericAnalysis {
    NumericAnalysis {
        threshold,
        threshold_sum: threshold_sum(numbers, threshold),
        negative_cubes: negative_cubes(numbers),
        first_repeated_abs: first_repeated_abs(numbers),
    }
}

pub fn format_analysis(a: &NumericAnalysis) -> Vec<String> {
    let cubes = a
        .negative_cubes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let repeat = match a.first_repeated_abs {
        Some(v) => format!("3. First repeated absolute value: {v}"),
        None => "3. No repeats.".to_string(),
    };
    vec![
        format!("1. Sum of numbers with |value| ≥ {}: {}", a.threshold, a.threshold_sum),
        format!("2. Cubes of negative numbers: [{cubes}]"),
        repeat,
    ]
}

pub fn print_analysis(a: &NumericAnalysis) {
    for line in format_analysis(a) {
        println!("{line}");
    }
}
