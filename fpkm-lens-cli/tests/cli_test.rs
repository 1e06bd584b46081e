use std::process::{Command, Output};

fn fpkm_lens(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fpkm-lens"))
        .args(args)
        .current_dir(dir)
        .env("FPKM_LENS_CONFIG", dir.join("absent.toml"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_genes(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("genes.csv");
    let mut body = String::from("gene_id,fpkm_log2\n");
    for i in 0..30 {
        body.push_str(&format!("G{i},{}\n", i as f64 * 0.25 - 2.0));
    }
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn part_one_runs_before_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = fpkm_lens(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1. Sum of numbers with |value| ≥ 10: 3"));
    assert!(stdout.contains("2. Cubes of negative numbers: [-125, -1728, -343, -1000]"));
    assert!(stdout.contains("3. First repeated absolute value: 7"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--input"));
}

#[test]
fn missing_input_is_reported_and_plot_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let out = fpkm_lens(dir.path(), &["-i", "brca_head500_genes.csv"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(
        "File 'brca_head500_genes.csv' not found. Please check the file name or path."
    ));
    assert!(stderr.contains("Skipping histogram"));
    assert!(!String::from_utf8_lossy(&out.stdout).contains("Histogram saved"));
    assert!(!dir.path().join("fpkm_distribution.png").exists());
}

#[test]
fn default_output_written_and_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_genes(dir.path());
    let input = input.to_str().unwrap();
    for _ in 0..2 {
        let out = fpkm_lens(dir.path(), &["-i", input]);
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("File successfully loaded!"));
        assert!(stdout.contains("[30 rows x 2 columns]"));
        assert!(stdout.contains("Histogram saved as 'fpkm_distribution.png'"));
    }
    assert!(dir.path().join("fpkm_distribution.png").exists());
}

#[test]
fn missing_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genes.csv");
    std::fs::write(&input, "gene_id,fpkm\nA,1.0\n").unwrap();
    let out = fpkm_lens(dir.path(), &["-i", input.to_str().unwrap(), "-o", "x.png"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Column 'fpkm_log2' not found"));
}

#[test]
fn directory_input_names_path_once() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("adir")).unwrap();
    let out = fpkm_lens(dir.path(), &["-i", "adir"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: Cannot read 'adir': "), "{stderr}");
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
    assert!(stderr.contains("Skipping histogram"));
}

#[test]
fn missing_cells_warned_once_without_colour() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genes.csv");
    std::fs::write(&input, "gene_id,fpkm_log2\nA,1.0\nB,NA\nC,2.5\nD\n").unwrap();
    let out = fpkm_lens(dir.path(), &["-i", input.to_str().unwrap(), "-o", "x.png"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("skipped missing cells").count(), 1, "{stderr}");
    assert!(stderr.contains("skipped=2"), "{stderr}");
    assert!(!stderr.contains('\u{1b}'), "{stderr}");
    assert!(String::from_utf8_lossy(&out.stdout).contains("Missing:   2"));
}
