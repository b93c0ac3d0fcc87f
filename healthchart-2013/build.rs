use hc_survey::stats::YearTable;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("health_2013.json");

    // Pivot the long-format survey export (subdistrict,label,n,percentage)
    // into the nested table the view parses at startup.
    let src = Path::new("../fixtures/health_2013.csv");
    let json = if src.exists() {
        let csv_data = fs::read_to_string(src).expect("Failed to read health_2013.csv");
        let table = YearTable::from_long_csv(&csv_data).expect("Failed to pivot health_2013.csv");
        table.to_json().unwrap()
    } else {
        "{}".to_string()
    };
    fs::write(&dest, json).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/health_2013.csv");
}
