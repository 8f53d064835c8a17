use std::process::Command;

fn run_sim(seed: &str) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg(seed)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim("7");
    assert_eq!(v["seed"], 7);
    assert_eq!(v["all_sunk"], true);
    assert_eq!(v["tally"]["sunk"], 5);
    assert_eq!(v["tally"]["hits"], 12);
    assert_eq!(v["ships"].as_array().unwrap().len(), 5);
    let misses = v["tally"]["misses"].as_u64().unwrap();
    assert_eq!(v["score_cells_lit"].as_u64().unwrap(), misses.min(44));
}

#[test]
fn sim_is_reproducible() {
    assert_eq!(run_sim("99"), run_sim("99"));
}

#[test]
fn sim_rejects_missing_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
