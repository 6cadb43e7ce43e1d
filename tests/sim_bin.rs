#![cfg(feature = "std")]

use std::process::Command;

fn run(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .args(args)
        .env("SEABATTLE_LOG", "off")
        .output()
        .expect("failed to run seabattle binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run(&["sim", "--seed", "7"]);
    assert_eq!(v["status"], "Won");
    assert_eq!(v["ships_sunk"], 10);
    assert!(v["shots_fired"].as_u64().unwrap() <= 100);
    assert!(v["cells_recorded"].as_u64().unwrap() <= 100);
}

#[test]
fn fleet_json_is_reproducible() {
    let a = run(&["fleet", "--seed", "3", "--json"]);
    let b = run(&["fleet", "--seed", "3", "--json"]);
    assert_eq!(a, b);
    let ships = a.as_array().unwrap();
    assert_eq!(ships.len(), 10);
    let cells: u64 = ships.iter().map(|s| s["size"].as_u64().unwrap()).sum();
    assert_eq!(cells, 20);
}
