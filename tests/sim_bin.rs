use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "--games", "5", "--seed", "2", "--dump"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 5);
    assert_eq!(v["tooManyShots"], 0);
    assert!(v["average"].as_f64().unwrap() >= 17.0);
    assert_eq!(v["lastGame"]["board"].as_str().unwrap().len(), 100);
}
