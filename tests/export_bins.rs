use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn orbit_track_writes_csv_to_stdout() {
    let mut cmd = Command::cargo_bin("orbit_track").expect("binary");
    cmd.args([
        "--bodies",
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/bodies/planets.yaml"),
        "--body",
        "Earth",
        "--samples",
        "12",
        "--output",
        "-",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("body,sample,t_seconds,x_au,y_au,z_au"))
        .stdout(predicate::str::contains("Earth,0,"))
        .stdout(predicate::str::contains("Earth,11,"));
}

#[test]
fn orbit_track_writes_files_and_orbit_plot_renders_them() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("tracks.csv");
    let png_path = dir.path().join("orbits.png");

    Command::cargo_bin("orbit_track")
        .expect("binary")
        .args([
            "--bodies",
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/bodies/planets.yaml"),
            "--body",
            "Earth",
            "--body",
            "Mars",
            "--samples",
            "60",
            "--output",
        ])
        .arg(&csv_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&csv_path).expect("csv written");
    assert!(contents.lines().count() > 120, "expected both tracks");

    Command::cargo_bin("orbit_plot")
        .expect("binary")
        .arg("--input")
        .arg(&csv_path)
        .arg("--output")
        .arg(&png_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[saved]"));

    assert!(png_path.exists());
}

#[test]
fn orbit_track_rejects_unknown_bodies() {
    Command::cargo_bin("orbit_track")
        .expect("binary")
        .args([
            "--bodies",
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/bodies/planets.yaml"),
            "--body",
            "Vulcan",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));
}
