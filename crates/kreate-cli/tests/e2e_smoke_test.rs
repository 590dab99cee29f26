use std::fs;

use log::LevelFilter;
use tempfile::tempdir;

use kreate::KreateError;
use kreate_cli::Args;

fn args() -> Args {
    Args {
        shorthand: None,
        count: None,
        format: None,
        request: None,
        output: None,
        config: None,
        strict: false,
        log_level: LevelFilter::Off,
    }
}

#[test]
fn e2e_shorthand_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("rows.html");

    let cfg = Args {
        shorthand: Some("li#row.item".to_string()),
        count: Some(3),
        format: Some("array".to_string()),
        output: Some(output_path.to_string_lossy().to_string()),
        ..args()
    };

    kreate_cli::run(&cfg).expect("run should succeed");

    let written = fs::read_to_string(&output_path).expect("output file");
    assert_eq!(
        written,
        concat!(
            "<li class=\"item\" id=\"row-1\"></li>\n",
            "<li class=\"item\" id=\"row-2\"></li>\n",
            "<li class=\"item\" id=\"row-3\"></li>\n",
        )
    );
}

#[test]
fn e2e_request_file_with_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let request_path = temp_dir.path().join("request.toml");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("out.html");

    fs::write(
        &request_path,
        r#"
        id = "cell"
        length = 2
        text = "a < b"

        [attr]
        data-col = 1
        "#,
    )
    .expect("write request");
    fs::write(
        &config_path,
        r#"
        [defaults]
        tag = "td"
        output = "html"
        start_id = 0
        "#,
    )
    .expect("write config");

    let cfg = Args {
        request: Some(request_path.to_string_lossy().to_string()),
        config: Some(config_path.to_string_lossy().to_string()),
        output: Some(output_path.to_string_lossy().to_string()),
        ..args()
    };

    kreate_cli::run(&cfg).expect("run should succeed");

    let written = fs::read_to_string(&output_path).expect("output file");
    assert_eq!(
        written,
        "<td id=\"cell-0\" data-col=\"1\">a &lt; b</td><td id=\"cell-1\" data-col=\"1\">a &lt; b</td>\n"
    );
}

#[test]
fn e2e_strict_rejects_malformed_shorthand() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("never.html");

    let cfg = Args {
        shorthand: Some("div#a#b".to_string()),
        output: Some(output_path.to_string_lossy().to_string()),
        strict: true,
        ..args()
    };

    let err = kreate_cli::run(&cfg).expect_err("strict mode must reject");
    assert!(matches!(err, KreateError::Parse { .. }));
    assert!(!output_path.exists());

    // The same shorthand is normalized without --strict.
    let cfg = Args {
        strict: false,
        ..cfg
    };
    kreate_cli::run(&cfg).expect("lenient run should succeed");
    assert_eq!(
        fs::read_to_string(&output_path).expect("output file"),
        "<div id=\"a\"></div>\n"
    );
}

#[test]
fn e2e_missing_config_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let cfg = Args {
        config: Some(temp_dir.path().join("missing.toml").to_string_lossy().to_string()),
        output: Some(temp_dir.path().join("out.html").to_string_lossy().to_string()),
        ..args()
    };

    let err = kreate_cli::run(&cfg).expect_err("missing config");
    assert!(matches!(err, KreateError::Config(_)));
}
