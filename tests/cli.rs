use assert_cmd::Command;
use image::{GenericImageView, Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn copy_over() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("copy-over"))
}

fn resize_images() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("resize-images"))
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn write_png(path: &Path, w: u32, h: u32) {
    RgbImage::from_pixel(w, h, Rgb([10, 120, 250]))
        .save(path)
        .expect("write test image");
}

#[test]
fn copy_over_scenario_prints_counts() {
    let tmp = TempDir::new().unwrap();
    let samples = tmp.path().join("samples");
    let thumbs = tmp.path().join("thumbs");
    fs::create_dir(&samples).unwrap();
    fs::create_dir(&thumbs).unwrap();
    let manifest = tmp.path().join("manifest.json");
    fs::write(
        &manifest,
        r#"[{"folder":"F","models":[{"fileName":"m1.gltf"}]}]"#,
    )
    .unwrap();
    write_png(&samples.join("m1.png"), 4, 4);

    let output = copy_over()
        .arg("--manifest")
        .arg(&manifest)
        .arg("--sourceDir")
        .arg(&samples)
        .arg("--thumbnailsDir")
        .arg(&thumbs)
        .output()
        .expect("copy-over runs");

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(
        lines[0],
        format!(
            "{} --> {}",
            samples.join("m1.png").display(),
            tmp.path().join("F/Figures/SampleImages/m1.png").display()
        )
    );
    assert_eq!(&lines[lines.len() - 2..], ["1", "1"]);
    assert!(tmp.path().join("F/Figures/SampleImages/m1.png").is_file());
    assert!(!tmp.path().join("F/Figures/Thumbnails").exists());
}

#[test]
fn copy_over_rerun_leaves_same_tree() {
    let tmp = TempDir::new().unwrap();
    let samples = tmp.path().join("samples");
    let thumbs = tmp.path().join("thumbs");
    fs::create_dir(&samples).unwrap();
    fs::create_dir(&thumbs).unwrap();
    let manifest = tmp.path().join("manifest.json");
    fs::write(
        &manifest,
        r#"[{"folder":"F","models":[{"fileName":"m1.gltf"},{"fileName":"m2.gltf"}]}]"#,
    )
    .unwrap();
    write_png(&samples.join("m1.png"), 6, 6);
    write_png(&thumbs.join("m1.png"), 2, 2);
    write_png(&thumbs.join("m2.png"), 3, 3);

    let run = || {
        let output = copy_over()
            .arg("--manifest")
            .arg(&manifest)
            .arg("--sourceDir")
            .arg(&samples)
            .arg("--thumbnailsDir")
            .arg(&thumbs)
            .output()
            .expect("copy-over runs");
        assert!(output.status.success());
        let figures = tmp.path().join("F/Figures");
        let copied = ["SampleImages/m1.png", "Thumbnails/m1.png", "Thumbnails/m2.png"];
        let snapshot: Vec<Vec<u8>> = copied
            .iter()
            .map(|rel| fs::read(figures.join(rel)).expect("copied file"))
            .collect();
        (stdout_lines(&output), snapshot)
    };

    let first = run();
    let second = run();

    assert_eq!(first, second);
    assert!(!tmp.path().join("F/Figures/SampleImages/m2.png").exists());
}

#[test]
fn copy_over_rejects_missing_inputs() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("manifest.json");
    fs::write(&manifest, "[]").unwrap();

    let root = tmp.path().to_path_buf();
    let cases = [
        (root.join("absent.json"), root.clone(), root.clone(), "manifest file"),
        (manifest.clone(), root.join("absent"), root.clone(), "image source directory"),
        (manifest.clone(), root.clone(), root.join("absent"), "thumbnails source directory"),
    ];

    for (manifest, source, thumbs, message) in cases {
        let output = copy_over()
            .arg("--manifest")
            .arg(&manifest)
            .arg("--sourceDir")
            .arg(&source)
            .arg("--thumbnailsDir")
            .arg(&thumbs)
            .output()
            .expect("copy-over runs");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(message), "missing {message:?} in: {stderr}");
    }
}

#[test]
fn copy_over_fails_on_malformed_manifest() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("manifest.json");
    fs::write(&manifest, r#"[{"models":[]}]"#).unwrap();

    copy_over()
        .arg("--manifest")
        .arg(&manifest)
        .arg("--sourceDir")
        .arg(tmp.path())
        .arg("--thumbnailsDir")
        .arg(tmp.path())
        .assert()
        .failure();
}

#[test]
fn resize_images_stretches_every_file() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    let out = tmp.path().join("out");
    fs::create_dir(&src).unwrap();
    write_png(&src.join("a.png"), 100, 30);
    write_png(&src.join("b.png"), 7, 50);

    resize_images()
        .arg("--dir")
        .arg(&src)
        .arg("--outputDir")
        .arg(&out)
        .args(["--width", "16", "--height", "12"])
        .assert()
        .success();

    for name in ["a.png", "b.png"] {
        let img = image::open(out.join(name)).unwrap();
        assert_eq!(img.dimensions(), (16, 12));
    }
}

#[test]
fn resize_images_missing_dir_exits_cleanly() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");

    let output = resize_images()
        .arg("--dir")
        .arg(tmp.path().join("absent"))
        .arg("--outputDir")
        .arg(&out)
        .args(["--width", "16", "--height", "12"])
        .output()
        .expect("resize-images runs");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not directory!: "));
    assert!(!out.exists());
}

#[test]
fn resize_images_aborts_on_non_image() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("readme.txt"), "hello").unwrap();

    resize_images()
        .arg("--dir")
        .arg(&src)
        .arg("--outputDir")
        .arg(tmp.path().join("out"))
        .args(["--width", "4", "--height", "4"])
        .assert()
        .failure();
}
