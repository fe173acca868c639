use std::fs;

use brandkit_cli::{build, create_project, render_one, BrandkitConfig, BuildError};
use brandkit_tokens::{Brand, Format, Mode};
use pretty_assertions::assert_eq;

#[test]
fn scaffolded_project_builds_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    create_project(dir.path(), "brand-tokens").unwrap();

    let loaded = BrandkitConfig::load_from_dir(dir.path()).unwrap();
    let report = build(&loaded, &[]).unwrap();

    let dist = dir.path().join("dist");
    let mut written: Vec<String> = report
        .written
        .iter()
        .map(|p| p.strip_prefix(&dist).unwrap().display().to_string())
        .collect();
    written.sort();
    assert_eq!(
        written,
        vec![
            "css/external.dark.css",
            "css/external.light.css",
            "css/internal.dark.css",
            "css/internal.light.css",
            "json/core.json",
            "json/external.dark.json",
            "json/external.light.json",
            "json/internal.dark.json",
            "json/internal.light.json",
            "mui/external.dark.ts",
            "mui/external.light.ts",
            "mui/external.ts",
            "mui/internal.dark.ts",
            "mui/internal.light.ts",
            "mui/internal.ts",
            "tailwind/external.preset.js",
            "tailwind/internal.preset.js",
        ]
    );

    let dark_css = fs::read_to_string(dist.join("css/external.dark.css")).unwrap();
    assert!(dark_css.contains(".dark, [data-theme=\"dark\"] {"));
    assert!(dark_css.contains("--color-primary: var(--palette-primary-80);"));

    let core = fs::read_to_string(dist.join("json/core.json")).unwrap();
    assert!(core.contains("\"spacing\""));
    assert!(!core.contains("\"palette\""));

    let preset = fs::read_to_string(dist.join("tailwind/internal.preset.js")).unwrap();
    assert!(preset.starts_with("/** @type {import('tailwindcss').Config} */\nmodule.exports = {"));
    assert!(preset.contains("\"borderRadius\""));

    let internal_light = fs::read_to_string(dist.join("mui/internal.light.ts")).unwrap();
    assert!(internal_light.contains("      main: '#7c3aed',"));
    // accent stands in for secondary
    assert!(internal_light.contains("      main: '#22d3ee',"));
}

#[test]
fn brand_filter_limits_output() {
    let dir = tempfile::tempdir().unwrap();
    create_project(dir.path(), "brand-tokens").unwrap();
    let loaded = BrandkitConfig::load_from_dir(dir.path()).unwrap();

    let report = build(&loaded, &[Brand::External]).unwrap();
    assert!(report
        .written
        .iter()
        .all(|p| !p.to_string_lossy().contains("internal")));
    assert_eq!(report.written.len(), 9);
}

#[test]
fn render_one_prints_requested_format() {
    let dir = tempfile::tempdir().unwrap();
    create_project(dir.path(), "brand-tokens").unwrap();
    let loaded = BrandkitConfig::load_from_dir(&dir.path().join("brandkit.toml")).unwrap();

    let out = render_one(&loaded, Format::MuiTheme, Brand::External, Mode::Dark).unwrap();
    assert!(out.contains("export const darkThemeOptions"));
    assert!(out.contains("      main: '#6FDBB4',"));
}

#[test]
fn mui_index_only_imports_written_modules() {
    let dir = tempfile::tempdir().unwrap();
    create_project(dir.path(), "brand-tokens").unwrap();
    // A leftover mode list does not narrow the build.
    let config_path = dir.path().join("brandkit.toml");
    let config = fs::read_to_string(&config_path).unwrap();
    assert!(config.contains("[build]\n"));
    fs::write(&config_path, config.replace("[build]\n", "[build]\nmodes = [\"dark\"]\n")).unwrap();
    let loaded = BrandkitConfig::load_from_dir(dir.path()).unwrap();
    build(&loaded, &[Brand::External]).unwrap();

    let mui = dir.path().join("dist/mui");
    let index = fs::read_to_string(mui.join("external.ts")).unwrap();
    let imports: Vec<&str> = index
        .lines()
        .filter_map(|line| line.split("from './").nth(1))
        .filter_map(|rest| rest.strip_suffix(".js';"))
        .collect();
    assert_eq!(imports, vec!["external.light", "external.dark", "external.light"]);
    for module in imports {
        assert!(mui.join(format!("{module}.ts")).is_file(), "{module}.ts was not written");
    }
}

#[test]
fn rendered_preset_matches_built_preset_for_either_mode() {
    let dir = tempfile::tempdir().unwrap();
    create_project(dir.path(), "brand-tokens").unwrap();
    let loaded = BrandkitConfig::load_from_dir(dir.path()).unwrap();
    build(&loaded, &[Brand::External]).unwrap();

    let built = fs::read_to_string(dir.path().join("dist/tailwind/external.preset.js")).unwrap();
    for mode in [Mode::Light, Mode::Dark] {
        let rendered = render_one(&loaded, Format::TailwindPreset, Brand::External, mode).unwrap();
        assert_eq!(rendered, built);
    }
    assert!(built.contains("\"primary\": \"#006C51\""));
    assert!(!built.contains("#6FDBB4"));
}

#[test]
fn missing_config_suggests_init() {
    let dir = tempfile::tempdir().unwrap();
    let err = BrandkitConfig::load_from_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("brandkit init"));
}

#[test]
fn missing_brand_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    create_project(dir.path(), "brand-tokens").unwrap();
    fs::remove_dir_all(dir.path().join("src/tokens/internal")).unwrap();
    let loaded = BrandkitConfig::load_from_dir(dir.path()).unwrap();

    let err = build(&loaded, &[]).unwrap_err();
    match err.downcast_ref::<BuildError>() {
        Some(BuildError::MissingBrand { brand, .. }) => assert_eq!(*brand, Brand::Internal),
        other => panic!("unexpected error: {other:?}"),
    }
}
