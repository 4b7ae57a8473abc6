// ABOUTME: Tests for template source selection and loading
// ABOUTME: Uses a mock HTTP server for remote templates and temp dirs for template directories

use gqlbind_cli::config::GeneratorConfig;
use gqlbind_cli::render::{Renderer, TemplateSource};
use mockito::Server;
use tempfile::TempDir;

fn context() -> liquid::Object {
    liquid::object!({
        "package_name": "cloud",
        "types": { "records": [ { "name": "CloudLinkedAccount" } ] }
    })
}

#[test]
fn test_remote_template_is_fetched_and_rendered() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/types.go.liquid")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("package {{ package_name }}\n")
        .create();

    let renderer = Renderer::new().unwrap();
    let generator = GeneratorConfig {
        name: "typegen".to_string(),
        template_url: Some(format!("{}/types.go.liquid", server.url())),
        ..Default::default()
    };

    let source = renderer
        .template_source(&generator, "types.go.liquid", &context())
        .unwrap();
    assert!(matches!(source, TemplateSource::Url(_)));

    let template = renderer.load_template(&source).unwrap();
    let output = renderer.render(&template, &context()).unwrap();

    mock.assert();
    assert_eq!(output, "package cloud\n");
}

#[test]
fn test_remote_template_error_status() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/missing.liquid")
        .with_status(404)
        .create();

    let renderer = Renderer::new().unwrap();
    let source = TemplateSource::Url(format!("{}/missing.liquid", server.url()));
    let err = renderer.load_template(&source).unwrap_err();

    mock.assert();
    assert!(err.to_string().contains("Failed to fetch template"));
    assert!(err.to_string().contains("404"));
}

#[test]
fn test_template_dir_is_rendered_against_package() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let dir = temp_dir.path().join("cloud");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("models.liquid"),
        "{% for r in types.records %}{{ r.name }}{% endfor %}",
    )
    .unwrap();

    let renderer = Renderer::new().unwrap();
    let generator = GeneratorConfig {
        name: "typegen".to_string(),
        template_dir: Some(format!("{}/{{{{ package_name }}}}", temp_dir.path().display())),
        template_name: Some("models.liquid".to_string()),
        ..Default::default()
    };

    let source = renderer
        .template_source(&generator, "types.go.liquid", &context())
        .unwrap();
    assert_eq!(source, TemplateSource::Directory(dir.join("models.liquid")));

    let template = renderer.load_template(&source).unwrap();
    assert_eq!(
        renderer.render(&template, &context()).unwrap(),
        "CloudLinkedAccount"
    );
}

#[test]
fn test_missing_template_file() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let renderer = Renderer::new().unwrap();

    let source = TemplateSource::Directory(temp_dir.path().join("absent.liquid"));
    let err = renderer.load_template(&source).unwrap_err();
    assert!(err.to_string().contains("Failed to read template"));
}

#[test]
fn test_unknown_embedded_template() {
    let renderer = Renderer::new().unwrap();
    let generator = GeneratorConfig {
        name: "typegen".to_string(),
        template_name: Some("nope.liquid".to_string()),
        ..Default::default()
    };

    let err = renderer
        .template_source(&generator, "types.go.liquid", &context())
        .unwrap_err();
    assert!(err.to_string().contains("No built-in template named nope.liquid"));
}

#[test]
fn test_render_reports_parse_errors() {
    let renderer = Renderer::new().unwrap();
    let err = renderer.render("{% for %}", &context()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse template"));
}
