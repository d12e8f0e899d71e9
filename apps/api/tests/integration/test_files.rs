use super::helpers::{expect_status, get, read_bytes, spawn_app, tiny_png_bytes};
use axum::http::{StatusCode, header};

fn header_value(res: &axum::response::Response, name: header::HeaderName) -> String {
    res.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn image_is_served_inline_with_its_media_type() {
    let test = spawn_app();
    let png = tiny_png_bytes();
    test.put_file("img/dot.png", &png);

    let res = get(&test.app, "/file/img?filePath=img/dot.png").await;
    let res = expect_status(res, StatusCode::OK).await;

    assert_eq!(header_value(&res, header::CONTENT_TYPE), "image/png");
    assert_eq!(read_bytes(res).await, png);
}

#[tokio::test]
async fn image_width_renders_a_png_thumbnail() {
    let test = spawn_app();
    test.put_file("dot.png", &tiny_png_bytes());

    let res = get(&test.app, "/file/img?filePath=dot.png&width=1").await;
    let res = expect_status(res, StatusCode::OK).await;
    assert_eq!(header_value(&res, header::CONTENT_TYPE), "image/png");

    let thumb = image::load_from_memory(&read_bytes(res).await).expect("thumbnail should decode");
    assert_eq!((thumb.width(), thumb.height()), (1, 1));
}

#[tokio::test]
async fn image_rejects_out_of_range_width() {
    let test = spawn_app();
    test.put_file("dot.png", &tiny_png_bytes());

    let res = get(&test.app, "/file/img?filePath=dot.png&width=0").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    let res = get(&test.app, "/file/img?filePath=dot.png&width=5000").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn image_endpoint_refuses_non_images() {
    let test = spawn_app();
    test.put_file("notes.txt", b"plain text");

    let res = get(&test.app, "/file/img?filePath=notes.txt").await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn download_sends_an_attachment() {
    let test = spawn_app();
    test.put_file("docs/notes.txt", b"plain text");

    let res = get(&test.app, "/file/download?filePath=docs/notes.txt").await;
    let res = expect_status(res, StatusCode::OK).await;

    assert_eq!(
        header_value(&res, header::CONTENT_TYPE),
        "application/octet-stream"
    );
    assert_eq!(
        header_value(&res, header::CONTENT_DISPOSITION),
        "attachment; filename=\"notes.txt\""
    );
    assert_eq!(read_bytes(res).await, b"plain text");
}

#[tokio::test]
async fn paths_outside_the_upload_directory_are_rejected() {
    let test = spawn_app();

    for path in ["../secret.txt", "img/../../secret.txt", "/etc/passwd"] {
        let uri = format!("/file/download?filePath={}", path);
        let res = get(&test.app, &uri).await;
        expect_status(res, StatusCode::BAD_REQUEST).await;
    }
}

#[tokio::test]
async fn missing_files_are_not_found() {
    let test = spawn_app();

    let res = get(&test.app, "/file/download?filePath=nope.bin").await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let res = get(&test.app, "/file/img?filePath=nope.png").await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn file_path_parameter_is_required() {
    let test = spawn_app();

    let res = get(&test.app, "/file/download").await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;
    let body: serde_json::Value = super::helpers::read_json(res).await;
    assert!(body["error"].as_str().is_some());
}
