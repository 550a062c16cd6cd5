use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use prospector_service::document::DOCX_MIME;
use prospector_service::render::Pages;
use prospector_service::routers;

macro_rules! service {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Pages::new()))
                .service(routers::pages::index)
                .service(routers::pages::research)
                .service(routers::download::handle)
                .service(routers::health::handle),
        )
        .await
    };
}

#[actix_web::test]
async fn index_renders_the_form() {
    let app = service!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("name=\"query\""));
    assert!(!body.contains("Please enter a research topic"));
}

#[actix_web::test]
async fn empty_query_rerenders_the_form_with_an_error() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/research")
        .set_form([("query", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Handled locally: no agent is constructed, no outbound request happens.
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body)
        .unwrap()
        .contains("Please enter a research topic"));
}

#[actix_web::test]
async fn download_returns_a_named_docx_attachment() {
    let app = service!();
    let req = test::TestRequest::get()
        .uri("/download?topic=AI&summary=Hello&sources=a%7Cb%7C")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        DOCX_MIME
    );
    assert_eq!(
        resp.headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"research_AI.docx\""
    );

    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..2], b"PK");
}

#[actix_web::test]
async fn download_defaults_every_missing_parameter() {
    let app = service!();
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/download").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"research_Research_Topic.docx\""
    );
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = service!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("\"status\":\"ok\""));
}
