use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, HttpResponse};
use std::path::PathBuf;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    let index = frontend_dir.join("index.html");

    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(
            Files::new("/", frontend_dir)
                .index_file("index.html")
                // Client side routes such as /upload have no file behind them.
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        log::debug!("Falling back to index.html for {}", req.path());
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok(ServiceResponse::new(req, res))
                    }
                })),
        );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::fs;

    const INDEX: &str = "<!DOCTYPE html><html><body>infrascan</body></html>";

    fn bundle() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), INDEX).unwrap();
        fs::write(dir.path().join("banner.png"), b"\x89PNG fake").unwrap();
        dir
    }

    #[actix_web::test]
    async fn serves_index_at_root() {
        let dir = bundle();
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, dir.path().to_path_buf())),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, INDEX.as_bytes());
    }

    #[actix_web::test]
    async fn serves_static_assets() {
        let dir = bundle();
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, dir.path().to_path_buf())),
        )
        .await;

        let req = test::TestRequest::get().uri("/banner.png").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, &b"\x89PNG fake"[..]);
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let dir = bundle();
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, dir.path().to_path_buf())),
        )
        .await;

        for uri in ["/upload", "/about", "/no/such/page"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success(), "{} -> {}", uri, resp.status());
            let body = test::read_body(resp).await;
            assert_eq!(body, INDEX.as_bytes());
        }
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let dir = bundle();
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, dir.path().to_path_buf())),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "ok".as_bytes());
    }
}
