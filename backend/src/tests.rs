//! Tests for the catalog server bootstrap, covering readiness signalling and
//! routing over fixture ports.

use super::server::{ServerConfig, create_server, drain_on};
use actix_web::web;
use catalog::inbound::http::health::HealthState;
use catalog::outbound::storage::PictureDirectory;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn uploads() -> TempDir {
    tempfile::tempdir().expect("temp upload dir")
}

fn config(uploads: &TempDir) -> ServerConfig {
    let pictures = PictureDirectory::open(uploads.path()).expect("open pictures");
    ServerConfig::new("127.0.0.1:0".parse().expect("valid address"), pictures)
}

#[rstest]
fn config_reports_bind_addr(uploads: TempDir) {
    assert_eq!(config(&uploads).bind_addr().port(), 0);
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, uploads: TempDir) {
    assert!(!health_state.is_ready(), "state should start unready");

    let server = create_server(health_state.clone(), config(&uploads)).expect("server builds");

    assert!(health_state.is_ready(), "server creation marks ready");
    let handle = server.handle();
    actix_web::rt::spawn(server);
    handle.stop(false).await;
}

#[rstest]
#[actix_web::test]
async fn shutdown_fails_liveness_before_stopping(
    health_state: web::Data<HealthState>,
    uploads: TempDir,
) {
    let server = create_server(health_state.clone(), config(&uploads)).expect("server builds");
    let handle = server.handle();
    let running = actix_web::rt::spawn(server);
    assert!(health_state.is_alive());

    drain_on(std::future::ready(()), health_state.clone(), handle).await;

    assert!(!health_state.is_alive(), "draining server reports not alive");
    running
        .await
        .expect("server task joins")
        .expect("server stops cleanly");
}

#[rstest]
#[actix_web::test]
async fn create_server_rejects_unbindable_address(health_state: web::Data<HealthState>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let taken = listener.local_addr().expect("local addr");
    let dir = tempfile::tempdir().expect("temp upload dir");
    let pictures = PictureDirectory::open(dir.path()).expect("open pictures");

    let result = create_server(health_state.clone(), ServerConfig::new(taken, pictures));

    assert!(result.is_err(), "binding an in-use port fails");
    assert!(!health_state.is_ready(), "failed startup stays unready");
}
