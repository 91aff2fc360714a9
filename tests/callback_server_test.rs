use std::time::Duration;

use djlazy::{DjError, server::CallbackServer};

const PATH: &str = "/spotify-auth";

async fn start(state: &str) -> (CallbackServer, String) {
    let server = CallbackServer::start("127.0.0.1:0", PATH, state.to_string())
        .await
        .unwrap();
    let base = format!("http://{}{}", server.local_addr(), PATH);
    (server, base)
}

#[tokio::test]
async fn test_first_callback_resolves_with_the_code() {
    let (server, base) = start("state-1").await;

    let request = tokio::spawn(async move {
        reqwest::get(format!("{base}?code=auth-code&state=state-1"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    });

    let code = server.wait_for_code(Duration::from_secs(5)).await.unwrap();
    assert_eq!(code, "auth-code");

    let page = request.await.unwrap();
    assert!(page.contains("window.close()"));
}

#[tokio::test]
async fn test_listener_shuts_down_after_the_callback() {
    let (server, base) = start("state-1").await;
    let addr = server.local_addr();

    let request = tokio::spawn(async move {
        reqwest::get(format!("{base}?code=auth-code&state=state-1"))
            .await?
            .text()
            .await
    });
    server.wait_for_code(Duration::from_secs(5)).await.unwrap();
    request.await.unwrap().unwrap();

    assert!(tokio::net::TcpStream::connect(addr).await.is_err());
}

#[tokio::test]
async fn test_state_mismatch_is_an_auth_error() {
    let (server, base) = start("state-1").await;

    tokio::spawn(async move {
        let _ = reqwest::get(format!("{base}?code=auth-code&state=forged")).await;
    });

    let err = server
        .wait_for_code(Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, DjError::Auth(_)));
}

#[tokio::test]
async fn test_no_callback_times_out() {
    let (server, _base) = start("state-1").await;

    let err = server
        .wait_for_code(Duration::from_millis(100))
        .await
        .unwrap_err();
    assert!(matches!(err, DjError::Auth(msg) if msg.contains("no authorization")));
}
