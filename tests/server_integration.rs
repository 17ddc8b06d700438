use axum_test::TestServer;
use chat_window::config::AppConfig;
use chat_window::message::{Message, Transcript};
use chat_window::server::{AppState, router};
use std::io::Write;

fn test_server() -> anyhow::Result<TestServer> {
    let config = AppConfig::load_from_args(["chat-window"])?;

    let mut transcript = Transcript::with_system_prompt("hidden prompt");
    transcript.push(Message::user("How are you?"))?;
    transcript.push(Message::assistant("Fine, thanks."))?;

    Ok(TestServer::new(router(AppState::new(config, transcript)))?)
}

#[tokio::test]
async fn test_index_renders_page() -> anyhow::Result<()> {
    let server = test_server()?;

    let response = server.get("/").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("<title>Chat</title>"));
    assert!(body.contains("How are you?"));
    assert!(body.contains("Fine, thanks."));
    assert!(!body.contains("hidden prompt"));
    assert!(!body.contains("class=\"loading-indicator"));
    Ok(())
}

#[tokio::test]
async fn test_fragment_with_loading() -> anyhow::Result<()> {
    let server = test_server()?;

    let response = server.get("/fragment").add_query_param("loading", "true").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(!body.contains("<html"));
    assert_eq!(body.matches("data-message-id=").count(), 2);
    assert_eq!(body.matches("class=\"loading-indicator").count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let server = test_server()?;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");
    Ok(())
}

#[tokio::test]
async fn test_serves_transcript_loaded_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"[{{"role": "user", "content": "from disk"}}, {{"role": "assistant", "content": "loaded"}}]"#
    )?;

    let transcript = Transcript::load(file.path())?;
    let config = AppConfig::load_from_args(["chat-window"])?;
    let server = TestServer::new(router(AppState::new(config, transcript)))?;

    let body = server.get("/fragment").await.text();
    assert!(body.contains("from disk"));
    assert!(body.find("from disk") < body.find("loaded"));
    Ok(())
}
