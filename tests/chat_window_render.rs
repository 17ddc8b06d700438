use chat_window::config::ViewOptions;
use chat_window::message::{Message, MessageId, Transcript};
use chat_window::render::{render_chat_window, render_page};
use chat_window::ui::chat::MessageBubble;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;

const BUBBLE: &str = "data-message-id=";
const LOADING: &str = "class=\"loading-indicator";

fn render(messages: &[Message], loading: bool) -> String {
    render_chat_window(messages, loading, &ViewOptions::default())
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

fn position_of(html: &str, message: &Message) -> usize {
    html.find(&format!("{BUBBLE}\"{}\"", message.id))
        .unwrap_or_else(|| panic!("message {} not rendered", message.id))
}

fn render_bubble(message: &Message) -> String {
    let message = message.clone();
    Owner::new().with(move || view! { <MessageBubble message=message /> }.to_html())
}

#[test]
fn test_empty_not_loading_has_no_children() {
    let html = render(&[], false);

    assert!(html.contains("chat-window"));
    assert_eq!(count(&html, BUBBLE), 0);
    assert_eq!(count(&html, LOADING), 0);
}

#[test]
fn test_empty_loading_has_only_indicator() {
    let html = render(&[], true);

    assert_eq!(count(&html, BUBBLE), 0);
    assert_eq!(count(&html, LOADING), 1);
}

#[test]
fn test_child_count_matches_messages_plus_loading() {
    let messages: Vec<Message> = (0..5).map(|i| Message::user(format!("msg {i}"))).collect();

    for n in 0..=messages.len() {
        for loading in [false, true] {
            let html = render(&messages[..n], loading);
            assert_eq!(count(&html, BUBBLE), n, "n={n} loading={loading}");
            assert_eq!(count(&html, LOADING), usize::from(loading));
        }
    }
}

#[test]
fn test_two_messages_render_in_order() {
    let m1 = Message::user("first question");
    let m2 = Message::assistant("first answer");
    let html = render(&[m1.clone(), m2.clone()], false);

    assert!(position_of(&html, &m1) < position_of(&html, &m2));
    assert!(html.find("first question").unwrap() < html.find("first answer").unwrap());
    assert_eq!(count(&html, LOADING), 0);
}

#[test]
fn test_loading_indicator_follows_messages() {
    let m1 = Message::user("hello");
    let html = render(&[m1.clone()], true);

    assert!(position_of(&html, &m1) < html.find(LOADING).unwrap());
}

#[test]
fn test_each_bubble_matches_its_message() {
    let messages = vec![
        Message::system("Be concise."),
        Message::user("Ping"),
        Message::assistant("Pong"),
    ];
    let html = render(&messages, false);

    let mut cursor = 0;
    for message in &messages {
        let bubble = render_bubble(message);
        let found = html[cursor..]
            .find(&bubble)
            .unwrap_or_else(|| panic!("bubble for {:?} missing or out of order", message.content));
        cursor += found + bubble.len();
    }
}

#[test]
fn test_duplicate_content_is_not_deduplicated() {
    let messages = vec![Message::user("same"), Message::user("same")];
    let html = render(&messages, false);

    assert_eq!(count(&html, BUBBLE), 2);
    assert_ne!(position_of(&html, &messages[0]), position_of(&html, &messages[1]));
}

#[test]
fn test_keys_come_from_message_ids() {
    let id = MessageId::new();
    let message = Message::assistant("keyed").with_id(id);
    let html = render(&[message], false);

    assert!(html.contains(&format!("{BUBBLE}\"{id}\"")));
}

#[test]
fn test_render_is_idempotent() {
    let messages = vec![Message::user("a"), Message::assistant("b")];

    assert_eq!(render(&messages, true), render(&messages, true));
    assert_eq!(render(&messages, false), render(&messages, false));
}

#[test]
fn test_append_keeps_existing_bubbles() {
    let m1 = Message::user("one");
    let m2 = Message::assistant("two");
    let m3 = Message::user("three");

    let before = render(&[m1.clone(), m2.clone()], false);
    let after = render(&[m1.clone(), m2.clone(), m3.clone()], false);

    assert_eq!(count(&after, BUBBLE), count(&before, BUBBLE) + 1);
    for message in [&m1, &m2] {
        let bubble = render_bubble(message);
        assert!(before.contains(&bubble));
        assert!(after.contains(&bubble));
    }
    assert!(position_of(&after, &m2) < position_of(&after, &m3));
}

#[test]
fn test_content_is_escaped() {
    let html = render(&[Message::user("<script>alert(1)</script>")], false);

    assert!(!html.contains("<script>alert(1)"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_loading_label_and_avatars_follow_options() {
    let options = ViewOptions {
        loading_label: "Thinking hard".to_string(),
        show_avatars: false,
        ..ViewOptions::default()
    };
    let html = render_chat_window(&[Message::assistant("hi")], true, &options);

    assert!(html.contains("Thinking hard"));
    assert!(!html.contains("class=\"avatar"));

    let with_avatars = render(&[Message::assistant("hi")], false);
    assert!(with_avatars.contains("class=\"avatar"));
}

#[test]
fn test_page_hides_system_prompt_by_default() {
    let mut transcript = Transcript::with_system_prompt("secret instructions");
    transcript.push(Message::user("visible question")).unwrap();

    let html = render_page("Preview", &transcript, false, &ViewOptions::default());

    assert!(html.contains("<title>Preview</title>"));
    assert!(html.contains("visible question"));
    assert!(!html.contains("secret instructions"));
    assert_eq!(count(&html, BUBBLE), 1);
}
