//! End-to-end: load a conversation, lay it out, draw it, tear it down.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use converse::config::{Config, SegmentConfig};
use converse::conversation::{Conversation, ConversationEntry, EntryType};
use converse::layer::render::{buffer_lines, draw};
use converse::layer::LayerTree;
use converse::segments::{classify, Segment, SegmentKind};
use converse::stack::SegmentStack;

const CONVERSATION: &str = r#"{
    "entries": [
        {"type": "prompt", "content": "Hi"},
        {"type": "response", "content": "Hello there"},
        {"type": "sticker", "content": "?"},
        {"type": "widget", "widget": {"type": "number", "number": "7", "unit": "days"}},
        {"type": "widget", "widget": {"type": "hologram"}}
    ]
}"#;

fn render(tree: &LayerTree, stack: &SegmentStack, width: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, stack.content_height(tree));
    let mut buf = Buffer::empty(area);
    draw(tree, stack.root(), area, &mut buf);
    buffer_lines(&buf)
}

#[test]
fn conversation_renders_top_to_bottom() {
    let conversation = Conversation::from_json(CONVERSATION).unwrap();
    let mut tree = LayerTree::new();
    let mut stack = SegmentStack::new(&mut tree, Rect::new(0, 0, 20, 40), SegmentConfig::default());
    stack.sync(&mut tree, &conversation);

    let kinds: Vec<SegmentKind> = stack.segments().iter().map(Segment::kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Message,
            SegmentKind::Message,
            SegmentKind::None,
            SegmentKind::Number,
            SegmentKind::None,
        ]
    );

    let lines = render(&tree, &stack, 20);
    assert_eq!(
        lines,
        vec!["> Hi", "", " Assistant", "Hello there", "", "         7", "        days"]
    );

    stack.destroy(&mut tree);
    assert_eq!(tree.live_count(), 0);
}

#[test]
fn streamed_response_grows_in_place() {
    let mut conversation = Conversation::new();
    conversation.push(ConversationEntry::prompt("Tell me a story"));
    let reply = conversation.push(ConversationEntry::response(""));
    conversation.push(ConversationEntry::text(EntryType::Action, "saving"));

    let mut tree = LayerTree::new();
    let mut stack = SegmentStack::new(&mut tree, Rect::new(0, 0, 16, 40), SegmentConfig::default());
    stack.sync(&mut tree, &conversation);
    let reply_layer = stack.segments()[1].layer();
    let before = stack.segments()[2].frame(&tree).y;

    reply
        .borrow_mut()
        .append_content("Once upon a time there was a tiny crab");
    assert!(stack.update_entry(&mut tree, &reply));

    assert_eq!(stack.segments()[1].layer(), reply_layer);
    assert!(stack.segments()[2].frame(&tree).y > before);
    let lines = render(&tree, &stack, 16);
    assert!(lines.contains(&"Once upon a time".to_string()));

    stack.destroy(&mut tree);
    assert_eq!(tree.live_count(), 0);
}

#[test]
fn maps_disabled_by_config_render_empty() {
    let config = Config::from_yaml("segments:\n  maps_enabled: false\n").unwrap();
    let mut conversation = Conversation::new();
    conversation.push(ConversationEntry::prompt("Where?"));
    let map = conversation.push(ConversationEntry::widget(
        converse::conversation::ConversationWidget::Map(converse::conversation::widget::MapWidget {
            lat: 1.0,
            lon: 2.0,
            zoom: 10,
            label: None,
        }),
    ));
    assert_eq!(classify(&map.borrow(), &config.segments), SegmentKind::None);

    let mut tree = LayerTree::new();
    let mut stack = SegmentStack::new(&mut tree, Rect::new(0, 0, 20, 40), config.segments);
    stack.sync(&mut tree, &conversation);
    let map_segment = &stack.segments()[1];
    assert_eq!(map_segment.kind(), SegmentKind::None);
    assert!(map_segment.has_label());
    // Label row only
    assert_eq!(map_segment.frame(&tree).height, 1);

    stack.destroy(&mut tree);
    assert_eq!(tree.live_count(), 0);
}

#[test]
fn demo_conversation_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/pasta.json");
    let conversation = Conversation::load(&path).unwrap();
    let mut tree = LayerTree::new();
    let mut stack = SegmentStack::new(&mut tree, Rect::new(0, 0, 36, 48), SegmentConfig::default());
    stack.sync(&mut tree, &conversation);

    assert_eq!(stack.segments().len(), conversation.len());
    assert_eq!(stack.segments()[3].kind(), SegmentKind::Timer);
    assert_eq!(stack.segments()[4].kind(), SegmentKind::WeatherCurrent);
    assert_eq!(stack.segments()[7].kind(), SegmentKind::Map);
    assert_eq!(stack.segments()[8].kind(), SegmentKind::None);
    assert!(stack.content_height(&tree) > 0);

    stack.destroy(&mut tree);
    assert_eq!(tree.live_count(), 0);
}
