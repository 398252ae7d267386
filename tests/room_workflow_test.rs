//! Room workflow integration tests
//! Run with: cargo test --test room_workflow_test

use std::sync::{Arc, Once};

use chatrooms::application::services::ScenarioService;
use chatrooms::infrastructure::adapters::MemorySink;
use chatrooms::infrastructure::config::Config;
use chatrooms::{
    policy_for, ChatRoom, Command, PermissionLevel, PolicySettings, RoomTheme, User,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn room(name: &str, theme: RoomTheme, sink: &Arc<MemorySink>) -> Arc<ChatRoom> {
    ChatRoom::new(name, policy_for(theme, &PolicySettings::default()), sink.clone())
}

fn member_of(room: &Arc<ChatRoom>, name: &str, level: PermissionLevel) -> Arc<User> {
    let user = User::new(room, name);
    user.set_level(level);
    room.register_user(&user);
    user
}

/// Nate asks for help in the friendly room
#[test]
fn test_nate_asks_for_help() {
    ensure_init();
    let sink = Arc::new(MemorySink::new());
    let ctrl_cat = room("CtrlCat", RoomTheme::Friendly, &sink);
    let nate = member_of(&ctrl_cat, "Nate", PermissionLevel::Member);

    nate.send("Hello everyone, can you help me debug this?", &ctrl_cat);

    assert_eq!(ctrl_cat.history(), vec!["Nate: Hello everyone, can you help me debug this?"]);
    assert_eq!(nate.message_count(), 1);
    assert_eq!(sink.count_matching("asked for help"), 1);
}

/// A member may send eleven messages in the friendly room, not twelve
#[test]
fn test_member_cap_through_send() {
    ensure_init();
    let sink = Arc::new(MemorySink::new());
    let ctrl_cat = room("CtrlCat", RoomTheme::Friendly, &sink);
    let nate = member_of(&ctrl_cat, "Nate", PermissionLevel::Member);

    for i in 0..11 {
        nate.send(&format!("message number {}", i), &ctrl_cat);
    }
    assert_eq!(nate.message_count(), 11);
    assert_eq!(ctrl_cat.history_len(), 11);

    nate.send("one too many", &ctrl_cat);
    assert_eq!(nate.message_count(), 11);
    assert_eq!(ctrl_cat.history_len(), 11);
    assert_eq!(sink.count_matching("message cap reached"), 1);
}

/// The technical room checks level before anything else about the sender
#[test]
fn test_technical_room_levels() {
    ensure_init();
    let sink = Arc::new(MemorySink::new());
    let dogorithm = room("Dogorithm", RoomTheme::Technical, &sink);
    let nate = member_of(&dogorithm, "Nate", PermissionLevel::Member);
    let luy = member_of(&dogorithm, "Luy", PermissionLevel::Moderator);

    nate.send("let's discuss this algorithm", &dogorithm);
    assert_eq!(dogorithm.history_len(), 0);

    luy.send("let's discuss this algorithm", &dogorithm);
    assert_eq!(dogorithm.history(), vec!["Luy: let's discuss this algorithm"]);
    assert_eq!(nate.inbox(), vec!["[Dogorithm] Luy: let's discuss this algorithm"]);
}

/// Short greetings pass, long off-topic chatter does not
#[test]
fn test_technical_room_topics() {
    ensure_init();
    let sink = Arc::new(MemorySink::new());
    let dogorithm = room("Dogorithm", RoomTheme::Technical, &sink);
    let dom = member_of(&dogorithm, "Dom", PermissionLevel::Admin);

    dom.send("hi", &dogorithm);
    dom.send("nice weather today", &dogorithm);
    dom.send("binary search is fast", &dogorithm);

    assert_eq!(dogorithm.history(), vec!["Dom: hi", "Dom: binary search is fast"]);
    assert_eq!(dom.message_count(), 2);
}

/// Registering twice keeps one roster entry
#[test]
fn test_duplicate_registration() {
    ensure_init();
    let sink = Arc::new(MemorySink::new());
    let ctrl_cat = room("CtrlCat", RoomTheme::Friendly, &sink);
    let nate = member_of(&ctrl_cat, "Nate", PermissionLevel::Member);

    ctrl_cat.register_user(&nate);

    assert_eq!(ctrl_cat.users().len(), 1);
}

/// A batch built by hand runs in order and leaves the queue empty
#[test]
fn test_manual_batch() {
    ensure_init();
    let sink = Arc::new(MemorySink::new());
    let ctrl_cat = room("CtrlCat", RoomTheme::Friendly, &sink);
    let nate = member_of(&ctrl_cat, "Nate", PermissionLevel::Member);

    nate.add_command(Command::send_message(&ctrl_cat, &nate, "meow from the cat"));
    nate.add_command(Command::save_message(&ctrl_cat, &nate, "quiet note"));
    nate.execute_all();

    assert_eq!(nate.pending_commands(), 0);
    assert_eq!(ctrl_cat.history(), vec!["Nate: meow from the cat", "Nate: quiet note"]);
    assert_eq!(nate.message_count(), 1);
    assert_eq!(sink.count_matching("Pun appreciated"), 1);
}

/// The default demonstration config runs end to end
#[test]
fn test_default_script() {
    ensure_init();
    let sink = Arc::new(MemorySink::new());
    let config = Config::default();
    let scenario = ScenarioService::from_config(&config, sink.clone()).unwrap();

    scenario.run_script(&config.script).unwrap();

    let snapshots = scenario.snapshots();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].history.len(), 2);
    assert_eq!(snapshots[1].history.len(), 2);
    assert_eq!(snapshots[1].members, vec!["Dom", "Luy"]);
}
