use debug_log::test_support::{Recorder, SinkEvent};
use debug_log::{
    Destination, DisplayOptions, LinearColor, Log, Matrix, Name, Quat, Rotator, Severity,
    Transform, Vector,
};
use proptest::prelude::*;
use std::sync::Arc;

fn console() -> DisplayOptions {
    DisplayOptions::default().destination(Destination::Console)
}

#[test]
fn test_prefix_and_suffix_are_literal() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.number(42, &console().prefix("A:").suffix("!"));
    assert_eq!(recorder.last_console().as_deref(), Some("A:42!"));
}

#[test]
fn test_booleans() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.boolean(true, &console());
    log.boolean(false, &console());
    assert_eq!(recorder.console_texts(), vec!["True", "False"]);
}

#[test]
fn test_percent_suffix() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.percent(50.0, &console());
    let text = recorder.last_console().unwrap();
    assert!(text.ends_with("50%"), "got {text}");
    assert!(!text.contains(' '));
}

#[test]
fn test_every_integer_width() {
    let recorder = Recorder::new();
    let log = recorder.log();
    let options = console();

    log.number(-8i8, &options);
    log.number(-1600i16, &options);
    log.number(32i32, &options);
    log.number(-64i64, &options);
    log.number(8u8, &options);
    log.number(16u16, &options);
    log.number(32u32, &options);
    log.number(u64::MAX, &options);
    log.number(2.5f32, &options);
    log.number(-0.125f64, &options);

    assert_eq!(
        recorder.console_texts(),
        vec![
            "-8",
            "-1600",
            "32",
            "-64",
            "8",
            "16",
            "32",
            "18446744073709551615",
            "2.5",
            "-0.125",
        ]
    );
}

#[test]
fn test_math_types() {
    let recorder = Recorder::new();
    let log = recorder.log();
    let options = console();

    log.vector(&Vector::new(1.0, 2.0, 3.0), &options);
    log.rotator(&Rotator::new(0.0, 90.0, 0.0), &options);
    log.quat(&Quat::IDENTITY, &options);
    log.matrix(&Matrix::IDENTITY, &options);
    log.color(&LinearColor::GREEN, &options);

    assert_eq!(
        recorder.console_texts(),
        vec![
            "X=1.000 Y=2.000 Z=3.000",
            "P=0.000000 Y=90.000000 R=0.000000",
            "X=0.000000000 Y=0.000000000 Z=0.000000000 W=1.000000000",
            "[1 0 0 0] [0 1 0 0] [0 0 1 0] [0 0 0 1] ",
            "(R=0.000000,G=1.000000,B=0.000000,A=1.000000)",
        ]
    );
}

#[test]
fn test_transform_compact_and_expanded() {
    let recorder = Recorder::new();
    let log = recorder.log();
    let transform = Transform::from_translation(Vector::new(10.0, 0.0, -5.0));

    log.transform(&transform, "T: ", false, Destination::Console, 5.0);
    log.transform(&transform, "T: ", true, Destination::Console, 5.0);

    let texts = recorder.console_texts();
    assert_eq!(
        texts[0],
        "T: 10.000000,0.000000,-5.000000|0.000000,0.000000,0.000000|1.000000,1.000000,1.000000"
    );
    assert_eq!(texts[1].lines().count(), 3);
    assert!(texts[1].starts_with("T: Translation: X=10.000 Y=0.000 Z=-5.000\n"));
    assert!(texts[1].ends_with("Scale: X=1.000 Y=1.000 Z=1.000"));
}

#[test]
fn test_canned_phrases() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.hello(Destination::Console);
    log.yes("Ready? ", "!", Destination::Console);
    log.no("", "", Destination::Console);
    log.valid("Mesh ", "", Destination::Console);
    log.invalid("", " material", Destination::Console);

    let severities: Vec<Severity> = recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            SinkEvent::Console(message) => Some(message.severity),
            _ => None,
        })
        .collect();

    assert_eq!(
        recorder.console_texts(),
        vec!["Hello", "Ready? Yes!", "No", "Mesh Valid", "Invalid material"]
    );
    assert_eq!(
        severities,
        vec![
            Severity::Info,
            Severity::Success,
            Severity::Error,
            Severity::Success,
            Severity::Error,
        ]
    );
}

#[test]
fn test_object_validity() {
    let recorder = Recorder::new();
    let log = recorder.log();

    let actor = Arc::new("BP_Player");
    let weak = Arc::downgrade(&actor);
    log.object_validity(&weak, Destination::Console);
    drop(actor);
    log.object_validity(&weak, Destination::Console);
    log.object_validity(&None::<Arc<u32>>, Destination::Console);

    assert_eq!(recorder.console_texts(), vec!["Valid", "Invalid", "Invalid"]);
}

#[test]
fn test_convenience_severities() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.info("i", Destination::Console, 5.0);
    log.success("s", Destination::Console, 5.0);
    log.warning("w", Destination::Console, 5.0);
    log.error("e", Destination::Console, 5.0);
    log.debug_message(Severity::Warning, &Name::from("PlayerStart"), Destination::Console, 5.0);

    let events = recorder.events();
    let expected = [
        ("i", Severity::Info),
        ("s", Severity::Success),
        ("w", Severity::Warning),
        ("e", Severity::Error),
        ("PlayerStart", Severity::Warning),
    ];
    assert_eq!(events.len(), expected.len());
    for (event, (text, severity)) in events.iter().zip(expected) {
        match event {
            SinkEvent::Console(message) => {
                assert_eq!(message.text, text);
                assert_eq!(message.severity, severity);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(recorder.terminations(), 0);
}

#[test]
fn test_display_time_reaches_viewport_only_messages() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.info("on screen", Destination::Viewport, 1.5);
    match recorder.events().as_slice() {
        [SinkEvent::Viewport(message)] => {
            assert_eq!(message.display_time, 1.5);
            assert_eq!(message.color(), LinearColor::CYAN);
        }
        other => panic!("unexpected events {other:?}"),
    }
}

#[test]
fn test_fatal_records_then_terminates() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.debug_message(Severity::Fatal, "save corrupted", Destination::Both, 5.0);

    let events = recorder.events();
    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], SinkEvent::Viewport(m) if m.text == "save corrupted"));
    assert!(matches!(&events[1], SinkEvent::Console(m) if m.text == "save corrupted"));
    assert_eq!(events[2], SinkEvent::Flush);
    assert!(matches!(&events[3], SinkEvent::Terminate(m) if m.severity == Severity::Fatal));
}

#[test]
fn test_fatal_with_none_is_a_no_op() {
    let recorder = Recorder::new();
    let log = recorder.log();

    log.debug_message(Severity::Fatal, "ignored", Destination::None, 5.0);
    assert!(recorder.is_empty());
}

#[test]
fn test_default_log_uses_message_board() {
    let board = Arc::new(debug_log::sink::MessageBoard::default());
    let log = Log::builder().viewport(board.clone()).build();

    log.warning("low health", Destination::Viewport, 5.0);
    let visible = board.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "low health");
    assert_eq!(visible[0].color, LinearColor::YELLOW);
}

#[test]
fn test_viewport_accepts_huge_display_time() {
    let board = Arc::new(debug_log::sink::MessageBoard::default());
    let log = Log::builder().viewport(board.clone()).build();

    log.info("long banner", Destination::Viewport, 1.8e19);
    let visible = board.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "long banner");
}

proptest! {
    #[test]
    fn prop_none_never_writes(n in any::<i64>(), prefix in ".*", suffix in ".*") {
        let recorder = Recorder::new();
        let log = recorder.log();
        let options = DisplayOptions::default()
            .destination(Destination::None)
            .severity(Severity::Fatal)
            .prefix(prefix)
            .suffix(suffix);
        log.number(n, &options);
        log.boolean(n % 2 == 0, &options);
        prop_assert!(recorder.is_empty());
    }

    #[test]
    fn prop_affixes_wrap_number(n in any::<i64>(), prefix in "[a-zA-Z: ]{0,8}", suffix in "[!?. ]{0,4}") {
        let recorder = Recorder::new();
        let log = recorder.log();
        log.number(n, &console().prefix(prefix.clone()).suffix(suffix.clone()));
        prop_assert_eq!(recorder.last_console(), Some(format!("{prefix}{n}{suffix}")));
    }

    #[test]
    fn prop_non_fatal_never_terminates(index in 0usize..4, dest in 0usize..4) {
        let severity = [Severity::Info, Severity::Success, Severity::Warning, Severity::Error][index];
        let destination = [Destination::Viewport, Destination::Console, Destination::Both, Destination::None][dest];
        let recorder = Recorder::new();
        recorder.log().debug_message(severity, "x", destination, 1.0);
        prop_assert_eq!(recorder.terminations(), 0);
    }
}
