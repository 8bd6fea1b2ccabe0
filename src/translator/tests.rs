use crate::game::types::CommandKind;
use crate::translator::error::ParseError;
use crate::translator::{lexer, parser, translate};
use crate::translator::parser::Item;

#[test]
fn test_empty_program_yields_no_commands() {
    assert!(translate("").is_empty());
}

#[test]
fn test_blank_and_comments_yield_no_commands() {
    assert!(translate("  \n\n  // just a comment\n").is_empty());
}

#[test]
fn test_commands_come_out_in_emission_order() {
    let commands = translate(
        r#"
        emit("MOVE")
        emit("TURN_LEFT")
        emit("MOVE")
        emit("COLLECT")
        "#,
    );

    let kinds: Vec<CommandKind> = commands.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CommandKind::Move,
            CommandKind::TurnLeft,
            CommandKind::Move,
            CommandKind::Collect,
        ]
    );
}

#[test]
fn test_payload_is_carried_through() {
    let commands = translate(r#"emit("MOVE", "block-7")"#);

    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].kind, CommandKind::Move);
    assert_eq!(commands[0].payload.as_deref(), Some("block-7"));
}

#[test]
fn test_repeat_unrolls_in_order() {
    let commands = translate(r#"repeat 3 { emit("MOVE") } emit("TURN_RIGHT")"#);

    let kinds: Vec<CommandKind> = commands.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CommandKind::Move,
            CommandKind::Move,
            CommandKind::Move,
            CommandKind::TurnRight,
        ]
    );
}

#[test]
fn test_nested_repeat() {
    let commands = translate(
        r#"
        repeat 2 {
            emit("MOVE")
            repeat 2 { emit("TURN_LEFT") }
        }
        "#,
    );

    let kinds: Vec<CommandKind> = commands.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CommandKind::Move,
            CommandKind::TurnLeft,
            CommandKind::TurnLeft,
            CommandKind::Move,
            CommandKind::TurnLeft,
            CommandKind::TurnLeft,
        ]
    );
}

#[test]
fn test_repeat_zero_emits_nothing() {
    assert!(translate(r#"repeat 0 { emit("MOVE") }"#).is_empty());
}

#[test]
fn test_translation_is_deterministic() {
    let source = r#"repeat 2 { emit("MOVE") } emit("COLLECT", "fuel")"#;
    assert_eq!(translate(source), translate(source));
}

#[test]
fn test_fault_keeps_emitted_prefix() {
    // The second emit names a command that does not exist; the first one
    // must survive.
    let commands = translate(r#"emit("MOVE") emit("FLY")"#);

    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].kind, CommandKind::Move);
}

#[test]
fn test_parse_fault_yields_no_commands() {
    // Unclosed repeat body: nothing was executed, so nothing is kept.
    assert!(translate(r#"repeat 2 { emit("MOVE")"#).is_empty());
    // Plain function-call syntax is not part of the language.
    assert!(translate("move()").is_empty());
}

#[test]
fn test_step_budget_cuts_off_runaway_programs() {
    let commands = translate(r#"repeat 1000000 { emit("MOVE") }"#);

    assert!(!commands.is_empty());
    assert!(commands.len() < 1_000_000);
    assert!(commands.iter().all(|c| c.kind == CommandKind::Move));
}

#[test]
fn test_lexer_reports_line_numbers() {
    let fault = lexer::lex("emit(\"MOVE\")\n  ?").unwrap_err();
    assert_eq!(fault, ParseError::UnexpectedChar { line: 2, found: '?' });
}

#[test]
fn test_lexer_rejects_unterminated_string() {
    let fault = lexer::lex(r#"emit("MOVE"#).unwrap_err();
    assert!(matches!(fault, ParseError::UnterminatedString { line: 1 }));
}

#[test]
fn test_parser_builds_repeat_tree() {
    let tokens = lexer::lex(r#"repeat 2 { emit("MOVE") }"#).unwrap();
    let program = parser::parse(tokens).unwrap();

    assert_eq!(program.len(), 1);
    match &program[0] {
        Item::Repeat { count, body } => {
            assert_eq!(*count, 2);
            assert_eq!(body.len(), 1);
        }
        other => panic!("expected repeat, got {:?}", other),
    }
}

#[test]
fn test_parser_rejects_unknown_keyword() {
    let tokens = lexer::lex("loop 2 { }").unwrap();
    let fault = parser::parse(tokens).unwrap_err();
    assert!(matches!(
        fault,
        ParseError::UnexpectedToken { line: 1, .. }
    ));
}
