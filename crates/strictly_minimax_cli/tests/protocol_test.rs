//! Tests for the JSON-lines game host.

use serde_json::{Value, json};
use strictly_minimax_cli::{
    AiSide, GameHost, GameRegistry, RegistryError, Request, Response, status_of,
};

fn host() -> GameHost {
    GameHost::new(GameRegistry::default(), AiSide::O)
}

fn to_json(response: &Response) -> Value {
    serde_json::to_value(response).unwrap()
}

fn create(host: &mut GameHost, line: &str) -> String {
    let response = to_json(&host.handle_line(line));
    assert_eq!(response["status"], 200);
    response["game"]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_create_with_defaults() {
    let mut host = host();
    let response = to_json(&host.handle_line(r#"{"op":"create"}"#));

    assert_eq!(response["status"], 200);
    assert_eq!(
        response["game"]["state"],
        json!([[null, null, null], [null, null, null], [null, null, null]])
    );
    assert_eq!(response["game"]["winner"], Value::Null);
    assert_eq!(response["game"]["ai_symbol"], "O");
    assert_eq!(response["game"]["current_player"], "X");
}

#[test]
fn test_create_rejects_unknown_symbol() {
    let mut host = host();
    for line in [
        r#"{"op":"create","ai_symbol":"foo"}"#,
        r#"{"op":"create","ai_symbol":"n"}"#,
        r#"{"op":"create","ai_symbol":""}"#,
    ] {
        assert_eq!(host.handle_line(line).status(), 422);
    }
    assert!(host.registry().is_empty());
}

#[test]
fn test_create_ignores_client_supplied_id() {
    let mut host = host();
    let id = create(&mut host, r#"{"op":"create","id":"xxxxxxxxxx"}"#);
    assert_ne!(id, "xxxxxxxxxx");
}

#[test]
fn test_get_unknown_game_is_404() {
    let mut host = host();
    let response = host.handle(Request::Get {
        id: "ABCDEF0123".to_string(),
    });
    assert_eq!(response.status(), 404);
}

#[test]
fn test_wrong_length_id_is_malformed() {
    let mut host = host();
    create(&mut host, r#"{"op":"create"}"#);
    for line in [
        r#"{"op":"get","id":"ABC"}"#,
        r#"{"op":"get","id":"ABCDEF01234"}"#,
        r#"{"op":"play","id":"","action":{"x":0,"y":0}}"#,
        r#"{"op":"reset","id":"ABCDEF012"}"#,
    ] {
        let response = to_json(&host.handle_line(line));
        assert_eq!(response["status"], 422);
        assert!(response["detail"].as_str().unwrap().contains("10 characters"));
    }
    assert_eq!(host.registry().len(), 1);
}

#[test]
fn test_exhausted_or_invalid_registry_errors_are_500() {
    assert_eq!(
        status_of(&RegistryError::IdSpaceExhausted { attempts: 64 }),
        500
    );
    assert_eq!(status_of(&RegistryError::InvalidIdLength { length: 1 }), 500);
}

#[test]
fn test_play_human_then_engine() {
    let mut host = host();
    let id = create(&mut host, r#"{"op":"create"}"#);

    let human = format!(r#"{{"op":"play","id":"{}","action":{{"x":1,"y":1}}}}"#, id);
    let response = to_json(&host.handle_line(&human));
    assert_eq!(response["status"], 200);
    assert_eq!(response["game"]["state"][1][1], "X");
    assert_eq!(response["game"]["current_player"], "O");

    let engine = format!(r#"{{"op":"play","id":"{}"}}"#, id);
    let response = to_json(&host.handle_line(&engine));
    assert_eq!(response["status"], 200);
    assert_eq!(response["game"]["state"][0][0], "O");
}

#[test]
fn test_play_errors_map_to_400() {
    let mut host = host();
    let id = create(&mut host, r#"{"op":"create","ai_symbol":"none"}"#);

    let missing = format!(r#"{{"op":"play","id":"{}"}}"#, id);
    let response = to_json(&host.handle_line(&missing));
    assert_eq!(response["status"], 400);
    assert!(response["detail"].as_str().unwrap().contains("coordinates"));

    let center = format!(r#"{{"op":"play","id":"{}","action":{{"x":1,"y":1}}}}"#, id);
    assert_eq!(host.handle_line(&center).status(), 200);
    assert_eq!(host.handle_line(&center).status(), 400);
}

#[test]
fn test_out_of_range_action_is_malformed() {
    let mut host = host();
    let id = create(&mut host, r#"{"op":"create"}"#);
    let line = format!(r#"{{"op":"play","id":"{}","action":{{"x":3,"y":0}}}}"#, id);
    assert_eq!(host.handle_line(&line).status(), 422);
}

#[test]
fn test_finished_game_reports_winner_and_rejects_moves() {
    let mut host = host();
    let id = create(&mut host, r#"{"op":"create","ai_symbol":"none"}"#);

    let mut last = Value::Null;
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        let line = format!(
            r#"{{"op":"play","id":"{}","action":{{"x":{},"y":{}}}}}"#,
            id, x, y
        );
        last = to_json(&host.handle_line(&line));
    }
    assert_eq!(last["game"]["winner"], "X");

    let again = format!(r#"{{"op":"play","id":"{}","action":{{"x":2,"y":2}}}}"#, id);
    let response = to_json(&host.handle_line(&again));
    assert_eq!(response["status"], 400);
    assert_eq!(response["detail"], "This game is over");
}

#[test]
fn test_reset_and_list() {
    let mut host = host();
    let id = create(&mut host, r#"{"op":"create"}"#);
    create(&mut host, r#"{"op":"create"}"#);

    let play = format!(r#"{{"op":"play","id":"{}","action":{{"x":0,"y":0}}}}"#, id);
    host.handle_line(&play);

    let reset = format!(r#"{{"op":"reset","id":"{}","ai_symbol":"X"}}"#, id);
    let response = to_json(&host.handle_line(&reset));
    assert_eq!(response["game"]["id"], id.as_str());
    assert_eq!(response["game"]["ai_symbol"], "X");
    assert_eq!(response["game"]["state"][0][0], Value::Null);

    let list = to_json(&host.handle_line(r#"{"op":"list"}"#));
    assert_eq!(list["games"].as_array().unwrap().len(), 2);
}

#[test]
fn test_serve_writes_one_line_per_request() {
    let mut host = host();
    let input = "{\"op\":\"create\"}\n\nnot json\n{\"op\":\"list\"}\n";
    let mut output = Vec::new();

    host.serve(input.as_bytes(), &mut output).unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["status"], 200);
    assert_eq!(lines[1]["status"], 422);
    assert_eq!(lines[2]["games"].as_array().unwrap().len(), 1);
}
