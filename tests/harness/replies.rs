//! Canned responders for MockServer

use super::server::Reply;

pub const WELCOME: &str =
    r#"{"cmd":"SYSTEM_MSG","payload":{"message":"Connected to BattleShip TCP Server"}}"#;

/// Replies the way the reference server's command dispatch does
pub fn battleship(request: Option<&str>) -> Reply {
    let Some(msg) = request else {
        return Reply::text(WELCOME);
    };

    let reply = if msg.contains(r#""cmd":"REGISTER""#) {
        r#"{"cmd":"REGISTER_RESPONSE","payload":{"success":true,"message":"Registration handled by NodeJS backend"}}"#.to_string()
    } else if msg.contains(r#""cmd":"LOGIN""#) {
        r#"{"cmd":"LOGIN_RESPONSE","payload":{"success":true,"message":"Login handled by NodeJS backend"}}"#.to_string()
    } else if msg.contains(r#""cmd":"MOVE""#) {
        r#"{"cmd":"MOVE_RESULT","payload":{"coord":"5,5","result":"HIT","ship_sunk":null}}"#.to_string()
    } else if msg.contains(r#""cmd":"HEARTBEAT""#) {
        r#"{"cmd":"HEARTBEAT_ACK","payload":{"timestamp":1760400000}}"#.to_string()
    } else {
        r#"{"cmd":"SYSTEM_MSG","payload":{"code":400,"message":"Unknown command"}}"#.to_string()
    };
    Reply::text(reply)
}

/// Same fixed text for every client, including listen-only ones
pub fn fixed(text: &'static str) -> impl Fn(Option<&str>) -> Reply + Send + Sync + 'static {
    move |_| Reply::text(text)
}

/// Fixed text for command senders, silence for listen-only clients
pub fn command_only(text: &'static str) -> impl Fn(Option<&str>) -> Reply + Send + Sync + 'static {
    move |request| match request {
        Some(_) => Reply::text(text),
        None => Reply::Silent,
    }
}
