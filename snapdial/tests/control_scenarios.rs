//! End-to-end control scenarios over a scripted transport

use rpc_client::MockTransport;
use serde_json::{json, Value};
use snapdial::{CommandOutcome, Dispatcher, Trigger};
use snapdial_api::ControlClient;

fn status_document() -> Value {
    json!({
        "server": {
            "groups": [{
                "id": "g1",
                "stream_id": "s1",
                "clients": [{"id": "c1", "config": {"volume": {"percent": 40, "muted": false}}}]
            }],
            "streams": [{"id": "s1"}, {"id": "s2"}]
        }
    })
}

#[test]
fn knob_session_reaches_the_expected_server_state() {
    let mock = MockTransport::new();
    // Seed fetch for the volume controller, then one fresh fetch per
    // stream advance.
    mock.push_result("Server.GetStatus", status_document());
    mock.push_result("Server.GetStatus", status_document());

    let client = ControlClient::with_transport(mock.clone());
    let mut dispatcher = Dispatcher::new(client, "c1", 5).expect("seed fetch");

    // Volume up from the server-reported 40.
    assert_eq!(
        dispatcher.handle(Trigger::VolumeUp).expect("volume up"),
        CommandOutcome::VolumeChanged(45)
    );
    assert_eq!(
        mock.calls_for("Client.SetVolume"),
        vec![Some(
            json!({"id": "c1", "volume": {"percent": 45, "muted": false}})
        )]
    );

    // Next stream cycles the group from s1 to s2.
    assert_eq!(
        dispatcher.handle(Trigger::NextStream).expect("advance"),
        CommandOutcome::StreamChanged("s2".to_string())
    );
    assert_eq!(
        mock.calls_for("Group.SetStream"),
        vec![Some(json!({"id": "g1", "stream_id": "s2"}))]
    );
}

#[test]
fn volume_commands_do_not_refetch_status() {
    let mock = MockTransport::new();
    mock.push_result("Server.GetStatus", status_document());

    let client = ControlClient::with_transport(mock.clone());
    let mut dispatcher = Dispatcher::new(client, "c1", 5).expect("seed fetch");

    dispatcher.handle(Trigger::VolumeUp).expect("volume up");
    dispatcher.handle(Trigger::VolumeDown).expect("volume down");

    // Only the construction-time seed fetch hit the wire.
    assert_eq!(mock.calls_for("Server.GetStatus").len(), 1);
}

#[test]
fn each_stream_advance_fetches_fresh_status() {
    let mock = MockTransport::new();
    mock.push_result("Server.GetStatus", status_document());

    let client = ControlClient::with_transport(mock.clone());
    let mut dispatcher = Dispatcher::new(client, "c1", 5).expect("seed fetch");

    // The server moved the group to s2 between the two presses; the
    // second advance must see that and pick s1, not recompute from s1's
    // old position.
    mock.push_result("Server.GetStatus", status_document());
    let mut moved = status_document();
    moved["server"]["groups"][0]["stream_id"] = json!("s2");
    mock.push_result("Server.GetStatus", moved);

    assert_eq!(
        dispatcher.handle(Trigger::NextStream).expect("first press"),
        CommandOutcome::StreamChanged("s2".to_string())
    );
    assert_eq!(
        dispatcher.handle(Trigger::NextStream).expect("second press"),
        CommandOutcome::StreamChanged("s1".to_string())
    );

    assert_eq!(
        mock.calls_for("Group.SetStream"),
        vec![
            Some(json!({"id": "g1", "stream_id": "s2"})),
            Some(json!({"id": "g1", "stream_id": "s1"})),
        ]
    );
}
