//! Simulated rotary knob driving a dispatcher.
//!
//! A real deployment replaces the spawned thread with the GPIO
//! collaborator holding the sending half of the channel. Requires a
//! reachable server and a configured client id (`SNAPDIAL_CLIENT_ID` or
//! the id file).

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use snapdial::{logging, Config, Dispatcher, Trigger};
use snapdial_api::ControlClient;

fn main() {
    logging::init_logging_from_env().expect("logging init");

    let config = Config::from_env().unwrap_or_else(|error| {
        eprintln!("{error}");
        std::process::exit(1);
    });

    let client = ControlClient::with_timeout(&config.host, config.port, config.timeout);
    let mut dispatcher = Dispatcher::new(client, config.client_id, config.volume_step)
        .unwrap_or_else(|error| {
            eprintln!("failed to start controller: {error}");
            std::process::exit(1);
        });

    let (triggers, queue) = mpsc::channel();
    thread::spawn(move || {
        let script = [
            Trigger::VolumeUp,
            Trigger::VolumeUp,
            Trigger::NextStream,
            Trigger::VolumeDown,
        ];
        for trigger in script {
            triggers.send(trigger).ok();
            thread::sleep(Duration::from_millis(400));
        }
    });

    for trigger in queue {
        println!("{}", dispatcher.dispatch(trigger));
    }
}
