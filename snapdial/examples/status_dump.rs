//! Fetch and print a summary of the server's status document.
//!
//! Honors `SNAPDIAL_HOST` and `SNAPDIAL_PORT`; no client id required.

use std::env;

use snapdial::logging::{self, LoggingMode};
use snapdial_api::ControlClient;

fn main() {
    logging::init_logging(LoggingMode::Development).expect("logging init");

    let host = env::var("SNAPDIAL_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("SNAPDIAL_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(1780);

    let client = ControlClient::new(host, port);
    let status = match client.get_status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("failed to get server status: {error}");
            std::process::exit(1);
        }
    };

    for group in &status.server.groups {
        println!("group {} (stream {})", group.id, group.stream_id);
        for member in &group.clients {
            let volume = member.volume();
            println!(
                "  {} [{}] {}%{}",
                member.display_name(),
                if member.connected { "online" } else { "offline" },
                volume.percent,
                if volume.muted { " muted" } else { "" },
            );
        }
    }
    for stream in &status.server.streams {
        match stream.metadata() {
            Some(meta) if !meta.is_empty() => println!(
                "stream {}: {} - {}",
                stream.id,
                meta.artist.as_deref().unwrap_or("?"),
                meta.title.as_deref().unwrap_or("?"),
            ),
            _ => println!("stream {}", stream.id),
        }
    }
}
