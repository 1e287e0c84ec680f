// SPDX-License-Identifier: Apache-2.0

use wakeonlan::{WolConfig, WolSender};

// Usage: wol_send <MAC> [BROADCAST_ADDRESS] [PORT]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_log();
    let args: Vec<String> = std::env::args().collect();
    let Some(mac) = args.get(1) else {
        eprintln!("Usage: {} <MAC> [BROADCAST_ADDRESS] [PORT]", args[0]);
        std::process::exit(1);
    };

    let mut config = WolConfig::new();
    if let Some(port) = args.get(3) {
        config.set_port(port.parse()?);
    }
    let sender = WolSender::new(config);

    if let Some(broadcast) = args.get(2) {
        sender.send_to(broadcast, mac)?;
        println!("Magic packet for {mac} sent to {broadcast}");
    } else {
        sender.send(mac)?;
        println!("Magic packet for {mac} sent to all broadcast addresses");
    }
    Ok(())
}

fn enable_log() {
    env_logger::Builder::new()
        .filter(Some("wakeonlan"), log::LevelFilter::Debug)
        .init();
}
