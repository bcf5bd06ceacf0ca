use crate::config::DriverConfig;
use crate::shared::Snapshot;
use crossbeam_channel as cbc;
use log::{error, warn};
use std::io::BufRead;
use std::thread::Builder;

/**
 * Console stand-in for the rendering and input layer.
 *
 * The driver owns the boundary channels of the simulation: a named
 * `console_input` thread turns stdin lines into call-button presses
 * (a bare floor number per line; `q`, `quit` or end-of-input shuts the
 * simulation down), while the driver loop prints the state snapshots it
 * receives as JSON lines for an external renderer to consume. It holds
 * no simulation logic.
 *
 * # Fields
 * - `print_snapshots`:     Whether received snapshots are echoed to stdout.
 * - `press_tx`:            Sends call-button presses to the FSM.
 * - `snapshot_rx`:         Receives state snapshots from the FSM.
 * - `terminate_tx`:        Sends the shutdown signal.
 */

pub struct ConsoleDriver {
    print_snapshots: bool,
    press_tx: cbc::Sender<u8>,
    snapshot_rx: cbc::Receiver<Snapshot>,
    terminate_tx: cbc::Sender<()>,
}

impl ConsoleDriver {
    pub fn new(
        config: &DriverConfig,
        press_tx: cbc::Sender<u8>,
        snapshot_rx: cbc::Receiver<Snapshot>,
        terminate_tx: cbc::Sender<()>,
    ) -> ConsoleDriver {
        ConsoleDriver {
            print_snapshots: config.print_snapshots,
            press_tx,
            snapshot_rx,
            terminate_tx,
        }
    }

    pub fn run(self) {
        let press_tx = self.press_tx.clone();
        let terminate_tx = self.terminate_tx.clone();

        // Forward stdin lines as call-button presses
        let input_thread = Builder::new().name("console_input".into());
        input_thread
            .spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(_) => break,
                    };
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    if input == "q" || input == "quit" {
                        break;
                    }
                    match input.parse::<u8>() {
                        Ok(floor) => {
                            if press_tx.send(floor).is_err() {
                                break;
                            }
                        }
                        Err(_) => warn!("unrecognized input: {:?}", input),
                    }
                }
                let _ = terminate_tx.send(());
            })
            .unwrap();

        // Print snapshots until the FSM hangs up
        loop {
            match self.snapshot_rx.recv() {
                Ok(snapshot) => {
                    if self.print_snapshots {
                        match serde_json::to_string(&snapshot) {
                            Ok(line) => println!("{}", line),
                            Err(e) => error!("failed to serialize snapshot: {}", e),
                        }
                    }
                }
                Err(_) => break,
            }
        }
    }
}
