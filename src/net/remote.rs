//! src/net/remote.rs
//!
//! Line-based TCP feed: external samplers push throughput readings and read
//! back the chart options.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread;

use tracing::{debug, error, info, warn};

use crate::graph::{ChartHandle, NetworkData, SharedChart, push_sample};

/// Longest command line accepted, newline included.
pub const MAX_LINE: usize = 256;

/// One reply line, and whether the connection should close after it.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub line: String,
    pub close: bool,
}

impl Reply {
    fn ok(body: impl AsRef<str>) -> Self {
        let body = body.as_ref();
        let line = if body.is_empty() {
            "OK".to_string()
        } else {
            format!("OK {}", body)
        };
        Self { line, close: false }
    }

    fn err(msg: impl AsRef<str>) -> Self {
        Self {
            line: format!("ERR {}", msg.as_ref()),
            close: false,
        }
    }
}

/// Start the feed server and spawn a handler thread per client.
pub fn remote_server(addr: &str, chart: SharedChart, window: usize) {
    let listener = match TcpListener::bind(addr) {
        Ok(l) => l,
        Err(e) => {
            error!("remote_server: bind error {} on {}", e, addr);
            return;
        }
    };
    info!("sample feed listening on {}", addr);

    for stream in listener.incoming() {
        match stream {
            Ok(s) => {
                let chart = chart.clone();
                thread::spawn(move || handle_remote_client(s, chart, window));
            }
            Err(e) => {
                warn!("remote_server: accept error: {}", e);
            }
        }
    }
}

/// Serve one client until it quits or disconnects.
pub fn handle_remote_client(mut s: TcpStream, chart: SharedChart, window: usize) {
    let peer = s
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<peer?>".into());
    let reader = match s.try_clone() {
        Ok(r) => r,
        Err(e) => {
            warn!("{}: cannot clone stream: {}", peer, e);
            return;
        }
    };
    debug!("{} connected", peer);
    let mut rdr = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        match (&mut rdr).take(MAX_LINE as u64).read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if !line.ends_with('\n') && line.len() >= MAX_LINE {
            warn!("{}: line longer than {} bytes", peer, MAX_LINE);
            let _ = s.write_all(b"ERR line too long\n");
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        let reply = execute(raw, &chart, window);
        if s.write_all(format!("{}\n", reply.line).as_bytes()).is_err() || reply.close {
            break;
        }
    }

    debug!("{} disconnected", peer);
    let _ = s.shutdown(Shutdown::Both);
}

/// Run one command line against the chart.
///
/// Commands:
/// - `push <timestamp> <transmitted_rate> <received_rate>`
/// - `options`
/// - `series <idx>`
/// - `quit`
pub fn execute(raw: &str, chart: &SharedChart, window: usize) -> Reply {
    let parts: Vec<_> = raw.split_whitespace().collect();
    if parts.is_empty() {
        return Reply::err("empty");
    }

    match parts[0].to_lowercase().as_str() {
        "push" if parts.len() == 4 => {
            let nums: Result<Vec<u64>, _> = parts[1..].iter().map(|p| p.parse::<u64>()).collect();
            let Ok(nums) = nums else {
                return Reply::err("args");
            };
            let sample = NetworkData::new(nums[0], nums[1], nums[2]);
            match push_sample(chart, &sample, window) {
                Ok(()) => Reply::ok(""),
                Err(e) => Reply::err(e.to_string()),
            }
        }

        "options" if parts.len() == 1 => {
            let Ok(guard) = chart.read() else {
                return Reply::err("poisoned");
            };
            match serde_json::to_string(guard.options()) {
                Ok(json) => Reply::ok(json),
                Err(e) => Reply::err(e.to_string()),
            }
        }

        "series" if parts.len() == 2 => {
            let Ok(idx) = parts[1].parse::<usize>() else {
                return Reply::err("idx");
            };
            let Ok(guard) = chart.read() else {
                return Reply::err("poisoned");
            };
            match guard.series_data(idx).map(|points| serde_json::to_string(points)) {
                Some(Ok(json)) => Reply::ok(json),
                Some(Err(e)) => Reply::err(e.to_string()),
                None => Reply::err(format!("no series {}", idx)),
            }
        }

        "quit" => Reply {
            line: "OK bye".to_string(),
            close: true,
        },

        _ => Reply::err(format!("unknown {}", parts.join(" "))),
    }
}
