#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};
use typedconf::ports::log_port::LogPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Info,
}

#[derive(Default)]
pub struct RecordingLog {
    pub lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingLog {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn levels(&self) -> Vec<Level> {
        self.lines.lock().unwrap().iter().map(|(l, _)| *l).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl LogPort for RecordingLog {
    fn error(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Level::Error, message.to_string()));
    }

    fn info(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Level::Info, message.to_string()));
    }
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const MAIN_INI: &str = "[main]\nlog_level = DEBUG\nretries = 3\nenabled = yes\n";

pub const COMMENT_CHARS_INI: &str =
    "# settings\n[main]\n; secrets below\npassword = abc#123\ncolor = #ff0000\nurl = http://h/p;v=1\nretries = 3\n";

pub const FIREWALL_INI: &str = r#"
[LOG]
level = info
to_files = no
filepath = log
filename = easywall.log

[IPV6]
enabled = yes
icmp_allow_router_advertisement = true

[ACCEPTANCE]
enabled = on
duration = 120

[UWSGI]
http-socket = :12227
processes = 5
threads = 2.5
"#;
