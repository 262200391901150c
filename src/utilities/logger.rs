use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use colored::{Color, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};
use time::macros::format_description;

const FILENAME: &str = "venn-client.log";

struct Logger {
    file: Mutex<File>,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // dependencies only get to log at info and above
        let max_level = match metadata.target().split("::").next().unwrap() {
            "venn_client" => Level::Debug,
            _ => Level::Info,
        };

        metadata.level() <= max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = time::OffsetDateTime::now_utc()
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
            .unwrap();
        let level = record.level();
        let args = record.args();

        let color = match level {
            Level::Error => Color::BrightRed,
            Level::Warn => Color::BrightYellow,
            Level::Info => Color::BrightCyan,
            Level::Debug => Color::BrightMagenta,
            Level::Trace => Color::BrightGreen,
        };

        println!(
            "{} {} {args}",
            timestamp.color(Color::BrightBlack),
            level.as_str().color(color)
        );
        writeln!(
            self.file.lock().unwrap(),
            "{timestamp} {level} [{}] {args}",
            record.target()
        )
        .unwrap();
    }

    fn flush(&self) {}
}

pub fn init() {
    log::set_max_level(LevelFilter::Debug);

    let file =
        OpenOptions::new().write(true).truncate(true).create(true).open(FILENAME).unwrap();
    log::set_boxed_logger(Box::new(Logger { file: Mutex::new(file) })).unwrap();
}
