//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use inventory_planner::model::{Product, ProductionSuggestion, RawMaterial};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn material(id: &str, name: &str, stock: u32) -> RawMaterial {
    RawMaterial {
        id: id.into(),
        name: name.into(),
        stock_quantity: stock,
    }
}

pub fn product(id: &str, name: &str, value: &str) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        value: dec(value),
        raw_materials: vec![],
    }
}

pub fn suggestion(name: &str, quantity: u32, total: &str) -> ProductionSuggestion {
    ProductionSuggestion::new(name, quantity, dec(total))
}

/// Collects formatted `tracing` output for assertions.
///
/// Install it with [`LogCapture::install`]; the guard scopes the subscriber to the
/// current thread, which is where a `#[tokio::test]` runtime runs.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let make_writer = {
            let capture = self.clone();
            move || capture.clone()
        };
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_target(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(make_writer)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// Lines logged at `ERROR`.
    pub fn errors(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_owned)
            .collect()
    }
}
