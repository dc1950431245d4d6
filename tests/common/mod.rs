#![allow(dead_code)]

use std::error::Error;

pub use morphpoem_test_utils::builders::ConfigFileBuilder;
pub use morphpoem_test_utils::fake_runner::FakeRunner;
pub use morphpoem_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn Error>>;

/// Decode what a pipeline wrote into an in-memory sink.
pub fn written(sink: Vec<u8>) -> String {
    String::from_utf8(sink).expect("pipeline output is UTF-8")
}
