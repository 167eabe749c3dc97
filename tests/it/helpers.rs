use product_label_printer::{BarcodeEncoder, BarcodeFormat, BarcodeParams, EncodingError, Symbol};
use std::cell::RefCell;

/// Route `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("product_label_printer=debug"))
        .with_test_writer()
        .try_init();
}

/// Encoder stub that records calls and fails on demand.
#[derive(Default)]
pub struct RecordingEncoder {
    pub fail: bool,
    pub calls: RefCell<Vec<(String, BarcodeFormat, BarcodeParams)>>,
}

impl BarcodeEncoder for RecordingEncoder {
    fn encode(
        &self,
        data: &str,
        format: BarcodeFormat,
        params: &BarcodeParams,
    ) -> Result<Symbol, EncodingError> {
        self.calls.borrow_mut().push((data.to_string(), format, params.clone()));
        if self.fail {
            return Err(EncodingError::InvalidCharacter { format });
        }
        Ok(Symbol {
            format,
            modules: vec![true, false, true],
            text: data.to_string(),
            params: params.clone(),
        })
    }
}
