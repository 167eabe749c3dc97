//! Single integration test binary.

mod helpers;
mod label_properties;
mod print_flow;
