/// Plain message error used during boot and configuration handling.
pub mod custom_error;
