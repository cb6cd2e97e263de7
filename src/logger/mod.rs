pub mod animated_logger;
pub mod result_printer;
