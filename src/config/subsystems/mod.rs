pub mod parser;
pub mod generator;
pub mod processor;
pub mod report;

pub use parser::ParserConfig;
pub use generator::GeneratorConfig;
pub use processor::ProcessorConfig;
pub use report::{ReportConfig, OutputFormat};
