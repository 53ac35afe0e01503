// Adapters layer: reqwest-backed implementations of the external collaborators.

pub mod apps_script;
pub mod csv_source;
pub mod openai;

pub use apps_script::AppsScriptEndpoint;
pub use csv_source::CsvSheetSource;
pub use openai::OpenAiModel;
