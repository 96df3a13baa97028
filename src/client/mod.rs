// Client-side counterpart of the API: upload state machine and the shared
// analysis store the results view reads from.

pub mod api;
pub mod state;
pub mod upload;

pub use api::ApiClient;
pub use state::{AnalysisState, AnalysisStore};
pub use upload::{UploadPhase, Uploader};
