pub mod page;
pub mod path_ids;
pub mod validated_json;

pub use page::Page;
pub use path_ids::{CategoryId, QuestionId};
pub use validated_json::ValidatedJson;
