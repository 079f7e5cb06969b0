//! The program record page: data model, share-dialog state and the view.

mod disclosure;
pub use disclosure::ShareDisclosure;

mod model;
pub use model::{GradeRecord, Learner, Program, ProgramRecordData, RecordError};

mod view;
pub use view::{visible_sections, ProgramRecord, RecordSection};
