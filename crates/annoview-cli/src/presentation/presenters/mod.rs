pub mod config;
pub mod list;
pub mod question;

pub use config::present_config;
pub use list::{build_question_list, present_question_list};
pub use question::{
    EMPTY_STATE_MESSAGE, present_annotation_detail, present_empty_state, present_question,
    present_show,
};
