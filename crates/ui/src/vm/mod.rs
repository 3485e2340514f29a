mod progress_vm;
mod time_fmt;
mod topic_vm;

pub use progress_vm::{
    CategoryCardVm, OverallVm, ProgressTier, map_category_cards, motivational_message,
};
pub use time_fmt::{format_completion_date, format_date};
pub use topic_vm::{TopicItemVm, TopicPageVm, map_topic_items};
