mod change_message;
mod post_info;

pub use change_message::ChangeMessage;
pub use post_info::PostInfo;
