mod change_listener;

pub use change_listener::{ChangeListener, ListenerReport};
