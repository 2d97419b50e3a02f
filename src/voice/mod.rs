pub mod listener;

pub use listener::{
    is_exit_phrase, listen_for_exit, spawn_exit_listener, ListenerExit, EXIT_KEYWORDS,
};
