use crate::utils::{Error, Result};

use std::sync::OnceLock;

static MESSENGER: OnceLock<&'static dyn Messenger> = OnceLock::new();

pub fn set_messenger(logger: &'static dyn Messenger) -> Result<()> {
    set_messenger_inner(|| logger)
}

pub fn set_boxed_messenger(logger: Box<dyn Messenger>) -> Result<()> {
    set_messenger_inner(|| Box::leak(logger))
}

fn set_messenger_inner<F>(make_logger: F) -> Result<()>
where
    F: FnOnce() -> &'static dyn Messenger,
{
    let mut installed = false;
    MESSENGER.get_or_init(|| {
        installed = true;
        make_logger()
    });
    if installed {
        Ok(())
    } else {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "failed to set messenger",
        )))
    }
}

pub fn messenger() -> &'static dyn Messenger {
    match MESSENGER.get() {
        Some(m) => *m,
        None => {
            static NOP: NopMessenger = NopMessenger;
            &NOP
        }
    }
}

pub trait Messenger: Sync + Send {
    fn message(&self, message: &str);

    /// Chatter about lookups and loading. Dropped unless the messenger
    /// opts in.
    fn debug(&self, _message: &str) {}
}

struct NopMessenger;
impl Messenger for NopMessenger {
    fn message(&self, _message: &str) {}
}

#[macro_export]
macro_rules! message {
    ($($arg:tt)*) => {
        $crate::logging::messenger().message(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_message {
    ($($arg:tt)*) => {
        $crate::logging::messenger().debug(&format!($($arg)*))
    };
}
