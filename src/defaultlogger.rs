use crate::logging::{set_boxed_messenger, Messenger};
use crate::utils::Result;

pub struct MessengerDefault {
    verbose: bool,
}

impl MessengerDefault {
    pub fn new(verbose: bool) -> MessengerDefault {
        MessengerDefault { verbose }
    }
}

fn print_lines(prefix: &str, message: &str) {
    let lns = message.split("\n");
    for (i, l) in lns.enumerate() {
        println!("{} {}", (if i == 0 { prefix } else { "    " }), l);
    }
}

impl Messenger for MessengerDefault {
    fn message(&self, message: &str) {
        print_lines("MSG:", message);
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            print_lines("DBG:", message);
        }
    }
}

pub fn register_messenger_default(verbose: bool) -> Result<()> {
    let msg = Box::new(MessengerDefault::new(verbose));
    set_boxed_messenger(msg)?;
    Ok(())
}
