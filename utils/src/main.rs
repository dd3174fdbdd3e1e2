use clap::Parser;
use layerstyles::{message, defaultlogger::register_messenger_default};

use layerstyles_utils::commands::{Cli,Defaults,RunCmd};


fn main() {

    let cli = Cli::parse();

    register_messenger_default(cli.verbose).expect("!!");

    let defaults = match Defaults::new() {
        Ok(d) => d,
        Err(e) => {
            message!("failed to load default styles {:?}", e);
            std::process::exit(1);
        }
    };

    match cli.run(&defaults) {
        Ok(()) => {},
        Err(e) => {
            message!("failed {}", e);
            std::process::exit(1);
        }
    }
}
