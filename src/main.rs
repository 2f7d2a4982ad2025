/*
Demo runner for the PIjN random module: reads config.json, then prints one
random string, one OTP and one weighted pick.
*/

use std::process::ExitCode;
use tracing::{error, info, warn};

use pijn_random::utils::{init_tracing, load_config};
use pijn_random::{generate_otp, generate_random_string, pick_map_key};



fn main() -> ExitCode {
    let config = match load_config("config.json") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.logs_dir, &config.log_name) {
        eprintln!("Can't initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    info!(target: "main", "Random module version: {}", env!("CARGO_PKG_VERSION"));

    let charsets = config.charset_strs();
    let random_str = generate_random_string(config.string_length, &charsets);
    info!(target: "main", "Generated random string of {} chars", random_str.chars().count());
    println!("random string: {}", random_str);

    match generate_otp(Some(config.otp_length)) {
        Ok(otp) => {
            info!(target: "main", "Generated OTP of {} digits", otp.len());
            println!("otp: {}", otp);
        }
        Err(e) => {
            error!(target: "main", "OTP generation failed: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    match pick_map_key(&config.weights) {
        Some(key) => println!("weighted pick: {}", key),
        None => {
            warn!(target: "main", "No valid weights configured, nothing to pick");
            println!("weighted pick: <none>");
        }
    }

    ExitCode::SUCCESS
}
