fn main() {
    let matches = firedash::cli::parse_args();
    firedash::boot::init_logger(matches.get_one::<String>("log-file").map(String::as_str));

    match firedash::cli::run(&matches) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
        }
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
