fn main() {
    pretty_env_logger::init();

    match budgetcalc::cli::run_cli() {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
