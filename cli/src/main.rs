use clap::Parser;
use gridpath::colors::ColorScheme;
use gridpath::display::{display_search_info, display_search_results};
use gridpath::json_output::create_json_output;
use gridpath::{Args, GridPathApp};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let colors = ColorScheme::new(!args.no_color && !args.json);
    let mut app = GridPathApp::new(args);

    if app.args().verbose && !app.args().json {
        display_search_info(app.args(), &colors);
    }

    let search_result = app.run();

    if app.args().json {
        let output = create_json_output(&search_result, app.graph(), app.args());
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("{}", colors.error(&format!("❌ Error: {error}")));
                std::process::exit(1);
            }
        }
    } else {
        display_search_results(&search_result, app.graph(), app.args(), &colors);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
