use clap::Parser;
use friendpath::colors::{ColorScheme, Role};
use friendpath::display::{display_search_info, display_search_results};
use friendpath::json_output::print_json_output;
use friendpath::{Args, create_search_request, execute_search};
use friendpath_core::RobloxClient;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    let client = match RobloxClient::new() {
        Ok(client) => client,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    let search_request = match create_search_request(args, &client).await {
        Ok(request) => request,
        Err(error_message) => exit_with_error(&colors, &error_message),
    };

    let json_mode = search_request.search_args.json;
    if search_request.search_args.verbose && !json_mode {
        display_search_info(&search_request, &colors);
    }

    let spinner = create_spinner(search_request.search_args.quiet || json_mode);
    let search_result = execute_search(&client, search_request).await;
    spinner.finish_and_clear();

    if json_mode {
        if let Err(error) = print_json_output(&search_result) {
            exit_with_error(&colors, &error.to_string());
        }
    } else {
        display_search_results(search_result, &colors);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "friendpath_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Searching friend lists...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    eprintln!("{} {}", colors.paint("❌ Error:", Role::Error), message);
    std::process::exit(1);
}
