use friendpath_core::{ConnectionOutcome, NodeId, SearchStats};

use crate::args::Args;
use crate::colors::{ColorScheme, Role};
use crate::search::{SearchRequest, SearchResult};

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🔗 Finding connection from {} to {}",
        colors.username(&request.from_name),
        colors.username(&request.to_name)
    );

    let args = &request.search_args;
    println!(
        "⚙️  Up to {} hops, {} friends per user, {} ms between requests",
        colors.number(&args.max_depth.to_string()),
        colors.number(&args.max_friends.to_string()),
        colors.number(&args.delay_ms.to_string())
    );

    if let Some(seconds) = args.timeout_secs {
        println!("⏱️  Giving up after {} sec", colors.number(&seconds.to_string()));
    }
}

pub fn display_search_results(result: SearchResult, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.outcome {
        ConnectionOutcome::Found { path, .. } => {
            display_successful_path(
                &result.outcome,
                path,
                &result.path_names,
                &result.display_options,
                colors,
            );
        }
        ConnectionOutcome::NotFound { .. } => {
            println!(
                "{} {} and {} within {} hops",
                colors.outcome_banner(&result.outcome),
                colors.username(&result.from_name),
                colors.username(&result.to_name),
                result.display_options.max_depth
            );
        }
        ConnectionOutcome::TimedOut { .. } => {
            println!(
                "{} {} and {}",
                colors.outcome_banner(&result.outcome),
                colors.username(&result.from_name),
                colors.username(&result.to_name)
            );
        }
    }

    if is_verbose {
        display_search_statistics(result.outcome.stats(), colors);
    }
}

fn display_successful_path(
    outcome: &ConnectionOutcome,
    path: &[NodeId],
    path_names: &[String],
    display_options: &Args,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        println!(
            "{} Found connection with {} hops:\n",
            colors.outcome_banner(outcome),
            colors.number(&(path.len() - 1).to_string())
        );
    }

    let path_flow = path_names
        .iter()
        .map(|name| colors.username(name).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    if display_options.quiet {
        return;
    }

    println!();
    for (step_index, (user_id, name)) in path.iter().zip(path_names).enumerate() {
        let step_number = format!("{}.", step_index + 1);
        println!(
            "{}",
            format_path_step(&step_number, *user_id, name, display_options, colors)
        );
    }
}

pub fn format_path_step(
    step_number: &str,
    user_id: NodeId,
    username: &str,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:2} {}",
        colors.paint(step_number, Role::StepNumber),
        colors.username(username)
    );

    if display_options.show_ids {
        formatted_line.push_str(&format!(" {}", colors.user_id(user_id)));
    }

    if !display_options.hide_urls {
        let url = colors.paint(&profile_url(user_id), Role::Url);
        formatted_line.push_str(&format!(" - {}", url));
    }

    formatted_line
}

pub fn profile_url(user_id: NodeId) -> String {
    format!("https://www.roblox.com/users/{}/profile", user_id)
}

fn display_search_statistics(stats: &SearchStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Expanded {} users, discovered {} in {} sec",
        colors.paint("📊", Role::Stats),
        colors.number(&format_number(stats.nodes_expanded)),
        colors.number(&format_number(stats.nodes_discovered)),
        colors.number(&format!("{:.3}", stats.elapsed.as_secs_f64()))
    );
}

pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}
