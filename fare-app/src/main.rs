use std::process::ExitCode;

use clap::Parser;
use fare_app::cli::{CitiesArgs, Cli, Command, SearchArgs};
use fare_app::{SearchOutcome, TerminalView};
use fare_chart::Rendered;
use fare_client::Config;
use fare_core::lookup::populate_suggestions;
use fare_core::SuggestionList;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fare_app=info,fare_client=info,fare_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config_dir)?;
    tracing::info!("Using fare API at {}", config.api.base_url);

    match cli.command {
        Command::Cities(args) => cities(&config, &args).await,
        Command::Search(args) => search(config, &args).await,
    }
}

async fn cities(config: &Config, args: &CitiesArgs) -> anyhow::Result<ExitCode> {
    let api = fare_app::api(config)?;
    let mut origins = SuggestionList::new();
    let mut destinations = SuggestionList::new();

    if populate_suggestions(&api, &mut origins, &mut destinations).await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    let prefix = args.prefix.as_deref().unwrap_or("");
    let origins = origins.matching(prefix);
    let destinations = destinations.matching(prefix);

    if args.json {
        let body = serde_json::json!({ "origins": origins, "destinations": destinations });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("Origins: {}", origins.join(", "));
        println!("Destinations: {}", destinations.join(", "));
    }
    Ok(ExitCode::SUCCESS)
}

async fn search(mut config: Config, args: &SearchArgs) -> anyhow::Result<ExitCode> {
    if let Some(render) = args.render {
        config.form.render = render.into();
    }

    let today = chrono::Local::now().date_naive();
    let view = TerminalView::new(std::io::stdout(), args.json);
    let mut app = fare_app::app(&config, view, today)?;

    app.load().await;
    args.apply(app.filter_mut())?;
    tracing::debug!(
        "Stay durations selected: {:?}",
        app.filter().stay_durations.selected_labels()
    );

    match app.submit().await {
        SearchOutcome::Rendered(Rendered::Error) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}
