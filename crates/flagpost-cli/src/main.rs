mod config;
mod extract;

use std::rc::Rc;

use clap::{Parser, Subcommand};
use flagpost_core::{ArticleExtractor, MemoryStorage};
use flagpost_dom::{node, Document};
use flagpost_i18n::{primary_subtag, HostEnv, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
use flagpost_locate::locate_container;
use flagpost_place::{Widget, WidgetConfig};

use crate::config::FlagpostConfig;
use crate::extract::DemoExtractor;

#[derive(Parser)]
#[command(name = "flagpost")]
#[command(about = "Annotate a web page with illegal-content report badges")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Annotate {
        #[arg(help = "URL or local HTML file to annotate")]
        target: String,
        #[arg(short, long, help = "Where to write the annotated HTML")]
        output: Option<String>,
        #[arg(short, long, help = "Force a language code")]
        lang: Option<String>,
        #[arg(long, help = "Print the placement report as JSON")]
        json: bool,
        #[arg(short = 'f', long, default_value = "flagpost.toml", help = "Path to config file")]
        config: String,
    },
    Langs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flagpost=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Annotate {
            target,
            output,
            lang,
            json,
            config: config_path,
        } => run_annotate(target, output, lang, json, &config_path).await,
        Commands::Langs => run_langs(),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_langs() -> Result<(), Box<dyn std::error::Error>> {
    for code in SUPPORTED_LANGUAGES {
        if *code == DEFAULT_LANGUAGE {
            println!("{} (default)", code);
        } else {
            println!("{}", code);
        }
    }
    Ok(())
}

async fn run_annotate(
    target: String,
    output: Option<String>,
    lang: Option<String>,
    json: bool,
    config_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = match FlagpostConfig::from_file(config_path) {
        Ok(cfg) => cfg,
        Err(_) => {
            tracing::debug!("no config at {}, using defaults", config_path);
            FlagpostConfig::default()
        }
    };

    let html = load_target(&target, &cfg.user_agent).await?;
    let doc = Rc::new(Document::parse(&html)?);

    let env = HostEnv {
        language: std::env::var("LANG").ok().map(|l| primary_subtag(&l)),
        languages: cfg.languages.clone(),
    };
    let widget_config = WidgetConfig {
        forced_language: lang.or(cfg.language.clone()),
        comment_class: cfg.comment_class.clone(),
        comment_class_suffix: cfg.comment_class_suffix.clone(),
    };

    let widget = Widget::new(
        doc.clone(),
        Rc::new(DemoExtractor),
        Rc::new(MemoryStorage::new()),
        env,
        widget_config,
    );
    widget.init();
    let report = widget.init_badges().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n--- annotation results for {} ---", target);
        println!("language: {}", widget.language());
        println!("title badges: {}", report.title_badges);
        println!("comment badges: {}", report.comment_badges);
        println!("footer badges: {}", report.footer_badges);
        print_container(&doc);
    }

    let output_path = output.unwrap_or(cfg.output);
    std::fs::write(&output_path, doc.serialize()?)?;
    println!("annotated page written to {}", output_path);

    Ok(())
}

fn print_container(doc: &Document) {
    let snapshot = match doc.snapshot() {
        Ok(s) => s,
        Err(_) => return,
    };
    let article = match DemoExtractor.extract(&snapshot) {
        Ok(Some(a)) => a,
        _ => return,
    };
    match locate_container(doc, &article.body_text) {
        Some(container) => println!(
            "content container: <{}>",
            node::tag_name(&container).unwrap_or_default()
        ),
        None => println!("content container: not found"),
    }
}

async fn load_target(target: &str, user_agent: &str) -> Result<String, Box<dyn std::error::Error>> {
    if target.starts_with("http://") || target.starts_with("https://") {
        let parsed = url::Url::parse(target)?;
        tracing::info!("fetching {}", parsed);
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(client.get(parsed).send().await?.text().await?)
    } else {
        Ok(std::fs::read_to_string(target)?)
    }
}
