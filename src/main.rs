use clap::Parser;
use event_toolbox::config::{Command, TomlConfig};
use event_toolbox::core::{export, roster::sample_names};
use event_toolbox::domain::ports::Storage;
use event_toolbox::utils::validation::{validate_file_extension, Validate};
use event_toolbox::utils::{error::ToolboxError, logger};
use event_toolbox::{AppConfig, CliConfig, DrawSession, GeminiNamer, GroupingEngine, LocalStorage, Roster};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting event-toolbox CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let file_config = match &cli.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };
    let config = AppConfig::resolve(file_config.as_ref());
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let roster = build_roster(&cli).await?;
    tracing::info!("Roster holds {} participants", roster.len());

    if let Err(e) = run_command(&cli, &config, roster).await {
        tracing::error!("❌ Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Assemble the roster from the demo list, inline names and/or an imported
/// file. Pasted text and file content go through the same parsing rule.
async fn build_roster(cli: &CliConfig) -> event_toolbox::Result<Roster> {
    let mut roster = Roster::new();

    if cli.sample {
        let added = roster.add_names(sample_names());
        tracing::info!("Loaded {} demo names", added);
    }

    if let Some(names) = &cli.names {
        let added = roster.add_raw(names);
        tracing::info!("Added {} names from --names", added);
    }

    if let Some(input) = &cli.input {
        validate_file_extension("input", input, &["txt", "csv"])?;
        let storage = LocalStorage::new(".".to_string());
        let data = storage.read_file(input).await?;
        let text = String::from_utf8_lossy(&data);
        let added = roster.add_raw(&text);
        // Zero valid names is not an error, the file simply adds nothing.
        tracing::info!("Imported {} names from {}", added, input);
    }

    Ok(roster)
}

async fn run_command(
    cli: &CliConfig,
    config: &AppConfig,
    mut roster: Roster,
) -> event_toolbox::Result<()> {
    match &cli.command {
        Command::Roster { dedupe, export } => {
            run_roster(cli, &mut roster, *dedupe, *export).await
        }
        Command::Draw {
            count,
            repeatable,
            fast,
        } => run_draw(&roster, *count, *repeatable || config.default_repeatable, *fast).await,
        Command::Group {
            size,
            theme,
            export,
        } => {
            let size = (*size).unwrap_or(config.default_group_size);
            let theme = theme.as_deref().unwrap_or(&config.default_theme);
            run_group(cli, config, &roster, size, theme, *export).await
        }
    }
}

async fn run_roster(
    cli: &CliConfig,
    roster: &mut Roster,
    dedupe: bool,
    export_csv: bool,
) -> event_toolbox::Result<()> {
    if dedupe {
        let removed = roster.dedupe();
        println!("移除重複項: {} 筆", removed);
    }

    let duplicates = roster.duplicate_ids();
    println!("目前名單 ({} 人):", roster.len());
    for p in roster.iter() {
        if duplicates.contains(&p.id) {
            println!("  {} ⚠ 重複", p.name);
        } else {
            println!("  {}", p.name);
        }
    }

    if export_csv {
        let csv = export::roster_csv(&roster.names());
        let filename = export::roster_filename();
        let storage = LocalStorage::new(cli.output_path.clone());
        storage.write_file(&filename, csv.as_bytes()).await?;
        println!("📁 名單已匯出: {}/{}", cli.output_path, filename);
    }

    Ok(())
}

async fn run_draw(
    roster: &Roster,
    count: usize,
    repeatable: bool,
    fast: bool,
) -> event_toolbox::Result<()> {
    let mut session = DrawSession::new(roster.names());
    session.set_repeatable(repeatable)?;
    let mut rng = rand::rng();

    for round in 1..=count {
        let ticket = match session.start(&mut rng) {
            Ok(ticket) => ticket,
            Err(ToolboxError::PoolExhausted) => {
                println!("名單已抽完！({} 次抽籤後)", round - 1);
                break;
            }
            Err(e) => return Err(e),
        };

        if fast {
            let winner = session.settle()?;
            println!("🏆 第 {} 位中獎: {}", round, winner);
            continue;
        }

        // 減速動畫：純展示，結果在 start() 時已決定
        for frame in &ticket.frames {
            print!("\r  {:<24}", frame.name);
            let _ = std::io::stdout().flush();
            tokio::time::sleep(frame.delay).await;
        }
        let winner = session.settle()?;
        println!("\r🏆 第 {} 位中獎: {:<24}", round, winner);
    }

    if !session.winners().is_empty() {
        println!("中獎名單 (新到舊): {}", session.winners().join(", "));
        if !repeatable {
            println!("剩餘名額: {}", session.available().len());
        }
    }

    Ok(())
}

async fn run_group(
    cli: &CliConfig,
    config: &AppConfig,
    roster: &Roster,
    size: usize,
    theme: &str,
    export_csv: bool,
) -> event_toolbox::Result<()> {
    let namer = GeminiNamer::from_config(config)?;
    let engine = GroupingEngine::new(namer);
    let mut rng = rand::rng();

    let groups = engine.run(&roster.names(), size, theme, &mut rng).await?;

    for group in &groups {
        println!("{} ({} 人)", group.name, group.members.len());
        for (i, member) in group.members.iter().enumerate() {
            println!("  {}. {}", i + 1, member);
        }
    }

    if export_csv {
        let csv = export::groups_csv(&groups);
        let filename = export::groups_filename();
        let storage = LocalStorage::new(cli.output_path.clone());
        storage.write_file(&filename, csv.as_bytes()).await?;
        println!("📁 分組結果已匯出: {}/{}", cli.output_path, filename);
    }

    Ok(())
}
