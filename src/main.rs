// ==========================================
// 玻璃窑炉烧制曲线系统 - 命令行入口
// ==========================================
// 子命令:
// - generate: 生成 5 段模板曲线
// - glasses:  列出数据集中的玻璃
// - config:   读写 config_kv 配置
// ==========================================

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

use kiln_curve::config::{ConfigManager, GeneratorSettings};
use kiln_curve::dataset::GlassPropertiesTable;
use kiln_curve::domain::{FiringType, TemplateRequest, TemplateStage};
use kiln_curve::{logging, CurveApi};

#[derive(Parser)]
#[command(name = "kiln-curve", version, about = "玻璃窑炉烧制曲线生成")]
struct Cli {
    /// 以 JSON 格式输出日志
    #[arg(long, global = true)]
    json_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 生成模板曲线
    Generate(GenerateArgs),

    /// 列出数据集中的玻璃
    Glasses(SourceArgs),

    /// 配置管理
    Config {
        /// 配置数据库路径
        #[arg(long)]
        config_db: String,

        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// 数据集 JSON 文件（缺省时读取配置 dataset_path）
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// 配置数据库路径
    #[arg(long)]
    config_db: Option<String>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// 玻璃名称
    #[arg(long)]
    glass: String,

    /// 烧制方式: f / s / t
    #[arg(long)]
    firing: FiringType,

    /// 炉型（缺省使用配置默认值）
    #[arg(long)]
    oven: Option<String>,

    /// 半径 (cm)
    #[arg(long)]
    radius: u32,

    /// 层数
    #[arg(long)]
    layers: u32,

    /// 顶温保温（分钟）
    #[arg(long)]
    hold: Option<u32>,

    /// 室温 (°C)
    #[arg(long, allow_hyphen_values = true)]
    room_temp: Option<i32>,

    /// 曲线名称（指定时输出完整模板记录）
    #[arg(long)]
    name: Option<String>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// 读取配置
    Get { key: String },
    /// 写入配置
    Set { key: String, value: String },
    /// 输出全部配置快照
    Snapshot,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::debug!("{} v{}", kiln_curve::APP_NAME, kiln_curve::VERSION);

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Glasses(source) => run_glasses(source),
        Command::Config { config_db, action } => run_config(&config_db, action),
    }
}

/// 打开配置（未指定数据库时使用默认配置）
fn open_config(config_db: Option<&str>) -> Result<Option<ConfigManager>> {
    config_db
        .map(|path| {
            ConfigManager::new(path).map_err(|e| anyhow!("无法打开配置数据库 {}: {}", path, e))
        })
        .transpose()
}

/// 数据集路径: --dataset 优先，其次配置 dataset_path
fn dataset_path(source: &SourceArgs, config: Option<&ConfigManager>) -> Result<PathBuf> {
    let path = match (&source.dataset, config) {
        (Some(path), _) => path.clone(),
        (None, Some(config)) => config
            .get_dataset_path()
            .map_err(|e| anyhow!("读取配置失败: {}", e))?
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("未指定 --dataset，且配置中没有 dataset_path"))?,
        (None, None) => return Err(anyhow!("必须指定 --dataset 或 --config-db")),
    };
    Ok(path)
}

fn load_dataset(source: &SourceArgs, config: Option<&ConfigManager>) -> Result<GlassPropertiesTable> {
    let path = dataset_path(source, config)?;
    GlassPropertiesTable::from_path(&path)
        .with_context(|| format!("加载数据集失败: {}", path.display()))
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = open_config(args.source.config_db.as_deref())?;
    let settings = match &config {
        Some(config) => config
            .load_generator_settings()
            .map_err(|e| anyhow!("读取配置失败: {}", e))?,
        None => GeneratorSettings::default(),
    };

    let path = dataset_path(&args.source, config.as_ref())?;

    let request = TemplateRequest::new(
        args.glass,
        args.firing,
        args.oven.unwrap_or_else(|| settings.default_oven_type.clone()),
        args.radius,
        args.layers,
        args.hold.unwrap_or(settings.default_top_hold_minutes),
        args.room_temp.unwrap_or(settings.default_room_temp),
    );

    let api = CurveApi::from_dataset_path(&path, settings)
        .with_context(|| format!("加载数据集失败: {}", path.display()))?;

    if let Some(name) = args.name {
        let snapshot = config
            .as_ref()
            .map(|c| c.get_config_snapshot())
            .transpose()
            .map_err(|e| anyhow!("读取配置快照失败: {}", e))?;
        let curve = api.create_template(&name, &request, snapshot)?;
        println!("{}", serde_json::to_string_pretty(&curve)?);
        return Ok(());
    }

    let phases = api.generate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&phases)?);
        return Ok(());
    }

    println!(
        "{:<22} {:>8} {:>8} {:>8} {:>8}",
        "阶段", "目标°C", "速率", "保温", "时长"
    );
    for (stage, phase) in TemplateStage::ALL.iter().zip(phases.iter()) {
        println!(
            "{:<22} {:>8} {:>8} {:>8} {:>8}",
            stage.to_string(),
            phase.target_temp,
            phase.velocity.map(|v| v.to_string()).unwrap_or_default(),
            phase.hold_time,
            phase.duration
        );
    }

    let profile = api.curve_profile(request.room_temp, &phases);
    println!(
        "总时长: {} 分钟 ({:.1} 小时), 最高温度: {}°C",
        profile.total_minutes,
        profile.total_minutes as f64 / 60.0,
        profile.peak_temp
    );

    Ok(())
}

fn run_glasses(source: SourceArgs) -> Result<()> {
    let config = open_config(source.config_db.as_deref())?;
    let dataset = load_dataset(&source, config.as_ref())?;

    for glass in dataset.glasses() {
        println!(
            "{}\t{}\tovens={}",
            glass.name,
            glass.category,
            dataset.oven_types(&glass.category).join(",")
        );
    }

    Ok(())
}

fn run_config(config_db: &str, action: ConfigAction) -> Result<()> {
    let config = ConfigManager::new(config_db)
        .map_err(|e| anyhow!("无法打开配置数据库 {}: {}", config_db, e))?;

    match action {
        ConfigAction::Get { key } => {
            let value = config
                .get_global_config_value(&key)
                .map_err(|e| anyhow!("读取配置失败: {}", e))?;
            match value {
                Some(value) => println!("{}", value),
                None => println!("(未设置)"),
            }
        }
        ConfigAction::Set { key, value } => {
            config
                .set_global_config_value(&key, &value)
                .map_err(|e| anyhow!("写入配置失败: {}", e))?;
            tracing::info!(key = %key, value = %value, "配置已写入");
        }
        ConfigAction::Snapshot => {
            let snapshot = config
                .get_config_snapshot()
                .map_err(|e| anyhow!("读取配置快照失败: {}", e))?;
            println!("{}", snapshot);
        }
    }

    Ok(())
}
