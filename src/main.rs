// ==========================================
// 机场资费管理系统 - 命令行入口
// ==========================================
// 职责: 把命令转发给 TariffApi 并打印结果
// 约束: 不做任何校验或持久化
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use airport_tariffs::api::validator::{validate_number, FIELD_BASE_PRICE, FIELD_DISCOUNT};
use airport_tariffs::config::AppConfig;
use airport_tariffs::{logging, SortDirection, Tariff, TariffApi, TariffRepository, TariffView};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "airport-tariffs", version, about = "机场资费管理系统")]
struct Cli {
    /// 数据库文件路径（默认: $AIRPORT_TARIFFS_DB_PATH 或 ~/airport.db）
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// 以 JSON 输出结果
    #[arg(long, global = true)]
    json: bool,

    /// JSON 格式日志
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

/// 资费输入（原始文本，由 API 层校验）
#[derive(Args, Debug)]
struct TariffArgs {
    /// 目的地
    destination: String,

    /// 基础价格
    base_price: String,

    /// 固定折扣金额
    #[arg(long)]
    discount: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 列出全部资费
    List,

    /// 新增资费
    Add(TariffArgs),

    /// 删除资费（按 目的地/基础价格/折扣 精确匹配）
    Remove(TariffArgs),

    /// 修改资费（删除旧记录后插入新记录）
    Edit {
        /// 原目的地
        #[arg(long)]
        old_destination: String,
        /// 原基础价格
        #[arg(long)]
        old_base_price: String,
        /// 原折扣金额
        #[arg(long)]
        old_discount: Option<String>,

        #[command(flatten)]
        new: TariffArgs,
    },

    /// 最终价格最高的资费
    Max {
        /// 在内存快照上查找，而不是数据库查询
        #[arg(long)]
        in_memory: bool,
    },

    /// 按最终价格排序
    Sort {
        /// 降序
        #[arg(long)]
        desc: bool,
    },

    /// 导出到交换文件
    Export { path: PathBuf },

    /// 从交换文件整体替换
    Import { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    let config = AppConfig::resolve(cli.db.as_deref());
    tracing::debug!("使用数据库: {}", config.db_path.display());

    let repo = TariffRepository::new(&config.db_path)
        .with_context(|| format!("无法打开数据库: {}", config.db_path.display()))?;
    let api = TariffApi::new(Arc::new(repo));

    if let Err(e) = run(&api, cli.command, cli.json) {
        tracing::error!("命令执行失败: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(api: &TariffApi, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::List => print_tariffs(&api.list_all()?, json)?,
        Command::Add(args) => {
            let tariff = parse_args(&args)?;
            api.add_tariff(&tariff)?;
            println!("已新增: {}", tariff);
        }
        Command::Remove(args) => {
            let tariff = existing_tariff(
                &args.destination,
                &args.base_price,
                args.discount.as_deref(),
            )?;
            if api.remove_tariff(&tariff)? {
                println!("已删除: {}", tariff);
            } else {
                println!("未找到匹配的资费");
            }
        }
        Command::Edit {
            old_destination,
            old_base_price,
            old_discount,
            new,
        } => {
            let old =
                existing_tariff(&old_destination, &old_base_price, old_discount.as_deref())?;
            let new = parse_args(&new)?;
            if !api.edit_tariff(&old, &new)? {
                println!("原资费不存在，已按新增处理");
            }
            println!("已修改: {}", new);
        }
        Command::Max { in_memory } => {
            let max = if in_memory {
                api.find_max_in_snapshot()?
            } else {
                api.find_max_final_price()?
            };
            match max {
                Some(tariff) => print_tariffs(&[tariff], json)?,
                None => println!("暂无资费"),
            }
        }
        Command::Sort { desc } => {
            let direction = SortDirection::from(!desc);
            print_tariffs(&api.sorted_by_final_price(direction)?, json)?;
        }
        Command::Export { path } => {
            let count = api
                .export_to(&path)
                .with_context(|| format!("导出失败: {}", path.display()))?;
            println!("已导出 {} 条资费到 {}", count, path.display());
        }
        Command::Import { path } => {
            let count = api
                .import_from(&path)
                .with_context(|| format!("导入失败: {}", path.display()))?;
            println!("已从 {} 导入 {} 条资费", path.display(), count);
        }
    }
    Ok(())
}

fn parse_args(args: &TariffArgs) -> anyhow::Result<Tariff> {
    Ok(TariffApi::parse_tariff_input(
        &args.destination,
        &args.base_price,
        args.discount.as_deref(),
    )?)
}

/// 定位已有资费
///
/// 已存记录可能来自导入文件，目的地不一定符合界面格式规则，
/// 这里只校验数字文本，实体边界仍由 Tariff 构造检查。
fn existing_tariff(
    destination: &str,
    base_price: &str,
    discount: Option<&str>,
) -> anyhow::Result<Tariff> {
    let base_price = validate_number(base_price, FIELD_BASE_PRICE)?;
    let discount = discount
        .map(|text| validate_number(text, FIELD_DISCOUNT))
        .transpose()?;
    Ok(TariffApi::new_tariff(destination, base_price, discount)?)
}

fn print_tariffs(tariffs: &[Tariff], json: bool) -> anyhow::Result<()> {
    if json {
        let views: Vec<TariffView> = tariffs.iter().map(TariffView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else if tariffs.is_empty() {
        println!("暂无资费");
    } else {
        for tariff in tariffs {
            println!("{}", tariff);
        }
    }
    Ok(())
}
