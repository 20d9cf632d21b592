use chrono::{Local, Utc};
use clap::Parser;
use design_ref_common::catalog::fields;
use design_ref_common::color::Harmony;
use design_ref_common::error::{Error, Result};
use design_ref_common::recipe;
use design_ref_common::record::Record;
use design_ref_common::recommend;
use design_ref_common::selection::Category;
use design_ref_rust::cli::{parse_status, Cli, Commands, Dataset};
use design_ref_rust::config::Config;
use design_ref_rust::render::{self, ListFilter};
use design_ref_rust::review;
use design_ref_rust::store::SelectionStore;
use design_ref_rust::loader;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    // --data-dir指定は設定ファイルより優先
    let data_dir = cli.data_dir.clone().unwrap_or(config.data_dir.clone());

    match cli.command {
        Commands::List {
            dataset,
            search,
            style_type,
            era,
            category,
            severity,
            platform,
            hue,
            harmony,
        } => {
            let harmony = match harmony {
                Some(s) => Some(s.parse::<Harmony>().map_err(Error::Config)?),
                None => None,
            };
            let filter = ListFilter {
                search,
                style_type,
                era,
                category,
                severity,
                platform,
                hue,
                harmony,
            };

            let library = loader::load_library(&data_dir)?;
            let set = SelectionStore::default_store()?.load();

            match dataset {
                Dataset::Styles => {
                    println!("🎨 スタイル一覧\n");
                    render::render_styles(&library.styles, &filter, &set);
                }
                Dataset::Colors => {
                    println!("🌈 配色パレット一覧\n");
                    render::render_colors(&library.colors, &filter, &set);
                }
                Dataset::Typography => {
                    println!("🔤 タイポグラフィ一覧\n");
                    render::render_typography(&library.typography, &filter, &set);
                }
                Dataset::Charts => {
                    println!("📈 チャート選択ガイド\n");
                    render::render_charts(&library.charts, &filter);
                }
                Dataset::Prompts => {
                    println!("💬 プロンプトテンプレート一覧\n");
                    for record in &library.prompts {
                        if !design_ref_common::catalog::matches_search(record, &filter.search) {
                            continue;
                        }
                        println!(
                            "  {}",
                            record.get_or_empty(fields::prompt::CATEGORY)
                        );
                        let keywords = record.get_or_empty(fields::prompt::KEYWORDS);
                        if !keywords.is_empty() {
                            println!("    {}", keywords);
                        }
                    }
                    println!("\n全{}件", library.prompts.len());
                }
                Dataset::Guidelines => {
                    println!("📐 UXガイドライン一覧\n");
                    render::render_guidelines(&library.guidelines, &filter);
                }
                Dataset::Cases => {
                    if library.cases.is_empty() {
                        println!("⚠ 事例データ（cases.csv）がありません");
                    } else {
                        println!("🔍 ダークパターン事例一覧\n");
                        render::render_cases(&library.cases, &filter);
                    }
                }
                Dataset::Stacks => {
                    println!("🛠 技術スタック一覧\n");
                    render::render_stacks(&library, &filter, &set);
                }
            }
        }

        Commands::Stats => {
            let library = loader::load_library(&data_dir)?;
            let set = SelectionStore::default_store()?.load();
            render::render_stats(&library, &set);
        }

        Commands::Select {
            category,
            id,
            name,
            status,
        } => {
            let category: Category = category.parse().map_err(Error::Config)?;
            let status = parse_status(&status)?;
            let name = name.unwrap_or_else(|| id.clone());

            let store = SelectionStore::default_store()?;
            let mut set = store.load();
            set.set(category, &id, &name, status);
            store.save(&set)?;

            match status {
                Some(s) => println!("✔ {} [{}] を {} として記録", name, category, s),
                None => println!("✔ {} [{}] の記録を解除", name, category),
            }
            println!("  記録済み選択: {}件", set.len());
        }

        Commands::Review { category } => {
            let category: Category = category.parse().map_err(Error::Config)?;
            let library = loader::load_library(&data_dir)?;

            let store = SelectionStore::default_store()?;
            let mut set = store.load();

            let changed = match category {
                Category::Style => review::run_interactive_review(
                    &mut set,
                    category,
                    &library.styles,
                    "style",
                    "Style",
                    fields::style::CATEGORY,
                )?,
                Category::Color => review::run_interactive_review(
                    &mut set,
                    category,
                    &library.colors,
                    "color",
                    "Color",
                    fields::color::NAME,
                )?,
                Category::Typography => review::run_interactive_review(
                    &mut set,
                    category,
                    &library.typography,
                    "typography",
                    "Typography",
                    fields::typography::PAIRING_NAME,
                )?,
                Category::Stack => {
                    // スタックはファイル単位で1項目として扱う
                    let records: Vec<Record> = library
                        .stacks
                        .iter()
                        .map(|s| {
                            Record::from_pairs(vec![("Name".to_string(), s.name.clone())])
                        })
                        .collect();
                    review::run_interactive_review(
                        &mut set,
                        category,
                        &records,
                        "stack",
                        "Stack",
                        "Name",
                    )?
                }
            };

            store.save(&set)?;
            println!("\n✅ レビュー完了（{}件更新、記録済み選択: {}件）", changed, set.len());
        }

        Commands::Recipe => {
            let set = SelectionStore::default_store()?.load();

            if !set.is_empty() {
                println!("📌 記録済み選択\n");
                for entry in set.entries() {
                    println!("  [{}] {} ({})", entry.category, entry.name, entry.status);
                }
                println!();
            }

            let date = Local::now().format("%Y-%m-%d").to_string();
            println!("{}", recipe::recipe_text(&set, &date));
        }

        Commands::Export { output } => {
            let set = SelectionStore::default_store()?.load();

            if !recipe::is_exportable(&set) {
                return Err(Error::NotFound(
                    "採用済みの選択がないためエクスポートできません".to_string(),
                ));
            }

            let date = Local::now().format("%Y-%m-%d").to_string();
            let text = recipe::recipe_text(&set, &date);

            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            std::fs::create_dir_all(&dir)?;
            let path = dir.join(recipe::export_file_name(Utc::now().timestamp_millis()));
            std::fs::write(&path, text)?;

            println!("✅ レシピを書き出しました: {}", path.display());
        }

        Commands::Recommend { prompt } => {
            let library = loader::load_library(&data_dir)?;

            println!("🤖 推薦結果\n");
            match recommend::recommend(&prompt, &library.prompts, &library.colors) {
                Some(rec) => {
                    let category = rec.template.get_or_empty(fields::prompt::CATEGORY);
                    if rec.score > 0 {
                        println!("  スタイル: {} (スコア: {})", category, rec.score);
                    } else {
                        println!("  スタイル: {} (既定)", category);
                    }

                    let keywords = rec.template.get_or_empty(fields::prompt::KEYWORDS);
                    if !keywords.is_empty() {
                        println!("  キーワード: {}", keywords);
                    }

                    if let Some(palette) = rec.palette {
                        println!(
                            "  配色: {} ({} / {})",
                            palette.get_or_empty(fields::color::NAME),
                            palette.get_or_empty(fields::color::PRIMARY),
                            palette.get_or_empty(fields::color::BACKGROUND),
                        );
                    }
                }
                None => println!("⚠ プロンプトテンプレートがありません"),
            }
        }

        Commands::Clear => {
            let store = SelectionStore::default_store()?;
            let mut set = store.load();
            let count = set.len();
            set.clear();
            store.save(&set)?;
            println!("✔ 選択状態を全消去しました（{}件）", count);
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データディレクトリを設定しました");
            }

            if show || cli.verbose {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!("データディレクトリ: {}", config.data_dir.display());
            }
        }
    }

    Ok(())
}
