//! CLI entrypoint for stockroom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use stockroom_application::{
    AddStockUseCase, BuildInput, BuildSomethingUseCase, CatalogAdminUseCase, FixToolUseCase,
    InventoryStore, NewMaterial, NewTool, UseToolUseCase, UsedToolsUseCase,
};
use stockroom_domain::{BuildRequest, ResourceId, ResourceKind, ResourcePatch, UserId};
use stockroom_infrastructure::{ConfigLoader, JsonFileStore, MemoryStore};
use stockroom_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // === Dependency Injection ===
    // Pick the backing store
    let store: Arc<dyn InventoryStore> = if cli.memory {
        info!("Using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let path = config.store_path();
        info!("Using JSON store at {}", path.display());
        Arc::new(JsonFileStore::open(path)?)
    };

    let json = matches!(cli.output, OutputFormat::Json);

    match cli.command {
        Command::CreateTool {
            name,
            amount,
            cost,
            usage,
            condition,
        } => {
            let admin = CatalogAdminUseCase::new(store);
            let resource = admin
                .create_tool(NewTool {
                    name,
                    amount,
                    cost,
                    usage,
                    condition,
                })
                .await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&resource));
            } else {
                print!("{}", ConsoleFormatter::format_resource(&resource));
            }
        }

        Command::CreateMaterial {
            name,
            amount,
            cost,
            supplier,
            quality,
        } => {
            let admin = CatalogAdminUseCase::new(store);
            let resource = admin
                .create_material(NewMaterial {
                    name,
                    amount,
                    cost,
                    supplier,
                    quality,
                })
                .await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&resource));
            } else {
                print!("{}", ConsoleFormatter::format_resource(&resource));
            }
        }

        Command::CreateUser { name, age } => {
            let admin = CatalogAdminUseCase::new(store);
            let user = admin.create_user(name, age).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&user));
            } else {
                print!("{}", ConsoleFormatter::format_user(&user));
            }
        }

        Command::List { kind } => {
            let kind = ResourceKind::from(kind);
            let admin = CatalogAdminUseCase::new(store);
            let resources = admin.list(kind).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&resources));
            } else {
                let title = match kind {
                    ResourceKind::Tool => "Tools",
                    ResourceKind::Material => "Materials",
                };
                print!("{}", ConsoleFormatter::format_resource_list(title, &resources));
            }
        }

        Command::Update {
            id,
            name,
            amount,
            cost,
            usage,
            condition,
            supplier,
            quality,
        } => {
            let patch = ResourcePatch {
                name,
                amount,
                cost,
                usage,
                condition,
                supplier,
                quality,
            };
            let admin = CatalogAdminUseCase::new(store);
            let resource = admin.update(&ResourceId::new(id), &patch).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&resource));
            } else {
                print!("{}", ConsoleFormatter::format_resource(&resource));
            }
        }

        Command::Delete { id } => {
            let admin = CatalogAdminUseCase::new(store);
            let id = ResourceId::new(id);
            admin.delete(&id).await?;
            if json {
                println!("{}", serde_json::json!({ "deleted": id.as_str() }));
            } else {
                println!("Deleted {}", id);
            }
        }

        Command::Use { user_id, tool_id } => {
            let use_case = UseToolUseCase::new(store);
            let outcome = use_case
                .execute(&UserId::new(user_id), &ResourceId::new(tool_id))
                .await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&outcome));
            } else {
                println!(
                    "Used {}; condition is now {}/100",
                    outcome.tool_name, outcome.condition
                );
            }
        }

        Command::Fix { tool_id } => {
            let use_case = FixToolUseCase::new(store);
            let outcome = use_case.execute(&ResourceId::new(tool_id)).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&outcome));
            } else {
                println!(
                    "Repaired {}; condition is now {}/100",
                    outcome.tool_name, outcome.condition
                );
            }
        }

        Command::UsedTools { user, by_id } => {
            let use_case = UsedToolsUseCase::new(store);
            let names = if by_id {
                use_case.execute(&UserId::new(user)).await?
            } else {
                use_case.execute_by_name(&user).await?
            };
            if json {
                println!("{}", ConsoleFormatter::format_json(&names));
            } else {
                print!("{}", ConsoleFormatter::format_used_tools(&names));
            }
        }

        Command::AddStock { kind, name, amount } => {
            let use_case = AddStockUseCase::new(store);
            let new_amount = use_case
                .execute(ResourceKind::from(kind), &name, amount)
                .await?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "name": name, "amount": new_amount })
                );
            } else {
                println!("Amount of {} is now {}", name, new_amount);
            }
        }

        Command::Build {
            user_id,
            tools,
            materials,
        } => {
            let use_case = BuildSomethingUseCase::new(store);
            let input = BuildInput::new(user_id, BuildRequest::new(tools, materials));
            let outcome = use_case.execute(input).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&outcome));
            } else {
                print!("{}", ConsoleFormatter::format_build(&outcome));
            }
        }
    }

    Ok(())
}
