use crate::cli::commands::{Cli, Commands};
use anyhow::{Result, bail};
use lessonprompt::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use lessonprompt::commands::CopyAcknowledgement;
use lessonprompt::form::fields::USE_SLIDES;
use lessonprompt::form::surface::COPY_BUTTON;
use lessonprompt::form::{FormSurface, StateAccessor};
use lessonprompt::storage::{FileStore, KeyValueStore, SnapshotStore};
use lessonprompt::ui::style as ui;
use lessonprompt::{
    Config, Control, FormEvent, MemoryForm, PromptBuilder, PromptBuilderParts, PromptComposer,
};
use std::sync::Arc;
use tracing::debug;

use super::{interactive, view};

/// Wire the file store, the configured clipboard and an in-process form into
/// a [`PromptBuilder`].
fn build(config: &Config) -> Result<PromptBuilder<MemoryForm>> {
    let schema = Arc::new(config.field_schema()?);
    let storage_dir = config.storage_dir();
    debug!(dir = %storage_dir.display(), schema = schema.variant(), "opening draft storage");
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&storage_dir));

    let mut composer = PromptComposer::new(Arc::clone(&schema))?;
    if let Some(dir) = config.templates_dir() {
        composer = composer.with_overrides(&dir)?;
    }

    let clipboard: Arc<dyn Clipboard> = if config.clipboard.enabled {
        Arc::new(SystemClipboard::with_hold(config.clipboard_hold()))
    } else {
        Arc::new(MemoryClipboard::new())
    };

    Ok(PromptBuilder::from_parts(PromptBuilderParts {
        form: MemoryForm::for_schema(&schema),
        accessor: StateAccessor::new(Arc::clone(&schema)),
        snapshots: SnapshotStore::new(store, &schema),
        composer,
        clipboard,
        acknowledgement: CopyAcknowledgement::new(config.ack_duration()),
    }))
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let builder = build(&config)?;
    builder.handle(FormEvent::Loaded).await?;

    match cli.command {
        Commands::Show => {
            view::print_state(&builder);
            Ok(())
        }

        Commands::Fields => {
            view::print_fields(builder.schema());
            Ok(())
        }

        Commands::Set { field, value } => {
            if !builder.schema().text_fields().any(|name| name == field) {
                bail!("`{field}` is not a text field; run `lessonprompt fields` to list them");
            }
            builder.edit(|form| form.set_value(&field, &value));
            builder.handle(FormEvent::Input(field.clone())).await?;
            println!("  {} {}", ui::success("✓"), ui::cyan(&field));
            Ok(())
        }

        Commands::Slides { state } => {
            if !builder.schema().has_toggle(USE_SLIDES) {
                bail!(
                    "schema {} has no slides option; use --schema v2",
                    builder.schema().variant()
                );
            }
            builder.edit(|form| form.set_checked(USE_SLIDES, state.is_on()));
            builder
                .handle(FormEvent::Change(USE_SLIDES.to_string()))
                .await?;
            println!(
                "  {} slides {}",
                ui::success("✓"),
                if state.is_on() { "on" } else { "off" }
            );
            Ok(())
        }

        Commands::Fill => interactive::fill(&builder).await,

        Commands::Generate { copy } => {
            builder.handle(FormEvent::Click(Control::Generate)).await?;
            println!("{}", builder.output());

            if copy {
                builder.handle(FormEvent::Click(Control::Copy)).await?;
                let label = builder.inspect(|form| form.label(COPY_BUTTON).map(str::to_string));
                eprintln!(
                    "  {} {}",
                    ui::success("✓"),
                    label.unwrap_or_else(|| "Copied".into())
                );
            }
            Ok(())
        }

        Commands::Reset => {
            builder.handle(FormEvent::Click(Control::Reset)).await?;
            println!("  {} draft cleared", ui::success("✓"));
            Ok(())
        }
    }
}
