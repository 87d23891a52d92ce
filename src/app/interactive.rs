use anyhow::Result;
use dialoguer::{Confirm, Input};
use lessonprompt::form::fields::{SLIDES_NOTES, SLIDES_NOTES_PANEL};
use lessonprompt::form::FormSurface;
use lessonprompt::ui::style as ui;
use lessonprompt::{FormEvent, MemoryForm, PromptBuilder};

/// Ask for every field in turn, saving after each answer.
///
/// Toggles come first so that fields inside a hidden panel can be skipped.
pub async fn fill(builder: &PromptBuilder<MemoryForm>) -> Result<()> {
    println!();
    println!(
        "  {} {}",
        ui::header("Lesson details"),
        ui::dim("(Enter keeps the current value)")
    );

    let toggles: Vec<_> = builder
        .schema()
        .fields()
        .iter()
        .filter(|field| !field.is_text())
        .copied()
        .collect();
    for field in toggles {
        let current = builder.inspect(|form| form.checked(field.name).unwrap_or(false));
        let answer = Confirm::new()
            .with_prompt(format!("  {}", field.label))
            .default(current)
            .interact()?;
        builder.edit(|form| form.set_checked(field.name, answer));
        builder
            .handle(FormEvent::Change(field.name.to_string()))
            .await?;
    }

    let texts: Vec<_> = builder
        .schema()
        .fields()
        .iter()
        .filter(|field| field.is_text())
        .copied()
        .collect();
    for field in texts {
        let hidden = builder.inspect(|form| form.is_visible(SLIDES_NOTES_PANEL)) == Some(false);
        if field.name == SLIDES_NOTES && hidden {
            continue;
        }

        let current = builder.inspect(|form| form.value(field.name).unwrap_or_default());
        let answer: String = Input::new()
            .with_prompt(format!("  {}", field.label))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        builder.edit(|form| form.set_value(field.name, &answer));
        builder
            .handle(FormEvent::Input(field.name.to_string()))
            .await?;
    }

    println!(
        "  {} saved; run {} to build the prompt",
        ui::success("✓"),
        ui::yellow("lessonprompt generate")
    );
    Ok(())
}
