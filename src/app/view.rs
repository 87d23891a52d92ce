use lessonprompt::form::{FieldKind, FieldSchema};
use lessonprompt::ui::style as ui;
use lessonprompt::{MemoryForm, PromptBuilder};

/// Pad before styling; escape codes would otherwise count toward the width.
fn label_cell(text: &str, width: usize) -> String {
    ui::cyan(format!("{text:<width$}"))
}

pub fn print_state(builder: &PromptBuilder<MemoryForm>) {
    let state = builder.read_state();
    let schema = builder.schema();

    println!();
    println!(
        "  {} {}",
        ui::header("Lesson draft"),
        ui::dim(format!("({})", schema.storage_key()))
    );
    for field in schema.fields() {
        let shown = match field.kind {
            FieldKind::Text { .. } => {
                let text = state.text(field.name);
                if text.is_empty() {
                    ui::dim("(empty)")
                } else {
                    ui::value(text)
                }
            }
            FieldKind::Toggle { .. } => {
                if state.toggle(field.name) {
                    ui::value("yes")
                } else {
                    ui::dim("no")
                }
            }
        };
        println!("  {} {shown}", label_cell(field.label, 34));
    }
    println!();
}

pub fn print_fields(schema: &FieldSchema) {
    println!();
    println!(
        "  {} {}",
        ui::header("Fields"),
        ui::dim(format!("(schema {})", schema.variant()))
    );
    for field in schema.fields() {
        let detail = match field.kind {
            FieldKind::Text { fallback } => format!("text, empty → {}", ui::yellow(fallback)),
            FieldKind::Toggle { reveals: Some(panel) } => format!("toggle, shows {panel}"),
            FieldKind::Toggle { reveals: None } => "toggle".to_string(),
        };
        println!(
            "  {} {}  {}",
            label_cell(field.name, 14),
            field.label,
            ui::dim(detail)
        );
    }
    println!();
}
